use super::hand::Hand;

/// Subsets iterates over every k-card subset of a given Hand.
///
/// It walks k-bit masks over the *local* indices `0..n` of the hand's cards
/// with Gosper's hack, then maps each local mask back onto the cards.
/// No recursion, no intermediate collections of subsets, and a fixed order:
/// local masks ascend numerically.
pub struct Subsets {
    cards: [u64; 52],
    n: usize,
    next: u64,
}

impl Subsets {
    pub fn combinations(&self) -> usize {
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (self.n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next >= 1 << self.n
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn current(&self) -> Hand {
        let mut local = self.next;
        let mut cards = 0u64;
        while local > 0 {
            cards |= self.cards[local.trailing_zeros() as usize];
            local &= local - 1;
        }
        Hand::from(cards)
    }
}

impl Iterator for Subsets {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = self.current();
            self.next = self.permute();
            Some(hand)
        }
    }
}

/// size is immutable and must be decided at construction.
/// k == 0 and k > n both yield nothing.
impl From<(usize, Hand)> for Subsets {
    fn from((k, hand): (usize, Hand)) -> Self {
        let mut cards = [0u64; 52];
        let mut n = 0;
        for card in hand {
            cards[n] = u64::from(card);
            n += 1;
        }
        let next = match k {
            0 => 0,
            k if k > n => 0,
            k => (1 << k) - 1,
        };
        Self { cards, n, next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let hand = Hand::from(0b11111);
        let mut iter = Subsets::from((3, hand));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
        assert!(iter.next() == Some(Hand::from(0b10101)));
        assert!(iter.next() == Some(Hand::from(0b10110)));
        assert!(iter.next() == Some(Hand::from(0b11001)));
        assert!(iter.next() == Some(Hand::from(0b11010)));
        assert!(iter.next() == Some(Hand::from(0b11100)));
        assert!(iter.next() == None);
    }

    #[test]
    fn sparse_hand_maps_back_onto_its_cards() {
        let hand = Hand::from(0b1_0000_0001_0000_0001);
        let subsets = Subsets::from((2, hand)).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 3);
        assert!(subsets.iter().all(|s| s.size() == 2));
        assert!(subsets.iter().all(|s| s.minus(hand).size() == 0));
    }

    #[test]
    fn seven_choose_five() {
        let hand = Hand::try_from("As Ah Kd Kc Qs Jh 9d").unwrap();
        let iter = Subsets::from((5, hand));
        assert_eq!(iter.combinations(), 21);
        assert_eq!(iter.count(), 21);
    }

    #[test]
    fn degenerate_sizes() {
        let hand = Hand::try_from("As Ah Kd").unwrap();
        assert_eq!(Subsets::from((5, hand)).count(), 0);
        assert_eq!(Subsets::from((0, hand)).count(), 0);
        assert_eq!(Subsets::from((3, hand)).count(), 1);
    }
}
