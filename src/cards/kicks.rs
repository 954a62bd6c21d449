use super::rank::Rank;

/// A hand's kicker cards.
///
/// Stored as a u16 rank mask. For two masks with the same number of ranks,
/// integer order is the same as comparing the ranks highest first, which is
/// exactly how kickers break ties.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
///
/// [2c, Ts, Jc, Js, Jd, Jh]
/// xxx 0001100000001
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        let mut value = k.0;
        let mut index = 0u8;
        let mut ranks = Vec::new();
        while value > 0 {
            if value & 1 == 1 {
                ranks.push(Rank::from(index));
            }
            value = value >> 1;
            index = index + 1;
        }
        ranks
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self).iter().rev() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_top_kicker_wins() {
        let ak = Kickers::from(vec![Rank::Ace, Rank::Two]);
        let kq = Kickers::from(vec![Rank::King, Rank::Queen]);
        assert!(ak > kq);
    }

    #[test]
    fn display_highest_first() {
        let kicks = Kickers::from(vec![Rank::Two, Rank::King, Rank::Ten]);
        assert_eq!(kicks.to_string(), "KT2");
    }
}
