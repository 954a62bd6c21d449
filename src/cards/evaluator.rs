use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

/// A-2-3-4-5 as a rank mask
const WHEEL: u16 = 0b_1000000001111;

/// A lazy evaluator for a hand's strength.
///
/// The hand is read once into rank masks by multiplicity: `depth[i]` has bit
/// `r` set when rank `r` appears more than `i` times. Every category is then
/// a few masks and shifts away, checked strongest first. Works for any number
/// of cards; with more than five it finds the best five-card hand without
/// enumerating subsets.
pub struct Evaluator {
    hand: Hand,
    depth: [u16; 4],
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let bits = u64::from(hand);
        let mut depth = [0u16; 4];
        for rank in 0..13u8 {
            let n = (bits & u64::from(Rank::from(rank))).count_ones() as usize;
            depth.iter_mut().take(n).for_each(|mask| *mask |= 1 << rank);
        }
        Self { hand, depth }
    }
}

impl Evaluator {
    pub fn strength(&self) -> Option<Strength> {
        self.find_ranking()
            .map(|ranking| Strength::from((ranking, self.find_kickers(ranking))))
    }
    pub fn find_ranking(&self) -> Option<Ranking> {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_pairs())
            .or_else(|| self.find_high_card())
    }
    /// Keep the highest ranks the category leaves room for. Flush kickers
    /// come from the flush suit only.
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        let pool = match ranking {
            Ranking::Flush(_) => self.flush_ranks().unwrap_or_default(),
            _ => self.depth[0],
        };
        let mut kicks = pool & ranking.mask();
        while kicks.count_ones() as usize > ranking.n_kickers() {
            kicks &= kicks - 1;
        }
        Kickers::from(kicks)
    }

    fn find_straight_flush(&self) -> Option<Ranking> {
        self.flush_ranks()
            .and_then(Self::straight)
            .map(Ranking::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        Self::top(self.depth[3]).map(Ranking::FourOAK)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        let trips = Self::top(self.depth[2])?;
        let pair = Self::top(self.depth[1] & !u16::from(trips))?;
        Some(Ranking::FullHouse(trips, pair))
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.flush_ranks().map(Rank::from).map(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::straight(self.depth[0]).map(Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        Self::top(self.depth[2]).map(Ranking::ThreeOAK)
    }
    fn find_pairs(&self) -> Option<Ranking> {
        let hi = Self::top(self.depth[1])?;
        match Self::top(self.depth[1] & !u16::from(hi)) {
            Some(lo) => Some(Ranking::TwoPair(hi, lo)),
            None => Some(Ranking::OnePair(hi)),
        }
    }
    fn find_high_card(&self) -> Option<Ranking> {
        Self::top(self.depth[0]).map(Ranking::HighCard)
    }

    /// rank mask of the first suit holding five or more cards
    fn flush_ranks(&self) -> Option<u16> {
        Suit::all()
            .iter()
            .map(|suit| self.hand.of(suit))
            .find(|cards| cards.size() >= 5)
            .map(u16::from)
    }
    fn top(mask: u16) -> Option<Rank> {
        match mask {
            0 => None,
            mask => Some(Rank::from(mask)),
        }
    }
    /// bit r of `runs` survives when ranks r-4 through r are all present
    fn straight(ranks: u16) -> Option<Rank> {
        let runs = ranks & ranks << 1 & ranks << 2 & ranks << 3 & ranks << 4;
        match runs {
            0 if ranks & WHEEL == WHEEL => Some(Rank::Five),
            0 => None,
            runs => Some(Rank::from(runs)),
        }
    }
}
