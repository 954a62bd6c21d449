use super::ranking::Ranking;

/// The nine coarse hand categories, weakest first.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Category {
    pub const COUNT: usize = 9;

    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOAK,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOAK,
            Self::StraightFlush,
        ]
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOAK => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOAK => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
        }
    }
}

impl From<Ranking> for Category {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::HighCard(_) => Self::HighCard,
            Ranking::OnePair(_) => Self::OnePair,
            Ranking::TwoPair(..) => Self::TwoPair,
            Ranking::ThreeOAK(_) => Self::ThreeOAK,
            Ranking::Straight(_) => Self::Straight,
            Ranking::Flush(_) => Self::Flush,
            Ranking::FullHouse(..) => Self::FullHouse,
            Ranking::FourOAK(_) => Self::FourOAK,
            Ranking::StraightFlush(_) => Self::StraightFlush,
        }
    }
}

/// usize isomorphism, for histogram indexing
impl From<Category> for usize {
    fn from(c: Category) -> usize {
        c as usize
    }
}
impl From<usize> for Category {
    fn from(n: usize) -> Self {
        Self::all()[n]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl serde::Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_usize() {
        for category in Category::all() {
            assert_eq!(category, Category::from(usize::from(category)));
        }
    }

    #[test]
    fn serializes_label() {
        let json = serde_json::to_string(&Category::FullHouse).unwrap();
        assert_eq!(json, "\"Full House\"");
    }
}
