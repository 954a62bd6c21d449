use super::card::Card;
use super::hand::Hand;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two distinct cards are present.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Hand> for Hole {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(format!("hole must contain exactly two cards, got {}", n)),
        }
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        debug_assert!(a != b);
        Self(Hand::from(a | b))
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = String;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] if a != b => Ok(Self::from((*a, *b))),
            [a, b] => Err(format!("hole cards must differ, got {} {}", a, b)),
            _ => Err(format!("hole must contain exactly two cards, got {}", cards.len())),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_distinct_cards() {
        assert!(Hole::try_from("As Kd").is_ok());
        assert!(Hole::try_from("As").is_err());
        assert!(Hole::try_from("As Kd Qh").is_err());
        assert!(Hole::try_from("As As").is_err());
    }

    #[test]
    fn paired_slice_rejected() {
        let ace = Card::try_from("As").unwrap();
        assert!(Hole::try_from([ace, ace].as_slice()).is_err());
    }
}
