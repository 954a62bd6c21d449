use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The community cards. Always 0, 3, 4, or 5 distinct cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Board(Hand);

impl Board {
    pub fn street(&self) -> Street {
        Street::try_from(self.0.size()).expect("board size checked at construction")
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Lays one more card, as the next street would.
    pub fn with(&self, card: Card) -> Self {
        debug_assert!(self.0.size() < 5);
        debug_assert!(!self.0.contains(&card));
        Self(self.0.with(card))
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = String;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let hand = cards.iter().copied().collect::<Hand>();
        if hand.size() != cards.len() {
            return Err("repeated card on board".into());
        }
        Street::try_from(hand.size())?;
        Ok(Self(hand))
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn street_follows_size() {
        let board = Board::try_from(cards("Qs Js 2d").as_slice()).unwrap();
        assert_eq!(board.street(), Street::Flop);
        let turn = board.with(Card::try_from("3c").unwrap());
        assert_eq!(turn.street(), Street::Turn);
    }

    #[test]
    fn partial_flop_rejected() {
        assert!(Board::try_from(cards("Qs Js").as_slice()).is_err());
    }

    #[test]
    fn repeats_rejected() {
        assert!(Board::try_from(cards("Qs Js Qs").as_slice()).is_err());
    }
}
