use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// The cards nobody has seen yet.
///
/// Wraps a [`Hand`] of remaining cards. Iteration and [`Deck::cards`] follow
/// the canonical deck order (rank-major, suit-minor), so anything that walks
/// the deck is reproducible. Random removal takes an explicit generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// The deck minus every card in `used`. Cards already gone are ignored.
    pub fn without(&self, used: Hand) -> Self {
        Self(self.0.minus(used))
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Remaining cards in canonical order.
    pub fn cards(&self) -> Vec<Card> {
        Vec::from(self.0)
    }
    /// Draws and removes a uniformly random card.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rng.random_range(0..n);
        let mut cards = self.0;
        let card = cards.nth(i).expect("index within deck size");
        self.0.remove(card);
        card
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole<R: Rng>(&mut self, rng: &mut R) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = Hand;
    fn into_iter(self) -> Self::IntoIter {
        self.0
    }
}
