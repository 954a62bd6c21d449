use crate::cards::Hand;
use crate::cards::Strength;

/// Best-five-card evaluation of 5 to 7 cards.
///
/// Anything outside that range comes back as `None`, which callers treat as
/// weaker than every real hand. Implementations must agree on every input so
/// they can be swapped without touching the sampler or the classifier.
pub trait Evaluate {
    fn evaluate(&self, hand: Hand) -> Option<Strength>;
}

pub fn playable(hand: &Hand) -> bool {
    (5..=7).contains(&hand.size())
}
