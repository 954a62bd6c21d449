use super::evaluate::Evaluate;
use super::evaluate::playable;
use crate::cards::Evaluator;
use crate::cards::Hand;
use crate::cards::Strength;
use crate::cards::Subsets;

/// Scores every five-card subset on its own and keeps the best.
///
/// Slower than [`super::Bitwise`] by the C(7,5) = 21 subsets it visits, but
/// it never relies on reasoning about more than five cards at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Exhaustive;

impl Evaluate for Exhaustive {
    fn evaluate(&self, hand: Hand) -> Option<Strength> {
        match playable(&hand) {
            true => Subsets::from((5, hand))
                .filter_map(|five| Evaluator::from(five).strength())
                .max(),
            false => None,
        }
    }
}
