use super::scenario::Spot;
use super::tally::Outcome;
use super::tally::Tally;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Strength;
use crate::evaluation::Evaluate;
use rand::Rng;
use rand::seq::SliceRandom;

/// Monte Carlo showdown sampler.
///
/// Each trial draws, without replacement, the rest of the board followed by
/// two cards per opponent from the unseen deck, then settles one showdown.
/// The draw is a partial Fisher-Yates shuffle of a scratch copy of the deck,
/// so every trial sees a uniformly random deal whatever order the scratch
/// buffer was left in by the previous one.
pub struct Sampler<'a, E> {
    evaluator: &'a E,
}

impl<'a, E> Sampler<'a, E>
where
    E: Evaluate,
{
    pub fn new(evaluator: &'a E) -> Self {
        Self { evaluator }
    }

    pub fn run<R: Rng>(&self, spot: &Spot, rng: &mut R) -> Tally {
        let mut tally = Tally::default();
        let hero = Hand::from(spot.hero());
        let board = Hand::from(spot.board());
        let pending = spot.street().n_pending();
        let mut deck = spot.unseen().cards();
        let needed = match spot
            .opponents()
            .checked_mul(2)
            .and_then(|holes| holes.checked_add(pending))
        {
            Some(needed) if needed <= deck.len() => needed,
            _ => {
                log::debug!(
                    "cannot deal {} opponents from {} unseen cards",
                    spot.opponents(),
                    deck.len()
                );
                return tally;
            }
        };
        for _ in 0..spot.trials() {
            let (dealt, _) = deck.partial_shuffle(rng, needed);
            let (runout, holes) = dealt.split_at(pending);
            let public = runout.iter().fold(board, |public, card| public.with(*card));
            if let Some(outcome) = self.showdown(hero, public, holes) {
                tally.record(outcome);
            }
        }
        tally
    }

    /// `None` when hero's own hand does not evaluate; such trials don't count.
    fn showdown(&self, hero: Hand, public: Hand, holes: &[Card]) -> Option<Outcome> {
        let mine = self.evaluator.evaluate(Hand::add(hero, public))?;
        let mut best = None::<Strength>;
        let mut ties = 0;
        for hole in holes.chunks_exact(2) {
            let theirs = public.with(hole[0]).with(hole[1]);
            match self.evaluator.evaluate(theirs) {
                Some(theirs) if theirs == mine => ties += 1,
                Some(theirs) if theirs > mine => best = best.max(Some(theirs)),
                _ => continue,
            }
        }
        match best {
            Some(best) => Some(Outcome::Loss(best.category())),
            None => Some(Outcome::Share(1 + ties)),
        }
    }
}
