use super::outs::Out;
use super::outs::OutKind;
use super::outs::Outs;
use super::sampler::Sampler;
use super::scenario::Spot;
use super::tally::Tally;
use super::tuning::Tuning;
use crate::cards::Card;
use crate::cards::Category;
use crate::evaluation::Evaluate;
use rand::Rng;

/// Sorts every unseen card into real, dirty or reverse outs.
///
/// A card first has to lift hero's category to be any kind of out. Whether
/// it is real or dirty is then settled by re-running a smaller simulation
/// with that card forced onto the board and comparing against the baseline.
/// Cards that don't lift hero's category can still be reverse outs if
/// that re-simulation shows hero losing noticeably more often.
pub struct Classifier<'a, E> {
    evaluator: &'a E,
    tuning: Tuning,
}

impl<'a, E> Classifier<'a, E>
where
    E: Evaluate,
{
    pub fn new(evaluator: &'a E, tuning: Tuning) -> Self {
        Self { evaluator, tuning }
    }

    pub fn classify<R: Rng>(&self, spot: &Spot, baseline: &Tally, rng: &mut R) -> Outs {
        let mut outs = Outs::default();
        if spot.street().n_pending() == 0 {
            return outs;
        }
        let Some(current) = self.category(spot) else {
            return outs;
        };
        let trials = self.tuning.outs_trials(spot.trials());
        let sampler = Sampler::new(self.evaluator);
        for card in spot.unseen() {
            let forced = spot.force(card).with_trials(trials);
            let Some(landed) = self.category(&forced) else {
                continue;
            };
            let tally = sampler.run(&forced, rng);
            if let Some((kind, out)) = self.judge(card, current, landed, baseline, &tally) {
                log::trace!("{:?} out {}", kind, out);
                outs.push(kind, out);
            }
        }
        outs
    }

    fn judge(
        &self,
        card: Card,
        current: Category,
        landed: Category,
        baseline: &Tally,
        forced: &Tally,
    ) -> Option<(OutKind, Out)> {
        let out = Out::new(card, landed);
        let gain = forced.equity() - baseline.equity();
        let harm = forced.loss_rate() - baseline.loss_rate();
        match landed > current {
            true if gain > self.tuning.equity_tolerance => Some((OutKind::Real, out)),
            true => Some((OutKind::Dirty, out)),
            false if harm > self.tuning.loss_tolerance => {
                Some((OutKind::Reverse, out.against(forced.dominant())))
            }
            false => None,
        }
    }

    fn category(&self, spot: &Spot) -> Option<Category> {
        self.evaluator
            .evaluate(spot.known())
            .map(|strength| strength.category())
    }
}
