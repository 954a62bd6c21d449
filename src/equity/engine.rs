use super::classifier::Classifier;
use super::metrics;
use super::result::EquityResult;
use super::sampler::Sampler;
use super::scenario::Scenario;
use super::scenario::Spot;
use super::tuning::Tuning;
use crate::Chips;
use crate::cards::Card;
use crate::evaluation::Bitwise;
use crate::evaluation::Evaluate;
use rand::Rng;

/// Ties the sampler, the outs classifier and the closed-form metrics into
/// one call per scenario.
///
/// An engine holds no per-call state. Randomness comes in with each call so
/// callers decide whether runs are reproducible.
#[derive(Debug, Default, Clone)]
pub struct Engine<E = Bitwise> {
    evaluator: E,
    tuning: Tuning,
}

impl<E> Engine<E>
where
    E: Evaluate,
{
    pub fn new(evaluator: E, tuning: Tuning) -> Self {
        Self { evaluator, tuning }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Simulate one scenario. Inputs that can't be simulated give the
    /// all-zero result rather than an error.
    pub fn equity<R: Rng>(&self, scenario: &Scenario, rng: &mut R) -> EquityResult {
        match Spot::try_from(scenario) {
            Ok(spot) => self.simulate(&spot, rng),
            Err(e) => {
                log::debug!("skipping scenario: {}", e);
                EquityResult::default()
            }
        }
    }

    fn simulate<R: Rng>(&self, spot: &Spot, rng: &mut R) -> EquityResult {
        let baseline = Sampler::new(&self.evaluator).run(spot, rng);
        let equity = metrics::percent(baseline.equity());
        let ev = metrics::round2(metrics::expected_value(equity / 100., spot.pot(), spot.bet()));
        let hand_name = self
            .evaluator
            .evaluate(spot.known())
            .map(|strength| strength.category().label().to_string())
            .unwrap_or_default();
        let pot_odds = metrics::percent(metrics::pot_odds(spot.pot(), spot.bet()));
        let outs = match baseline.counted() {
            0 => Default::default(),
            _ => Classifier::new(&self.evaluator, self.tuning).classify(spot, &baseline, rng),
        };
        let remaining = spot.unseen().size();
        let pending = spot.street().n_pending();
        log::debug!(
            "{} vs {} on {}: {:.2}% over {} trials, {} outs",
            spot.hero(),
            spot.opponents(),
            spot.board(),
            equity,
            baseline.counted(),
            outs.real().len()
        );
        EquityResult {
            equity,
            ev,
            hand_name,
            pot_odds,
            outs: outs.real().len(),
            draw_odds: metrics::percent(metrics::draw_odds(outs.real().len(), remaining, pending)),
            outs_list: outs.real().to_vec(),
            dirty_outs: outs.dirty().len(),
            dirty_outs_list: outs.dirty().to_vec(),
            reverse_outs: outs.reverse().len(),
            reverse_draw_odds: metrics::percent(metrics::draw_odds(
                outs.reverse().len(),
                remaining,
                pending,
            )),
            reverse_outs_list: outs.reverse().to_vec(),
        }
    }
}

/// One-shot convenience over a default [`Engine`].
pub fn equity<R: Rng>(
    hero: &[Card],
    board: &[Card],
    opponents: usize,
    pot: Chips,
    bet: Chips,
    trials: usize,
    rng: &mut R,
) -> EquityResult {
    let scenario = Scenario::new(hero, board, opponents, pot, bet).with_trials(trials);
    Engine::<Bitwise>::default().equity(&scenario, rng)
}
