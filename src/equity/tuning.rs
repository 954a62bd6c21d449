use crate::Probability;

/// Policy knobs for the outs classifier.
///
/// The tolerances are heuristics, not derived quantities, so they live here
/// instead of inside the classifier. Defaults come from the crate constants.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tuning {
    /// fewest trials any single candidate card is simulated with
    pub outs_trial_floor: usize,
    /// share of the caller's trial budget each candidate card gets
    pub outs_trial_fraction: f64,
    /// equity gain a card must beat to count as a real out
    pub equity_tolerance: Probability,
    /// loss-rate rise a card must beat to count as a reverse out
    pub loss_tolerance: Probability,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            outs_trial_floor: crate::OUTS_TRIAL_FLOOR,
            outs_trial_fraction: crate::OUTS_TRIAL_FRACTION,
            equity_tolerance: crate::EQUITY_TOLERANCE,
            loss_tolerance: crate::LOSS_TOLERANCE,
        }
    }
}

impl Tuning {
    /// Trial budget for re-simulating one candidate card.
    pub fn outs_trials(&self, trials: usize) -> usize {
        let share = (trials as f64 * self.outs_trial_fraction).round() as usize;
        share.max(self.outs_trial_floor)
    }
}
