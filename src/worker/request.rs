use crate::Chips;
use crate::cards::Card;
use crate::equity::Engine;
use crate::equity::EquityResult;
use crate::equity::Scenario;
use crate::equity::Tuning;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One equity query as it arrives from a browser or HTTP client.
///
/// Card slots the user hasn't filled in arrive as empty strings and are
/// skipped. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Request {
    pub hero_cards: Vec<String>,
    pub board_cards: Vec<String>,
    pub num_opponents: usize,
    pub pot: Chips,
    pub our_bet: Chips,
    pub iterations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub tuning: Tuning,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            hero_cards: Vec::new(),
            board_cards: Vec::new(),
            num_opponents: 1,
            pot: 0.,
            our_bet: 0.,
            iterations: crate::DEFAULT_TRIALS,
            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Request {
    /// Decode the card strings. Only unreadable cards are errors here; a
    /// readable but unplayable scenario still runs and comes back zeroed.
    pub fn scenario(&self) -> anyhow::Result<Scenario> {
        let hero = Self::cards(&self.hero_cards)?;
        let board = Self::cards(&self.board_cards)?;
        Ok(Scenario::new(&hero, &board, self.num_opponents, self.pot, self.our_bet)
            .with_trials(self.iterations))
    }

    pub fn engine(&self) -> Engine {
        Engine::new(Default::default(), self.tuning)
    }

    /// Seeded when the caller asks for reproducibility, fresh otherwise.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Clamp the trial budgets so one query from the outside can't hold a
    /// thread for an unbounded time.
    pub fn bounded(mut self) -> Self {
        let tuning = Tuning {
            outs_trial_floor: self.tuning.outs_trial_floor.min(crate::MAX_TRIALS),
            outs_trial_fraction: self.tuning.outs_trial_fraction.clamp(0., 1.),
            ..self.tuning
        };
        let iterations = self.iterations.min(crate::MAX_TRIALS);
        if iterations != self.iterations || tuning != self.tuning {
            log::debug!("clamping trial budget of {} iterations", self.iterations);
        }
        self.iterations = iterations;
        self.tuning = tuning;
        self
    }

    /// Run the whole query on the calling thread.
    pub fn evaluate(&self) -> anyhow::Result<EquityResult> {
        let scenario = self.scenario()?;
        let ref mut rng = self.rng();
        Ok(self.engine().equity(&scenario, rng))
    }

    fn cards(slots: &[String]) -> anyhow::Result<Vec<Card>> {
        slots
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| Card::try_from(s).map_err(|e| anyhow::anyhow!("invalid card {}: {}", s, e)))
            .collect()
    }
}

impl TryFrom<&str> for Request {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(json)?)
    }
}
