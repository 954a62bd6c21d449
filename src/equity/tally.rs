use crate::Probability;
use crate::cards::Category;

/// How one simulated showdown went for hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// hero holds the best hand, shared with this many players in total
    Share(usize),
    /// someone beat hero; this is the category of the best opposing hand
    Loss(Category),
}

/// Running counters over the trials of one simulation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tally {
    share: f64,
    counted: usize,
    losses: usize,
    beaten: [usize; Category::COUNT],
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        self.counted += 1;
        match outcome {
            Outcome::Share(winners) => {
                debug_assert!(winners > 0);
                self.share += 1. / winners as f64;
            }
            Outcome::Loss(category) => {
                self.losses += 1;
                self.beaten[usize::from(category)] += 1;
            }
        }
    }

    pub fn counted(&self) -> usize {
        self.counted
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn equity(&self) -> Probability {
        match self.counted {
            0 => 0.,
            n => self.share / n as f64,
        }
    }
    pub fn loss_rate(&self) -> Probability {
        match self.counted {
            0 => 0.,
            n => self.losses as f64 / n as f64,
        }
    }
    /// the opposing category that beat hero most often, stronger on ties
    pub fn dominant(&self) -> Option<Category> {
        self.beaten
            .iter()
            .enumerate()
            .filter(|(_, n)| **n > 0)
            .max_by_key(|(_, n)| **n)
            .map(|(i, _)| Category::from(i))
    }
}
