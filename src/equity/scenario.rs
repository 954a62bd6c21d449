use crate::Chips;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;

/// Everything a caller knows about the hand, exactly as supplied.
///
/// Nothing is checked here. [`Spot`] is the validated form the simulation
/// actually runs on.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub hero: Vec<Card>,
    pub board: Vec<Card>,
    pub opponents: usize,
    pub pot: Chips,
    pub bet: Chips,
    pub trials: usize,
}

impl Scenario {
    pub fn new(hero: &[Card], board: &[Card], opponents: usize, pot: Chips, bet: Chips) -> Self {
        Self {
            hero: hero.to_vec(),
            board: board.to_vec(),
            opponents,
            pot,
            bet,
            trials: crate::DEFAULT_TRIALS,
        }
    }
    pub fn with_trials(self, trials: usize) -> Self {
        Self { trials, ..self }
    }
}

/// parse as "hero ~ board", e.g. "As Ks ~ Qs Js 2d", heads-up with no money in play
impl TryFrom<&str> for Scenario {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (hero, board) = s
            .split_once('~')
            .ok_or_else(|| anyhow::anyhow!("expected hero ~ board"))?;
        let hero = Card::parse(hero).map_err(anyhow::Error::msg)?;
        let board = Card::parse(board).map_err(anyhow::Error::msg)?;
        Ok(Self::new(&hero, &board, 1, 0., 0.))
    }
}

impl crate::Arbitrary for Scenario {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut deck = Deck::new();
        let street = [Street::Flop, Street::Turn, Street::Rive][rng.random_range(0..3)];
        let hero = Vec::<Card>::from(Hand::from(deck.hole(rng)));
        let board = (0..street.n_observed())
            .map(|_| deck.draw(rng))
            .collect::<Vec<Card>>();
        let opponents = rng.random_range(0..=4);
        let pot = rng.random_range(0..=200) as Chips;
        let bet = rng.random_range(0..=100) as Chips;
        Self::new(&hero, &board, opponents, pot, bet).with_trials(200)
    }
}

/// A validated scenario: two distinct hole cards, at least a flop, no card
/// shown twice, and sane chip amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    hero: Hole,
    board: Board,
    opponents: usize,
    pot: Chips,
    bet: Chips,
    trials: usize,
}

impl Spot {
    pub fn hero(&self) -> Hole {
        self.hero
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn opponents(&self) -> usize {
        self.opponents
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    /// hero's cards together with the board
    pub fn known(&self) -> Hand {
        Hand::add(Hand::from(self.hero), Hand::from(self.board))
    }
    /// every card neither on the board nor in hero's hand
    pub fn unseen(&self) -> Deck {
        Deck::new().without(self.known())
    }
    /// the same spot with one more card already dealt to the board
    pub fn force(&self, card: Card) -> Self {
        Self {
            board: self.board.with(card),
            ..*self
        }
    }
    pub fn with_trials(&self, trials: usize) -> Self {
        Self { trials, ..*self }
    }
}

impl TryFrom<&Scenario> for Spot {
    type Error = anyhow::Error;
    fn try_from(scenario: &Scenario) -> Result<Self, Self::Error> {
        let hero = Hole::try_from(scenario.hero.as_slice()).map_err(anyhow::Error::msg)?;
        let board = Board::try_from(scenario.board.as_slice()).map_err(anyhow::Error::msg)?;
        if board.size() < Street::Flop.n_observed() {
            anyhow::bail!("board needs at least a flop, got {} cards", board.size());
        }
        if Hand::from(hero).intersects(&Hand::from(board)) {
            anyhow::bail!("hero {} overlaps board {}", hero, board);
        }
        for (name, chips) in [("pot", scenario.pot), ("bet", scenario.bet)] {
            if !chips.is_finite() || chips < 0. {
                anyhow::bail!("{} must be a non-negative amount, got {}", name, chips);
            }
        }
        Ok(Self {
            hero,
            board,
            opponents: scenario.opponents,
            pot: scenario.pot,
            bet: scenario.bet,
            trials: scenario.trials,
        })
    }
}
