//! Card representation and hand evaluation.
//!
//! - [`Card`] — a single card as a `(Rank, Suit)` pair encoded in one byte
//! - [`Hand`] — an unordered set of cards as a 64-bit bitmask
//! - [`Hole`] — a player's two private cards
//! - [`Board`] — the community cards
//! - [`Deck`] — the unseen cards, in canonical order
//! - [`Evaluator`] — bitwise best-hand search
//! - [`Strength`] — evaluated hand with kicker resolution
//! - [`Category`] — the nine coarse hand categories
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod category;
pub use category::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod street;
pub use street::*;

pub mod strength;
pub use strength::*;

pub mod subsets;
pub use subsets::*;

pub mod suit;
pub use suit::*;
