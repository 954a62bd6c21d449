//! Interchangeable hand evaluators behind the [`Evaluate`] trait.
pub mod bitwise;
pub use bitwise::*;

pub mod evaluate;
pub use evaluate::*;

pub mod exhaustive;
pub use exhaustive::*;
