//! Monte Carlo equity, outs classification and the metrics built on them.
pub mod classifier;
pub use classifier::*;

pub mod engine;
pub use engine::*;

pub mod metrics;

pub mod outs;
pub use outs::*;

pub mod result;
pub use result::*;

pub mod sampler;
pub use sampler::*;

pub mod scenario;
pub use scenario::*;

pub mod tally;
pub use tally::*;

pub mod tuning;
pub use tuning::*;
