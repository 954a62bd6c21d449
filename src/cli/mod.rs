//! Command line front end for one-off equity queries.
pub mod args;
pub use args::*;

pub mod report;
pub use report::*;
