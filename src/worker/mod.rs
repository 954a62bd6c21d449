//! The request/response boundary between callers and the engine.
pub mod request;
pub use request::*;

#[cfg(feature = "server")]
pub mod worker;
#[cfg(feature = "server")]
pub use worker::*;
