//! Hold'em equity, outs and draw odds by Monte Carlo simulation.
//!
//! Cards and hand evaluation live in [`cards`] and [`evaluation`]; the
//! simulation and everything derived from it lives in [`equity`]. With the
//! `server` feature the engine is also reachable from a background [`worker`],
//! an HTTP [`server`], and the `equity` command line tool.
#![allow(dead_code)]

pub mod cards;
pub mod equity;
pub mod evaluation;
pub mod worker;

#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "client")]
pub mod wasm;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot and bet sizes, in whatever unit the caller uses.
pub type Chips = f64;
/// Equities, loss rates and draw odds on a 0 to 1 scale.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SIMULATION BUDGET
// ============================================================================
/// Trials per call when the caller doesn't say otherwise.
pub const DEFAULT_TRIALS: usize = 2500;
/// Fewest trials a single candidate out is re-simulated with.
pub const OUTS_TRIAL_FLOOR: usize = 140;
/// Share of the caller's trials each candidate out is re-simulated with.
pub const OUTS_TRIAL_FRACTION: f64 = 0.1;
/// Most trials an untrusted request may ask for, baseline or per candidate.
pub const MAX_TRIALS: usize = 50_000;

// ============================================================================
// OUTS CLASSIFICATION
// Heuristic thresholds separating real outs from sampling noise.
// ============================================================================
/// Equity gain over baseline a card must exceed to be a real out.
pub const EQUITY_TOLERANCE: Probability = 0.02;
/// Loss-rate rise over baseline a card must exceed to be a reverse out.
pub const LOSS_TOLERANCE: Probability = 0.03;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Default address for the HTTP server.
pub const SERVER_BIND: &str = "127.0.0.1:8080";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
