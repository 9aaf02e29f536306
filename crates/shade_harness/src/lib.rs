//! Shade Harness
//!
//! Scenario-driven exerciser for the shade header coordinator.
//!
//! # Features
//!
//! - **TOML scenarios** - Declarative step lists with per-run header options
//! - **Generated sweeps** - Expansion fraction up to 1 and back, one frame per step
//! - **Frame capture** - Element alphas, translation, and policy flags after every step

pub mod runner;
pub mod scenario;

pub use runner::{run_scenario, FrameLog, FrameSnapshot, LoggingPanel};
pub use scenario::{HeaderOptions, Scenario, Step};
