//! Simulation driver and program loading.
//!
//! Provides the cycle-stepping [`Simulator`], the loader that places
//! pre-encoded words into instruction memory, and the built-in programs.

pub mod loader;
pub mod programs;
pub mod simulator;

pub use simulator::{RunOutcome, STAGE_ORDER, Simulator, StepAction};
