//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline run parameters (cycle budget, watched register).
//! 2. **Structures:** Hierarchical config for general and report settings.
//!
//! Configuration is supplied as JSON, either inline or from a file; every
//! field is optional and falls back to its default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::NUM_REGS;
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Cycle budget for a run.
    ///
    /// Enough for the demo program to complete its first loop iteration.
    pub const MAX_CYCLES: u64 = 23;

    /// Register watched by the loop tracker (the demo's loop counter).
    pub const WATCH_REGISTER: usize = 7;
}

/// Root configuration structure.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Loop tracking and report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the document is not valid JSON or has
    /// fields of the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a runnable simulation.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ZeroCycleBudget`] for a zero cycle budget and
    /// [`SimError::InvalidRegister`] if the watched register does not exist.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.general.max_cycles == 0 {
            return Err(SimError::ZeroCycleBudget);
        }
        if self.report.watch_register >= NUM_REGS {
            return Err(SimError::InvalidRegister {
                index: self.report.watch_register,
                limit: NUM_REGS,
            });
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit per-stage trace events.
    #[serde(default)]
    pub trace_instructions: bool,
    /// Maximum number of cycles to run.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: Self::default_max_cycles(),
        }
    }
}

/// Loop tracking and report settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Register whose changes mark loop iterations.
    #[serde(default = "ReportConfig::default_watch_register")]
    pub watch_register: usize,
    /// Stop the run once the watched register returns to zero.
    #[serde(default = "ReportConfig::default_stop_on_loop_exit")]
    pub stop_on_loop_exit: bool,
}

impl ReportConfig {
    const fn default_watch_register() -> usize {
        defaults::WATCH_REGISTER
    }

    const fn default_stop_on_loop_exit() -> bool {
        true
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            watch_register: Self::default_watch_register(),
            stop_on_loop_exit: Self::default_stop_on_loop_exit(),
        }
    }
}
