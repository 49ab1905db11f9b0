//! Simulator error definitions.
//!
//! The pipeline itself never fails: every stage is total over its latch input and
//! unknown encodings degrade to no-op results. Errors only arise at the edges,
//! while reading and validating configuration.

use thiserror::Error;

/// Errors produced while setting up a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A register index outside `$0..$15` was requested.
    #[error("register ${index} does not exist (the register file has {limit} registers)")]
    InvalidRegister {
        /// Offending register index.
        index: usize,
        /// Number of registers available.
        limit: usize,
    },

    /// A run was requested with no cycles to spend.
    #[error("cycle budget must be at least 1")]
    ZeroCycleBudget,
}
