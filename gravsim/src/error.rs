//! Error types for the simulator
//!
//! One [`SimError`] for every fallible operation in the library plus a
//! [`Result`] alias. The binary wraps these in `anyhow` for reporting.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SimError {
    /// Scenario rejected before the run started
    InvalidConfig(String),
    /// Two distinct bodies at the same coordinates during force evaluation
    Singularity {
        step: usize,
        body: usize,  // 0-based slot of the target body
        other: usize, // 0-based slot of the coincident body
    },
    /// A snapshot destination could not be opened
    SinkOpen {
        path: PathBuf,
        source: io::Error,
    },
    /// A snapshot destination failed while the run was in progress
    SinkWrite(io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Singularity { step, body, other } => write!(
                f,
                "degenerate configuration at step {step}: bodies {} and {} share the same position",
                body + 1,
                other + 1
            ),
            Self::SinkOpen { path, source } => {
                write!(f, "cannot open output {}: {source}", path.display())
            }
            Self::SinkWrite(err) => write!(f, "output write failed: {err}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SinkOpen { source, .. } => Some(source),
            Self::SinkWrite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(err: io::Error) -> Self {
        Self::SinkWrite(err)
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
