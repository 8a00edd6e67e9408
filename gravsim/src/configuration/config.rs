//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, duration, `G`, singularity policy
//! - [`OutputConfig`]     – which sinks to attach
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The reference three-body scenario:
//!
//! ```yaml
//! parameters:
//!   time_step: 0.01          # fixed step size (s)
//!   simulation_time: 5.0     # simulated duration (s)
//!   G: 6.67430e-11           # gravitational constant
//!   singularity: reject      # or "propagate"
//!
//! output:
//!   csv: simulation_data.csv # null disables the table
//!   console: true
//!
//! bodies:
//!   - x: [0.0, -5.0]
//!     v: [3.0, 0.0]
//!     m: 1000.0
//!   - x: [0.0, 0.0]
//!     m: 1.0e12
//!   - x: [0.0, 2.0]
//!     v: [-5.6, 0.0]
//!     m: 1000.0
//! ```
//!
//! Every field except `bodies[*].x` and `bodies[*].m` may be omitted.

use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::simulation::params::G_SI;

/// What happens when two bodies coincide
/// `singularity: reject` or `singularity: propagate`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingularityConfig {
    #[serde(rename = "reject")] // fail the step with an error naming both bodies
    #[default]
    Reject,

    #[serde(rename = "propagate")] // let inf/NaN through unguarded
    Propagate,
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    #[serde(default = "default_time_step")]
    pub time_step: f64, // seconds per step
    #[serde(default = "default_simulation_time")]
    pub simulation_time: f64, // seconds to simulate
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub singularity: SingularityConfig,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            time_step: default_time_step(),
            simulation_time: default_simulation_time(),
            G: default_g(),
            singularity: SingularityConfig::default(),
        }
    }
}

fn default_time_step() -> f64 {
    0.01
}

fn default_simulation_time() -> f64 {
    5.0
}

fn default_g() -> f64 {
    G_SI
}

/// Output sinks attached to a run
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_csv")]
    pub csv: Option<PathBuf>, // CSV destination, `None` to skip
    #[serde(default = "default_console")]
    pub console: bool, // per-step positions on stdout
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            console: default_console(),
        }
    }
}

fn default_csv() -> Option<PathBuf> {
    Some(PathBuf::from("simulation_data.csv"))
}

fn default_console() -> bool {
    true
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position (m)
    #[serde(default)]
    pub v: [f64; 2], // initial velocity (m/s)
    pub m: f64, // mass (kg)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub output: OutputConfig, // Where snapshots go
    pub bodies: Vec<BodyConfig>, // Initial state of the system, in slot order
}

impl ScenarioConfig {
    /// Parse a scenario from any YAML reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_yaml::from_reader(reader).map_err(|e| SimError::InvalidConfig(e.to_string()))
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| SimError::InvalidConfig(e.to_string()))
    }

    /// The three-body system used throughout: a 1e12 kg anchor at the
    /// origin with two 1000 kg bodies passing above and below it
    pub fn reference() -> Self {
        Self {
            parameters: ParametersConfig::default(),
            output: OutputConfig::default(),
            bodies: vec![
                BodyConfig { x: [0.0, -5.0], v: [3.0, 0.0], m: 1000.0 },
                BodyConfig { x: [0.0, 0.0], v: [0.0, 0.0], m: 1e12 },
                BodyConfig { x: [0.0, 2.0], v: [-5.6, 0.0], m: 1000.0 },
            ],
        }
    }
}
