//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - output settings (`OutputConfig`), left for the caller to turn into sinks

use crate::configuration::config::{BodyConfig, OutputConfig, ScenarioConfig, SingularityConfig};
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, SingularityPolicy};
use crate::simulation::states::{Body, NVec2, System};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub output: OutputConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body::new(NVec2::new(bc.x[0], bc.x[1]), NVec2::new(bc.v[0], bc.v[1]), bc.m))
            .collect();

        // Initial system state: bodies at t = 0
        let system = System::new(bodies);

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.simulation_time,
            h0: p_cfg.time_step,
            G: p_cfg.G,
            singularity: match p_cfg.singularity {
                SingularityConfig::Reject => SingularityPolicy::Reject,
                SingularityConfig::Propagate => SingularityPolicy::Propagate,
            },
        };

        Self {
            parameters,
            system,
            output: cfg.output,
        }
    }

    /// Validate and hand the state over to a gravity engine
    pub fn into_engine(self) -> Result<Engine> {
        Engine::new(self.system, self.parameters)
    }
}
