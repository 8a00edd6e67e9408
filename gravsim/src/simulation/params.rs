//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - gravitational constant `G`,
//! - what to do when two bodies coincide

use crate::error::{Result, SimError};

/// Gravitational constant in m^3 kg^-1 s^-2
pub const G_SI: f64 = 6.67430e-11;

/// Longest run `validate` accepts, in steps
pub const MAX_STEPS: usize = 1_000_000_000;

/// Behaviour when two distinct bodies sit at the same coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingularityPolicy {
    /// Fail the step with [`SimError::Singularity`]
    #[default]
    Reject,
    /// Let the infinite/NaN force flow into the state unchanged
    Propagate,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // simulated duration (s)
    pub h0: f64,    // fixed step size (s)
    pub G: f64,     // gravitational constant
    pub singularity: SingularityPolicy,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 5.0,
            h0: 0.01,
            G: G_SI,
            singularity: SingularityPolicy::default(),
        }
    }
}

impl Parameters {
    /// Number of fixed steps covering `t_end`, i.e. `ceil(t_end / h0)`.
    ///
    /// A quotient within a few ULPs of an integer counts as that integer,
    /// so `5.0 / 0.01` yields 500 and not 501. Anything further away is
    /// rounded up. Only meaningful after [`Parameters::validate`].
    pub fn step_count(&self) -> usize {
        let raw = self.t_end / self.h0;
        let nearest = raw.round();
        if (raw - nearest).abs() <= 4.0 * f64::EPSILON * nearest.max(1.0) {
            nearest as usize
        } else {
            raw.ceil() as usize
        }
    }

    /// Reject step sizes and constants the integrator cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.h0.is_finite() || self.h0 <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "time_step must be positive and finite, got {}",
                self.h0
            )));
        }
        if !self.t_end.is_finite() || self.t_end < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "simulation_time must be non-negative and finite, got {}",
                self.t_end
            )));
        }
        if !self.G.is_finite() {
            return Err(SimError::InvalidConfig(format!("G must be finite, got {}", self.G)));
        }
        let steps = (self.t_end / self.h0).ceil();
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(SimError::InvalidConfig(format!(
                "simulation_time / time_step = {steps} steps, at most {MAX_STEPS} allowed"
            )));
        }
        Ok(())
    }
}
