//! The stepper that owns a system for the length of one run
//!
//! `Engine` validates the initial state, emits the step-0 snapshot, then
//! advances the system a fixed number of times, pushing one snapshot per
//! body per step into a [`SnapshotSink`]. `run` consumes the engine, so the
//! final state handed back in [`RunSummary`] can no longer be stepped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::error::{Result, SimError};
use crate::output::sink::SnapshotSink;
use crate::simulation::forces::{Force, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::snapshot::Snapshot;
use crate::simulation::states::{NVec2, System};

/// Outcome of a run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub system: System,                  // state after the last completed step
    pub steps: usize,                    // steps completed, step 0 not counted
    pub cancelled: bool,                 // stopped early by the caller
    pub elapsed: Duration,               // wall clock, diagnostic only
    pub first_non_finite: Option<usize>, // first step leaving a position inf/NaN
}

pub struct Engine<F: Force = NewtonianGravity> {
    system: System,
    parameters: Parameters,
    force: F,
    scratch: Vec<NVec2>, // per-step force staging buffer
    first_non_finite: Option<usize>,
}

impl Engine<NewtonianGravity> {
    /// Engine driven by direct Newtonian gravity using `parameters.G`
    pub fn new(system: System, parameters: Parameters) -> Result<Self> {
        let force = NewtonianGravity {
            G: parameters.G,
            singularity: parameters.singularity,
        };
        Self::with_force(system, parameters, force)
    }
}

impl<F: Force> Engine<F> {
    /// Engine with a caller-supplied force law
    pub fn with_force(system: System, parameters: Parameters, force: F) -> Result<Self> {
        parameters.validate()?;
        validate_system(&system)?;

        let scratch = vec![NVec2::zeros(); system.len()];
        Ok(Self {
            system,
            parameters,
            force,
            scratch,
            first_non_finite: None,
        })
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Steps a full run performs, step 0 excluded
    pub fn step_count(&self) -> usize {
        self.parameters.step_count()
    }

    /// Run every step, feeding `sink`
    pub fn run<S: SnapshotSink + ?Sized>(self, sink: &mut S) -> Result<RunSummary> {
        let never = AtomicBool::new(false);
        self.run_cancellable(sink, &never)
    }

    /// Run every step unless `cancel` is raised; it is checked before each step
    pub fn run_cancellable<S: SnapshotSink + ?Sized>(mut self, sink: &mut S, cancel: &AtomicBool) -> Result<RunSummary> {
        let start = Instant::now();
        let total = self.step_count();
        info!(
            "running {} bodies for {} steps (dt = {} s)",
            self.system.len(),
            total,
            self.parameters.h0
        );

        self.emit(0, sink)?;

        let mut steps = 0;
        let mut cancelled = false;
        for step in 1..=total {
            if cancel.load(Ordering::Relaxed) {
                info!("run cancelled before step {step}");
                cancelled = true;
                break;
            }
            self.advance(step)?;
            self.emit(step, sink)?;
            steps = step;
        }

        sink.finish()?;

        let elapsed = start.elapsed();
        info!("completed {steps} steps in {:.3} s", elapsed.as_secs_f64());

        Ok(RunSummary {
            system: self.system,
            steps,
            cancelled,
            elapsed,
            first_non_finite: self.first_non_finite,
        })
    }

    fn advance(&mut self, step: usize) -> Result<()> {
        let dt = self.parameters.h0;
        semi_implicit_euler(&mut self.system, &self.force, dt, &mut self.scratch)
            .map_err(|c| SimError::Singularity {
                step,
                body: c.body,
                other: c.other,
            })?;

        // pin time to the grid instead of the running sum
        self.system.t = step as f64 * dt;

        if step % 100 == 0 {
            debug!("step {step}, t = {:.3}", self.system.t);
        }
        // warn once per run
        if self.first_non_finite.is_none() && self.system.bodies.iter().any(|b| !b.x.iter().all(|c| c.is_finite())) {
            warn!("non-finite position after step {step}, later steps will not be reported");
            self.first_non_finite = Some(step);
        }
        Ok(())
    }

    fn emit<S: SnapshotSink + ?Sized>(&self, step: usize, sink: &mut S) -> Result<()> {
        let time = step as f64 * self.parameters.h0;
        sink.begin_step(step, time)?;
        for (i, body) in self.system.bodies.iter().enumerate() {
            sink.record(&Snapshot::of(step, time, i, body))?;
        }
        sink.end_step(step, time)
    }
}

fn validate_system(system: &System) -> Result<()> {
    if system.is_empty() {
        return Err(SimError::InvalidConfig("at least one body is required".into()));
    }
    for (i, b) in system.bodies.iter().enumerate() {
        if !b.m.is_finite() || b.m <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "body {} has mass {}, mass must be positive and finite",
                i + 1,
                b.m
            )));
        }
        let finite = b.x.iter().chain(b.v.iter()).all(|c| c.is_finite());
        if !finite {
            return Err(SimError::InvalidConfig(format!(
                "body {} has a non-finite position or velocity",
                i + 1
            )));
        }
    }
    Ok(())
}
