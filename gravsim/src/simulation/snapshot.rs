//! Per-step state records handed to output sinks

use crate::simulation::states::{Body, NVec2};

/// State of one body at one discrete step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub step: usize,  // 0 is the initial condition
    pub time: f64,    // step * h0 (s)
    pub object: usize, // 1-based body index
    pub mass: f64,
    pub x: NVec2,
    pub v: NVec2,
    pub a: NVec2,
}

impl Snapshot {
    pub fn of(step: usize, time: f64, slot: usize, body: &Body) -> Self {
        Self {
            step,
            time,
            object: slot + 1,
            mass: body.m,
            x: body.x,
            v: body.v,
            a: body.a,
        }
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    pub fn acceleration_magnitude(&self) -> f64 {
        self.a.norm()
    }
}
