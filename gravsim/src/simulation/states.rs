//! Core state types for the N-body simulation.
//!
//! `Body` holds one point mass in the plane, `System` the ordered collection
//! plus the current simulation time `t`. Slot order is body identity: index
//! `i` refers to the same physical object for the whole run.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub a: NVec2, // acceleration of the last step (m/s^2)
    pub m: f64,   // mass (kg)
}

impl Body {
    /// Body at rest acceleration-wise, as every body starts a run
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
            m,
        }
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64,            // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
