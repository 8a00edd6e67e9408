//! Conserved-quantity checks on a system state
//!
//! None of these feed back into the integration; they exist to watch drift.

use crate::simulation::states::{Body, NVec2};

/// Sum of m * v over all bodies
pub fn total_momentum(bodies: &[Body]) -> NVec2 {
    bodies.iter().map(Body::momentum).sum()
}

/// Mass-weighted mean position, `None` for an empty or massless set
pub fn center_of_mass(bodies: &[Body]) -> Option<NVec2> {
    let mass: f64 = bodies.iter().map(|b| b.m).sum();
    if mass <= 0.0 {
        return None;
    }
    let weighted: NVec2 = bodies.iter().map(|b| b.x * b.m).sum();
    Some(weighted / mass)
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Pairwise gravitational potential, each unordered pair counted once
#[allow(non_snake_case)]
pub fn potential_energy(bodies: &[Body], G: f64) -> f64 {
    let mut u = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let d = (bj.x - bi.x).norm();
            u -= G * bi.m * bj.m / d;
        }
    }
    u
}

#[allow(non_snake_case)]
pub fn total_energy(bodies: &[Body], G: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, G)
}
