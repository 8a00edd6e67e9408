//! Force evaluation for the n-body engine
//!
//! Defines the [`Force`] trait the integrator drives, the direct O(n^2)
//! Newtonian gravity that implements it, and [`accumulate_forces`], which
//! fills one force per body from a frozen view of the system.

use crate::simulation::params::SingularityPolicy;
use crate::simulation::states::{Body, NVec2};

/// Two distinct slots found at the same coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coincident {
    pub body: usize,
    pub other: usize,
}

/// Net force source for a single body
///
/// Implementations only read `bodies`; the integrator guarantees the slice
/// is not mutated while forces for a step are being evaluated.
pub trait Force: Send + Sync {
    /// Net force (N) on `bodies[target]` from every other slot
    fn force_on(&self, target: usize, bodies: &[Body]) -> Result<NVec2, Coincident>;
}

/// Newtonian gravity, direct pairwise sum without softening
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub singularity: SingularityPolicy,
}

impl Force for NewtonianGravity {
    fn force_on(&self, target: usize, bodies: &[Body]) -> Result<NVec2, Coincident> {
        let bi = &bodies[target];
        let mut total = NVec2::zeros();

        for (j, bj) in bodies.iter().enumerate() {
            // identity is the slot, never the position
            if j == target {
                continue;
            }

            // r points from the target toward body j
            let r = bj.x - bi.x;
            let distance = r.norm();

            if distance == 0.0 && self.singularity == SingularityPolicy::Reject {
                return Err(Coincident { body: target, other: j });
            }

            // F = G m1 m2 / d^2 along r / d
            let force = (self.G * bi.m * bj.m) / (distance * distance);
            total += r * force / distance;
        }

        Ok(total)
    }
}

/// Evaluate the net force on every body into `out`
///
/// `bodies` is borrowed immutably for the whole call, so every entry of
/// `out` is computed from the same instant.
#[cfg(not(feature = "parallel"))]
pub fn accumulate_forces<F: Force + ?Sized>(force: &F, bodies: &[Body], out: &mut [NVec2]) -> Result<(), Coincident> {
    debug_assert_eq!(bodies.len(), out.len());

    for (i, slot) in out.iter_mut().enumerate() {
        *slot = force.force_on(i, bodies)?;
    }
    Ok(())
}

/// Evaluate the net force on every body into `out`
///
/// Bodies are spread over the rayon pool; each task reads the shared
/// `bodies` slice and writes only its own slot of `out`.
#[cfg(feature = "parallel")]
pub fn accumulate_forces<F: Force + ?Sized>(force: &F, bodies: &[Body], out: &mut [NVec2]) -> Result<(), Coincident> {
    use rayon::prelude::*;

    debug_assert_eq!(bodies.len(), out.len());

    out.par_iter_mut().enumerate().try_for_each(|(i, slot)| {
        *slot = force.force_on(i, bodies)?;
        Ok(())
    })
}
