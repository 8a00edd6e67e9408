//! Fixed-step time integrator for the N-body system
//!
//! Positions advance with the velocity of the previous step, velocities with
//! the freshly computed acceleration. Because the drift uses the old
//! velocity this is first-order and not symplectic: orbital energy grows by
//! roughly `(omega dt)^2` per step.

use super::forces::{accumulate_forces, Coincident, Force};
use super::states::{NVec2, System};

/// Advance the system by one step of size `dt`
///
/// All forces are evaluated first against the untouched state of the
/// previous step and staged in `forces`; only then is any body mutated.
/// `forces` is resized to the body count, so callers can reuse one buffer
/// across steps. `sys.t` is advanced by `dt`.
pub fn semi_implicit_euler(sys: &mut System, force: &dyn Force, dt: f64, forces: &mut Vec<NVec2>) -> Result<(), Coincident> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    forces.resize(n, NVec2::zeros());

    // Read phase: S(t) frozen behind a shared borrow
    accumulate_forces(force, &sys.bodies, forces)?;

    // Write phase: S(t+1)
    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        // a_n+1 = F / m
        b.a = *f / b.m;

        // x_n+1 = x_n + dt v_n
        b.x += b.v * dt;

        // v_n+1 = v_n + dt a_n+1
        b.v += b.a * dt;
    }

    sys.t += dt;
    Ok(())
}
