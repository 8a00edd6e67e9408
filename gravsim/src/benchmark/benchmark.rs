use std::time::Instant;

use crate::error::{Result, SimError};
use crate::simulation::forces::{accumulate_forces, Coincident, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::{Parameters, SingularityPolicy};
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a deterministic system of size `n`, no rand needed
fn make_system(n: usize) -> System {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec2::new((i_f * 0.37).sin() * 5.0 + i_f * 1e-3, (i_f * 0.13).cos() * 5.0);
            Body::new(x, NVec2::zeros(), 1.0e3)
        })
        .collect();
    System::new(bodies)
}

fn singular(step: usize) -> impl Fn(Coincident) -> SimError {
    move |c| SimError::Singularity {
        step,
        body: c.body,
        other: c.other,
    }
}

/// Time one force evaluation and one integrator step for growing `n`
/// Paste output directly into a spreadsheet to graph
pub fn bench_direct() -> Result<()> {
    bench_direct_sizes((200..=3200).step_by(200))
}

/// `bench_direct` over caller-chosen system sizes
pub fn bench_direct_sizes<I: IntoIterator<Item = usize>>(sizes: I) -> Result<()> {
    let params = Parameters {
        singularity: SingularityPolicy::Propagate,
        ..Parameters::default()
    };
    let gravity = NewtonianGravity {
        G: params.G,
        singularity: params.singularity,
    };

    println!("N,force_ms,step_ms");

    for n in sizes {
        // Small n: average over a few repetitions to smooth noise
        let reps = if n <= 800 { 5 } else { 1 };
        let mut sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        accumulate_forces(&gravity, &sys.bodies, &mut out).map_err(singular(0))?;

        let t0 = Instant::now();
        for _ in 0..reps {
            accumulate_forces(&gravity, &sys.bodies, &mut out).map_err(singular(0))?;
        }
        let force_ms = t0.elapsed().as_secs_f64() * 1000.0 / reps as f64;

        let t1 = Instant::now();
        for step in 1..=reps {
            semi_implicit_euler(&mut sys, &gravity, params.h0, &mut out).map_err(singular(step))?;
        }
        let step_ms = t1.elapsed().as_secs_f64() * 1000.0 / reps as f64;

        println!("{},{:.6},{:.6}", n, force_ms, step_ms);
    }
    Ok(())
}
