//! Wall-clock micro-benchmarks for the O(n²) force loop and full steps.
//!
//! The pairwise sum is the only performance-sensitive code in the crate;
//! these report how it scales with body count. Positions are deterministic
//! (trig-based), so no RNG is needed and runs are comparable.

use std::time::Instant;

use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Build an n-body system with deterministic scattered positions.
fn bench_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );
        bodies.push(Body::new(x, NVec3::zeros(), 1.0));
    }
    System::new(bodies)
}

fn bench_params(n: usize) -> Parameters {
    Parameters {
        num_bodies: n,
        g: 1.0,
        dt: 0.001,
        trail_length: 0, // time the physics, not the trail churn
        ..Parameters::default()
    }
}

/// Time a single force accumulation for increasing n.
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = bench_system(n);
        let gravity = NewtonianGravity { g: 1.0 };
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.accumulate_accels(&sys, &mut out);

        let t0 = Instant::now();
        gravity.accumulate_accels(&sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity = {dt:8.6} s");
    }
}

/// Time a fixed number of full integration steps for increasing n.
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 100;

    for n in ns {
        let mut sys = bench_system(n);
        let params = bench_params(n);
        let gravity = NewtonianGravity { g: params.g };

        // Warm up
        euler_integrator(&mut sys, &gravity, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys, &gravity, &params);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {steps} steps = {dt:8.6} s ({:8.6} s/step)",
            dt / steps as f64
        );
    }
}
