//! Fixed-step explicit Euler integrator for the N-body system.
//!
//! One force evaluation per step. All accelerations are computed from
//! start-of-step positions into a transient buffer before any body is
//! mutated, so the update is synchronous and simultaneous: the result does
//! not depend on the order bodies are processed in.

use super::forces::NewtonianGravity;
use super::params::Parameters;
use super::states::{NVec3, System};

/// Advance the system by one step of size `params.dt`.
///
/// Update rule per body, with `a` read from the start-of-step state:
/// `v_n+1 = v_n + a_n * dt`, then `x_n+1 = x_n + v_n+1 * dt`
/// (semi-implicit Euler: the new velocity drives the position update).
/// Afterwards the new position is appended to the body's trail, subject to
/// the configured bound and sample stride.
pub fn euler_integrator(sys: &mut System, gravity: &NewtonianGravity, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.dt;

    // a_n from x_n: one acceleration slot per body, filled in a read-only
    // pass over the current state. This buffer is the only transient
    // allocation a step makes.
    let mut accels = vec![NVec3::zeros(); n];
    gravity.accumulate_accels(&*sys, &mut accels);

    // Kick: v_n+1 = v_n + a_n * dt
    // Drift: x_n+1 = x_n + v_n+1 * dt
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.v += *a * dt;
        b.x += b.v * dt;
    }

    // Trail upkeep. A stride of k samples every k-th step; trail_length of
    // zero disables trails entirely (no append-then-evict churn).
    let sample = params.trail_length > 0 && sys.steps % params.trail_sample_stride == 0;
    if sample {
        for b in sys.bodies.iter_mut() {
            b.trail.push_back(b.x);
            while b.trail.len() > params.trail_length {
                b.trail.pop_front();
            }
        }
    }

    sys.t += dt;
    sys.steps += 1;
}
