//! Newtonian gravity for the n-body core.
//!
//! One force law, evaluated by direct O(n²) pairwise summation (no tree,
//! no spatial partitioning). Accelerations are accumulated into a
//! caller-provided buffer so the integrator can read all positions before
//! writing any.

use crate::simulation::states::{NVec3, System};

/// Direct-sum Newtonian gravity.
///
/// Force between a pair at separation r is `G * m_i * m_j / |r|²` directed
/// along the separation vector, i.e. the acceleration contribution on body
/// i is `G * m_j * r / |r|³`.
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Accumulate accelerations for all bodies in `sys` into `out`.
    ///
    /// `out` is zeroed first and must have one slot per body. Pairs are
    /// visited in ascending index order (i < j) so summation order is
    /// deterministic across runs.
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }

        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j.
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j: i is pulled along +r,
                // j is pulled along -r.
                let r = bj.x - xi;
                let r2 = r.dot(&r);

                // Zero-separation policy: an exactly coincident pair has an
                // undefined force direction. The pair is skipped outright so
                // no NaN/Infinity can ever enter velocity or position state.
                if r2 == 0.0 {
                    continue;
                }

                // 1 / |r|^3, the distance factor of a = G * m * r / |r|^3
                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.g * inv_r3;

                // Newton's third law: equal and opposite.
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
