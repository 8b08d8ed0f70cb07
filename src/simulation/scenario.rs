//! Build fully-initialized simulation scenarios.
//!
//! A `Scenario` is the runtime bundle the driver steps: validated
//! parameters, the system state at t = 0, and the gravity law. It is
//! constructed one of three ways:
//! - from an explicit body list (e.g. the fixed three-body orbit),
//! - from seeded random generation within the configured bounds,
//! - from a YAML-facing `ScenarioConfig` (which picks one of the above).
//!
//! Construction is the only validation point; a rejected configuration
//! builds nothing and leaves any previously-running scenario untouched.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::error::SimError;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// A fully-initialized simulation run: parameters, current system state,
/// and the active force law.
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    /// Validate `parameters` and build a scenario at t = 0.
    ///
    /// With `seed_bodies`, the list is used verbatim (trails start empty and
    /// `num_bodies` is taken from its length); every seeded mass must be
    /// strictly positive. Without it, `parameters.num_bodies` bodies are
    /// generated from the seeded RNG, so equal seeds give equal systems.
    pub fn initialize(
        parameters: Parameters,
        seed_bodies: Option<Vec<Body>>,
    ) -> Result<Self, SimError> {
        parameters.validate()?;

        let (parameters, bodies) = match seed_bodies {
            Some(seeds) => {
                for (i, b) in seeds.iter().enumerate() {
                    if b.m <= 0.0 {
                        return Err(SimError::Configuration(format!(
                            "body {} has non-positive mass {}",
                            i, b.m
                        )));
                    }
                }
                // Explicit list wins over num_bodies; trails always start empty.
                let bodies: Vec<Body> =
                    seeds.into_iter().map(|b| Body::new(b.x, b.v, b.m)).collect();
                let parameters = Parameters {
                    num_bodies: bodies.len(),
                    ..parameters
                };
                (parameters, bodies)
            }
            None => {
                let bodies = random_bodies(&parameters);
                (parameters, bodies)
            }
        };

        let gravity = NewtonianGravity { g: parameters.g };

        Ok(Self {
            parameters,
            system: System::new(bodies),
            gravity,
        })
    }

    /// Build a scenario from its YAML-facing configuration.
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let parameters = cfg.parameters.into_parameters();
        let seeds = cfg.bodies.map(|bodies| {
            bodies
                .into_iter()
                .map(|bc| {
                    Body::new(
                        NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                        NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
                        bc.m,
                    )
                })
                .collect()
        });
        Self::initialize(parameters, seeds)
    }

    /// Advance the system by one fixed time step.
    pub fn step(&mut self) {
        euler_integrator(&mut self.system, &self.gravity, &self.parameters);
    }
}

/// The fixed three-body configuration: three unit masses on a symmetric
/// orbit about the origin.
pub fn three_body_seed() -> Vec<Body> {
    vec![
        Body::new(NVec3::new(0.0, 0.0, 5.0), NVec3::new(0.5, 0.0, 0.0), 1.0),
        Body::new(
            NVec3::new(-5.0, 0.0, -2.5),
            NVec3::new(-0.25, 0.0, -0.433),
            1.0,
        ),
        Body::new(
            NVec3::new(5.0, 0.0, -2.5),
            NVec3::new(-0.25, 0.0, 0.433),
            1.0,
        ),
    ]
}

/// Generate `parameters.num_bodies` bodies deterministically from
/// `parameters.seed`.
///
/// Body i sits at angle `i * TAU / n` around the vertical axis on a circle
/// of radius `5 + U(0, 10)`, with a small vertical offset `U(-5, 5)`.
/// Velocity components are drawn per axis in
/// `[-max_initial_velocity/2, +max_initial_velocity/2]`, and mass as
/// `r * U(0.5, 2.0)` capped at `max_mass`, with a visual-scale radius `r`
/// in `[0.2, 1.7]`; every mass comes out strictly positive.
fn random_bodies(parameters: &Parameters) -> Vec<Body> {
    let mut rng = StdRng::seed_from_u64(parameters.seed);
    let n = parameters.num_bodies;
    let half_v = parameters.max_initial_velocity / 2.0;

    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let angle = i as f64 * std::f64::consts::TAU / n as f64;
        let orbit_radius = 5.0 + rng.gen_range(0.0..10.0);

        let x = NVec3::new(
            orbit_radius * angle.cos(),
            rng.gen_range(-5.0..5.0),
            orbit_radius * angle.sin(),
        );
        let v = NVec3::new(
            rng.gen_range(-half_v..=half_v),
            rng.gen_range(-half_v..=half_v),
            rng.gen_range(-half_v..=half_v),
        );

        let radius: f64 = rng.gen_range(0.2..1.7);
        let m = (radius * rng.gen_range(0.5..2.0)).min(parameters.max_mass);

        bodies.push(Body::new(x, v, m));
    }
    bodies
}
