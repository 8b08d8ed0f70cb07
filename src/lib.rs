pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, NVec3, System};
pub use simulation::params::Parameters;
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::euler_integrator;
pub use simulation::scenario::{three_body_seed, Scenario};
pub use simulation::engine::Engine;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use error::SimError;

pub use benchmark::benchmark::{bench_gravity, bench_step};
