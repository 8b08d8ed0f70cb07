//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – optional explicit initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//!
//! # YAML format
//! An example scenario YAML matching these types (the fixed three-body
//! orbit):
//!
//! ```yaml
//! parameters:
//!   num_bodies: 3            # body count; ignored when bodies are listed
//!   G: 1.0                   # gravitational constant
//!   dt: 0.01                 # fixed step size
//!   trail_length: 500        # max trail entries per body; 0 disables
//!   trail_sample_stride: 1   # append a trail point every k-th step
//!   max_initial_velocity: 1.0
//!   max_mass: 2.0
//!   seed: 42                 # deterministic seed for random generation
//!
//! bodies:                    # omit this block for seeded random bodies
//!   - x: [  0.0, 0.0,  5.0 ]
//!     v: [  0.5, 0.0,  0.0 ]
//!     m: 1.0
//!   - x: [ -5.0, 0.0, -2.5 ]
//!     v: [ -0.25, 0.0, -0.433 ]
//!     m: 1.0
//!   - x: [  5.0, 0.0, -2.5 ]
//!     v: [ -0.25, 0.0,  0.433 ]
//!     m: 1.0
//! ```
//!
//! The runtime maps this configuration into its internal scenario
//! representation; domain validation happens there, not here. The UI
//! configuration surface feeds the same ranges (num_bodies 3..1000,
//! G 1..20, dt 0.001..0.1, trail_length 0..1_000_000) and every change
//! takes effect only on the next initialize, never retroactively.

use serde::Deserialize;

use crate::simulation::params::Parameters;

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub num_bodies: usize, // body count for random generation
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub dt: f64,           // fixed step size
    pub trail_length: usize, // max trail entries per body
    #[serde(default = "default_stride")]
    pub trail_sample_stride: u64, // trail decimation; defaults to every step
    pub max_initial_velocity: f64, // random-init velocity bound
    pub max_mass: f64,     // random-init mass cap
    pub seed: u64,         // deterministic seed, makes runs reproducible
}

fn default_stride() -> u64 {
    1
}

impl ParametersConfig {
    /// Map into the runtime parameter struct.
    pub fn into_parameters(self) -> Parameters {
        Parameters {
            num_bodies: self.num_bodies,
            g: self.g,
            dt: self.dt,
            trail_length: self.trail_length,
            trail_sample_stride: self.trail_sample_stride,
            max_initial_velocity: self.max_initial_velocity,
            max_mass: self.max_mass,
            seed: self.seed,
        }
    }
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 3], // initial position in simulation units
    pub v: [f64; 3], // initial velocity in simulation units per time unit
    pub m: f64,      // mass of the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Option<Vec<BodyConfig>>, // explicit seeds; None = seeded random
}
