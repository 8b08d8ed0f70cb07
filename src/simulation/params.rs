//! Numerical and physical parameters for the simulation.
//!
//! `Parameters` holds runtime settings:
//! - body count, gravitational constant and fixed step size,
//! - trail bound and sample stride,
//! - random-initialization bounds and the deterministic seed.
//!
//! A parameter set is immutable for the duration of a run and replaced
//! wholesale on reset; `validate` is the single place the domain is checked.

use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub num_bodies: usize,         // body count (fixed per run)
    pub g: f64,                    // gravitational constant
    pub dt: f64,                   // step size
    pub trail_length: usize,       // max trail entries per body; 0 disables trails
    pub trail_sample_stride: u64,  // append every k-th step; 1 = every step
    pub max_initial_velocity: f64, // random-init bound only
    pub max_mass: f64,             // random-init bound only
    pub seed: u64,                 // deterministic seed for random initialization
}

impl Parameters {
    /// Check the parameter domain. Called by `Scenario::initialize` before
    /// anything is constructed, so a rejected set mutates no state.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_bodies < 1 {
            return Err(SimError::Configuration(format!(
                "num_bodies must be at least 1, got {}",
                self.num_bodies
            )));
        }
        if self.g <= 0.0 {
            return Err(SimError::Configuration(format!(
                "gravitational constant must be positive, got {}",
                self.g
            )));
        }
        if self.dt <= 0.0 {
            return Err(SimError::Configuration(format!(
                "time step must be positive, got {}",
                self.dt
            )));
        }
        if self.trail_sample_stride == 0 {
            return Err(SimError::Configuration(
                "trail_sample_stride must be at least 1".into(),
            ));
        }
        if self.max_initial_velocity < 0.0 {
            return Err(SimError::Configuration(format!(
                "max_initial_velocity must be non-negative, got {}",
                self.max_initial_velocity
            )));
        }
        if self.max_mass <= 0.0 {
            return Err(SimError::Configuration(format!(
                "max_mass must be positive, got {}",
                self.max_mass
            )));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            num_bodies: 3,
            g: 1.0,
            dt: 0.01,
            trail_length: 500,
            trail_sample_stride: 1,
            max_initial_velocity: 1.0,
            max_mass: 2.0,
            seed: 42,
        }
    }
}
