//! Core state types for the N-body simulation.
//!
//! Defines the point-mass `Body` (position, velocity, mass, bounded trail)
//! and the `System` that owns the body set, the current simulation time `t`,
//! and the completed-step counter used for trail sampling.

use std::collections::VecDeque;

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// A point mass. Mass is strictly positive for the lifetime of a run;
/// enforced at construction time, never re-checked in the hot loop.
#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64,   // mass
    /// Previously visited positions, oldest first, bounded to at most
    /// `Parameters::trail_length` entries (FIFO eviction).
    pub trail: VecDeque<NVec3>,
}

impl Body {
    /// Body with an empty trail. Trails only fill as the system steps.
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Self {
        Self {
            x,
            v,
            m,
            trail: VecDeque::new(),
        }
    }
}

/// The mutable body set plus simulated time.
///
/// The body count is fixed for the lifetime of one run; reconfiguring
/// means rebuilding the whole system through a fresh `Scenario`.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64,            // simulated time
    pub steps: u64,        // completed integration steps
}

impl System {
    /// System at t = 0 with no steps taken.
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            steps: 0,
        }
    }
}
