//! Error types for the n-body core.
//!
//! Exactly two failure kinds exist: out-of-domain configuration at
//! initialization time, and stepping an engine that was never initialized.
//! Steady-state stepping never fails; the zero-separation case is a defined
//! numerical policy handled in the force loop, not an error.

use std::fmt;

/// Errors raised by scenario construction and engine sequencing.
#[derive(Debug)]
pub enum SimError {
    /// Parameters (or an explicit seed body) outside the valid domain.
    /// Surfaced by `initialize`; the caller must supply corrected values.
    Configuration(String),
    /// `step` was called before any successful `initialize`.
    /// A caller-sequencing bug, not recoverable by retry.
    InvalidState(&'static str),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Configuration(msg) => write!(f, "invalid configuration: {}", msg),
            SimError::InvalidState(msg) => write!(f, "invalid state: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}
