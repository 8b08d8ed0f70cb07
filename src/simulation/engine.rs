//! Driver-facing simulation handle.
//!
//! `Engine` owns the currently-running scenario, if any. The render-loop
//! driver (or the headless CLI runner) holds exactly one engine, calls
//! `initialize` on reset/reconfigure and `step` once per tick, and reads
//! body positions and trails back out between steps. There is no module
//! state anywhere: the engine is plain data owned by its caller.

use crate::configuration::config::ScenarioConfig;
use crate::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Body;

/// Holds the active scenario. The only mode the engine has is
/// "initialized" vs "not yet initialized".
#[derive(Debug, Default)]
pub struct Engine {
    scenario: Option<Scenario>,
}

impl Engine {
    /// Engine with no scenario; `step` fails until `initialize` succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and install a fresh scenario, replacing any running one.
    ///
    /// The previous scenario is kept untouched if validation fails, so a
    /// rejected reconfiguration never corrupts a running simulation.
    pub fn initialize(
        &mut self,
        parameters: Parameters,
        seed_bodies: Option<Vec<Body>>,
    ) -> Result<(), SimError> {
        let scenario = Scenario::initialize(parameters, seed_bodies)?;
        self.scenario = Some(scenario);
        Ok(())
    }

    /// Build and install a scenario from its YAML-facing configuration.
    pub fn initialize_from_config(&mut self, cfg: ScenarioConfig) -> Result<(), SimError> {
        let scenario = Scenario::from_config(cfg)?;
        self.scenario = Some(scenario);
        Ok(())
    }

    /// Advance the active scenario by one step.
    pub fn step(&mut self) -> Result<(), SimError> {
        match self.scenario.as_mut() {
            Some(scenario) => {
                scenario.step();
                Ok(())
            }
            None => Err(SimError::InvalidState("step called before initialize")),
        }
    }

    /// Read-only access to the body set, for mesh placement and trail
    /// geometry on the presentation side.
    pub fn bodies(&self) -> Result<&[Body], SimError> {
        match self.scenario.as_ref() {
            Some(scenario) => Ok(&scenario.system.bodies),
            None => Err(SimError::InvalidState("no scenario initialized")),
        }
    }

    /// The active scenario, if one has been initialized.
    pub fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }
}
