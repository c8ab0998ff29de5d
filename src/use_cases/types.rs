// Use-case level inputs/outputs for the simulation loop.

use crate::domain::{ControlInput, ModelError, VehicleState};

#[derive(Debug, Clone, Copy)]
pub struct SimulationSettings {
    pub dt: f64, // s
    pub max_ticks: u64,
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ModelError::InvalidTimeStep(self.dt));
        }
        Ok(())
    }
}

/// One tick of telemetry: the state after the step and the saturated
/// control that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationUpdate {
    pub tick: u64,
    pub elapsed: f64,
    pub state: VehicleState,
    pub control: ControlInput,
}
