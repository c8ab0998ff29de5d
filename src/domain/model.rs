// Kinematic model of a car-like robot referenced at the rear axle.
//
// State: x, y, yaw, v. Inputs: acceleration a, steering angle delta.

use crate::domain::state::{ControlInput, StateDerivative, VehicleState};
use crate::domain::systems::kinematics;
use crate::domain::tuning::vehicle::VehicleParameters;

#[derive(Debug, Clone, Default)]
pub struct VehicleModel {
    state: VehicleState,
    // Last saturated control actually applied (telemetry only).
    effective: ControlInput,
    params: VehicleParameters,
}

impl VehicleModel {
    pub fn new(state: VehicleState, params: VehicleParameters) -> Self {
        Self::with_control(state, ControlInput::default(), params)
    }

    /// Seeds the last effective control, e.g. when resuming a recorded run.
    pub fn with_control(
        state: VehicleState,
        control: ControlInput,
        params: VehicleParameters,
    ) -> Self {
        Self {
            state,
            effective: control,
            params,
        }
    }

    pub fn params(&self) -> &VehicleParameters {
        &self.params
    }

    pub fn effective_control(&self) -> ControlInput {
        self.effective
    }

    pub fn clamp_controls(&self, a: f64, delta: f64) -> ControlInput {
        kinematics::clamp_controls(&self.params, ControlInput::new(a, delta))
    }

    /// State derivative at the current state for the requested controls.
    /// Does not record the effective control; see [`Self::apply_controls`].
    pub fn compute_derivative(&self, a: f64, delta: f64) -> StateDerivative {
        let effective = self.clamp_controls(a, delta);
        kinematics::derivative(&self.state, effective, self.params.wheelbase)
    }

    /// Same as [`Self::compute_derivative`], but keeps the saturated control
    /// as the model's last effective control.
    pub fn apply_controls(&mut self, a: f64, delta: f64) -> StateDerivative {
        self.effective = self.clamp_controls(a, delta);
        kinematics::derivative(&self.state, self.effective, self.params.wheelbase)
    }

    /// Advance by `dt` seconds with explicit Euler integration.
    ///
    /// `dt` is not validated: a negative value integrates backward and NaN
    /// propagates into the state.
    pub fn step(&mut self, a: f64, delta: f64, dt: f64) {
        let derivative = self.apply_controls(a, delta);
        kinematics::euler_step(&mut self.state, &derivative, dt);
    }

    pub fn state(&self) -> VehicleState {
        self.state
    }

    pub fn set_state(&mut self, state: VehicleState) {
        self.state = state;
    }

    /// State as `[x, y, yaw, v]`.
    pub fn state_vector(&self) -> [f64; 4] {
        self.state.to_array()
    }

    pub fn set_state_vector(&mut self, values: [f64; 4]) {
        self.state = VehicleState::from_array(values);
    }
}
