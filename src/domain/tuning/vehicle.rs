use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::domain::errors::ModelError;

/// Physical limits and geometry of a car-like robot.
///
/// Keep this separate from runtime configuration (time step, tick counts, etc.).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleParameters {
    /// Distance between front and rear axles in meters.
    pub wheelbase: f64,

    /// Largest acceleration magnitude the drivetrain can deliver, m/s^2.
    /// `f64::INFINITY` disables the limit.
    pub a_max: f64,

    /// Largest steering angle magnitude in radians. Must stay below pi/2.
    pub delta_max: f64,
}

impl Default for VehicleParameters {
    fn default() -> Self {
        Self {
            wheelbase: 3.0,
            a_max: 2.0,
            delta_max: FRAC_PI_4,
        }
    }
}

impl VehicleParameters {
    pub fn new(wheelbase: f64, a_max: f64, delta_max: f64) -> Result<Self, ModelError> {
        let params = Self {
            wheelbase,
            a_max,
            delta_max,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.wheelbase.is_finite() || self.wheelbase <= 0.0 {
            return Err(ModelError::InvalidWheelbase(self.wheelbase));
        }
        // NaN fails the comparison as well.
        if !(self.a_max >= 0.0) {
            return Err(ModelError::InvalidAccelLimit(self.a_max));
        }
        // tan(delta) blows up at pi/2.
        if !(0.0..FRAC_PI_2).contains(&self.delta_max) {
            return Err(ModelError::InvalidSteerLimit(self.delta_max));
        }
        Ok(())
    }
}
