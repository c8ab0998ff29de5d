// Shared builders for integration tests.
#![allow(dead_code)]

use vehicle_sim::{VehicleModel, VehicleParameters, VehicleState};

pub const EPS: f64 = 1e-9;

// Model with default limits (L = 3, a_max = 2, delta_max = pi/4).
pub fn default_model(x: f64, y: f64, yaw: f64, v: f64) -> VehicleModel {
    VehicleModel::new(VehicleState::new(x, y, yaw, v), VehicleParameters::default())
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{what}: expected {expected}, got {actual}"
    );
}
