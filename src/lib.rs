pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{
    ControlInput, ModelError, StateDerivative, VehicleModel, VehicleParameters, VehicleState,
};
pub use frameworks::runner::run_with_config;
