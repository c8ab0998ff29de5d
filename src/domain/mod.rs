// Domain layer: kinematic model types and rules.

pub mod errors;
pub mod model;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use errors::ModelError;
pub use model::VehicleModel;
pub use ports::ControlSource;
pub use state::{ControlInput, StateDerivative, VehicleState};
pub use tuning::vehicle::VehicleParameters;
