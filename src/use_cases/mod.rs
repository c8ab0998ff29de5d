// Use cases layer: driving the model over time.

pub mod control;
pub mod simulation;
pub mod types;

pub use control::{ConstantControl, ControlScript, ScriptSegment};
pub use simulation::Simulation;
pub use types::{SimulationSettings, SimulationUpdate};
