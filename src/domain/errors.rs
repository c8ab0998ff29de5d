use std::fmt;

// Domain-level errors for building models and simulations.
// Stepping a model never fails; these only guard construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InvalidWheelbase(f64),
    InvalidAccelLimit(f64),
    InvalidSteerLimit(f64),
    InvalidTimeStep(f64),
    InvalidScript { segment: usize, duration: f64 },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidWheelbase(value) => {
                write!(f, "wheelbase must be finite and positive, got {value}")
            }
            ModelError::InvalidAccelLimit(value) => {
                write!(f, "acceleration limit must be non-negative, got {value}")
            }
            ModelError::InvalidSteerLimit(value) => {
                write!(f, "steering limit must lie in [0, pi/2), got {value}")
            }
            ModelError::InvalidTimeStep(value) => {
                write!(f, "time step must be finite and positive, got {value}")
            }
            ModelError::InvalidScript { segment, duration } => write!(
                f,
                "control script segment {segment} has invalid duration {duration}"
            ),
        }
    }
}

impl std::error::Error for ModelError {}
