// Domain-level kinematic state, control and derivative types.

/// Pose and speed of the rear-axle reference point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VehicleState {
    pub x: f64,   // m
    pub y: f64,   // m
    pub yaw: f64, // rad, not wrapped
    pub v: f64,   // m/s, negative is reverse
}

impl VehicleState {
    pub fn new(x: f64, y: f64, yaw: f64, v: f64) -> Self {
        Self { x, y, yaw, v }
    }

    /// Components in `(x, y, yaw, v)` order.
    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.yaw, self.v]
    }

    pub fn from_array(values: [f64; 4]) -> Self {
        let [x, y, yaw, v] = values;
        Self { x, y, yaw, v }
    }

    /// Explicit Euler update: `self + derivative * dt`.
    pub fn integrate(self, derivative: &StateDerivative, dt: f64) -> Self {
        Self {
            x: self.x + derivative.x_dot * dt,
            y: self.y + derivative.y_dot * dt,
            yaw: self.yaw + derivative.yaw_dot * dt,
            v: self.v + derivative.v_dot * dt,
        }
    }
}

/// Longitudinal acceleration and steering angle, either as requested or as
/// applied after saturation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    pub a: f64,     // m/s^2
    pub delta: f64, // rad
}

impl ControlInput {
    pub fn new(a: f64, delta: f64) -> Self {
        Self { a, delta }
    }
}

/// Time derivative of `VehicleState`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateDerivative {
    pub x_dot: f64,
    pub y_dot: f64,
    pub yaw_dot: f64,
    pub v_dot: f64,
}

impl StateDerivative {
    pub fn to_array(self) -> [f64; 4] {
        [self.x_dot, self.y_dot, self.yaw_dot, self.v_dot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_state_round_trips_through_array_then_order_is_x_y_yaw_v() {
        let state = VehicleState::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(state.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(VehicleState::from_array([1.0, 2.0, 3.0, 4.0]), state);
    }

    #[test]
    fn when_integrating_then_each_component_moves_by_its_rate_times_dt() {
        let state = VehicleState::new(1.0, -1.0, 0.5, 2.0);
        let derivative = StateDerivative {
            x_dot: 2.0,
            y_dot: -4.0,
            yaw_dot: 0.25,
            v_dot: 1.0,
        };

        let next = state.integrate(&derivative, 0.5);

        assert_eq!(next, VehicleState::new(2.0, -3.0, 0.625, 2.5));
    }

    #[test]
    fn when_dt_is_negative_then_integration_runs_backward() {
        let state = VehicleState::new(0.0, 0.0, 0.0, 1.0);
        let derivative = StateDerivative {
            x_dot: 1.0,
            ..Default::default()
        };

        let next = state.integrate(&derivative, -2.0);

        assert_eq!(next.x, -2.0);
    }
}
