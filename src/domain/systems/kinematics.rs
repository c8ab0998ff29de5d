use crate::domain::state::{ControlInput, StateDerivative, VehicleState};
use crate::domain::tuning::vehicle::VehicleParameters;

// Saturate each channel to its symmetric actuator limit.
// `max` then `min` ignore a NaN operand, so NaN lands on `-limit`; infinities
// land on the matching bound.
pub fn clamp_controls(params: &VehicleParameters, requested: ControlInput) -> ControlInput {
    ControlInput {
        a: saturate(requested.a, params.a_max),
        delta: saturate(requested.delta, params.delta_max),
    }
}

fn saturate(value: f64, limit: f64) -> f64 {
    value.max(-limit).min(limit)
}

/// Rear-axle bicycle kinematics evaluated at `state` with already clamped
/// controls.
pub fn derivative(
    state: &VehicleState,
    effective: ControlInput,
    wheelbase: f64,
) -> StateDerivative {
    let (sin_yaw, cos_yaw) = state.yaw.sin_cos();

    StateDerivative {
        x_dot: state.v * cos_yaw,
        y_dot: state.v * sin_yaw,
        yaw_dot: state.v * effective.delta.tan() / wheelbase,
        v_dot: effective.a,
    }
}

pub fn euler_step(state: &mut VehicleState, derivative: &StateDerivative, dt: f64) {
    *state = state.integrate(derivative, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn when_controls_are_within_limits_then_clamp_leaves_them_unchanged() {
        let params = VehicleParameters::default();
        for (a, delta) in [
            (0.0, 0.0),
            (1.5, -0.5),
            (-2.0, FRAC_PI_4),
            (2.0, -FRAC_PI_4),
        ] {
            let effective = clamp_controls(&params, ControlInput::new(a, delta));

            assert_eq!(effective, ControlInput::new(a, delta));
        }
    }

    #[test]
    fn when_controls_exceed_limits_then_they_saturate_at_the_matching_bound() {
        let params = VehicleParameters::default();

        let high = clamp_controls(&params, ControlInput::new(100.0, 1.0));
        let low = clamp_controls(&params, ControlInput::new(-100.0, -1.0));

        assert_eq!(high, ControlInput::new(2.0, FRAC_PI_4));
        assert_eq!(low, ControlInput::new(-2.0, -FRAC_PI_4));
    }

    #[test]
    fn when_controls_are_infinite_then_they_saturate() {
        let params = VehicleParameters::default();

        let effective =
            clamp_controls(&params, ControlInput::new(f64::INFINITY, f64::NEG_INFINITY));

        assert_eq!(effective, ControlInput::new(2.0, -FRAC_PI_4));
    }

    #[test]
    fn when_controls_are_nan_then_they_saturate_to_the_lower_bound() {
        let params = VehicleParameters::default();

        let effective = clamp_controls(&params, ControlInput::new(f64::NAN, f64::NAN));

        assert_eq!(effective, ControlInput::new(-2.0, -FRAC_PI_4));
    }

    #[test]
    fn when_speed_is_zero_then_only_speed_changes() {
        let state = VehicleState::new(4.0, -2.0, 1.2, 0.0);

        let d = derivative(&state, ControlInput::new(1.0, 0.7), 3.0);

        assert_eq!(d.x_dot, 0.0);
        assert_eq!(d.y_dot, 0.0);
        assert_eq!(d.yaw_dot, 0.0);
        assert_eq!(d.v_dot, 1.0);
    }

    #[test]
    fn when_heading_is_quarter_turn_then_motion_is_along_y() {
        let state = VehicleState::new(0.0, 0.0, std::f64::consts::FRAC_PI_2, 2.0);

        let d = derivative(&state, ControlInput::default(), 3.0);

        assert!(d.x_dot.abs() < 1e-12);
        assert!((d.y_dot - 2.0).abs() < 1e-12);
    }

    #[test]
    fn when_steering_left_at_speed_then_yaw_rate_is_v_tan_delta_over_l() {
        let state = VehicleState::new(0.0, 0.0, 0.0, 1.0);

        let d = derivative(&state, ControlInput::new(0.0, FRAC_PI_4), 3.0);

        assert!((d.yaw_dot - FRAC_PI_4.tan() / 3.0).abs() < 1e-12);
    }

    #[test]
    fn when_reversing_with_left_steer_then_yaw_rate_is_negative() {
        let state = VehicleState::new(0.0, 0.0, 0.0, -1.0);

        let d = derivative(&state, ControlInput::new(0.0, 0.3), 2.0);

        assert!(d.yaw_dot < 0.0);
        assert!(d.x_dot < 0.0);
    }

    #[test]
    fn when_euler_step_runs_then_state_matches_integrate() {
        let mut state = VehicleState::new(1.0, 2.0, 0.3, 4.0);
        let d = derivative(&state, ControlInput::new(0.5, 0.1), 2.5);
        let expected = state.integrate(&d, 0.05);

        euler_step(&mut state, &d, 0.05);

        assert_eq!(state, expected);
    }
}
