// Wire DTOs and conversions for telemetry output and control script input.
// Domain types stay free of serde; everything crossing the process boundary
// goes through here.

use crate::domain::{ControlInput, ModelError};
use crate::use_cases::{ControlScript, ScriptSegment, SimulationUpdate};
use serde::{Deserialize, Serialize};

/// Flattened per-tick telemetry, one JSON object per line.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationUpdateDto {
    pub tick: u64,
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
    pub v: f64,
    // Effective (saturated) control applied during this tick.
    pub a: f64,
    pub delta: f64,
}

impl From<&SimulationUpdate> for SimulationUpdateDto {
    fn from(update: &SimulationUpdate) -> Self {
        Self {
            tick: update.tick,
            t: update.elapsed,
            x: update.state.x,
            y: update.state.y,
            yaw: update.state.yaw,
            v: update.state.v,
            a: update.control.a,
            delta: update.control.delta,
        }
    }
}

/// Control script file contents.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlScriptDto {
    #[serde(default)]
    pub segments: Vec<ScriptSegmentDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptSegmentDto {
    pub duration: f64,
    #[serde(default)]
    pub a: f64,
    #[serde(default)]
    pub delta: f64,
}

impl From<ScriptSegmentDto> for ScriptSegment {
    fn from(segment: ScriptSegmentDto) -> Self {
        Self {
            duration: segment.duration,
            control: ControlInput::new(segment.a, segment.delta),
        }
    }
}

impl TryFrom<ControlScriptDto> for ControlScript {
    type Error = ModelError;

    fn try_from(script: ControlScriptDto) -> Result<Self, Self::Error> {
        let segments = script.segments.into_iter().map(Into::into).collect();
        ControlScript::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleState;
    use serde_json::json;

    #[test]
    fn when_update_is_serialized_then_fields_are_flat() {
        let update = SimulationUpdate {
            tick: 3,
            elapsed: 0.3,
            state: VehicleState::new(1.0, 2.0, 0.5, 4.0),
            control: ControlInput::new(2.0, -0.25),
        };

        let value = serde_json::to_value(SimulationUpdateDto::from(&update))
            .expect("expected update to serialize");

        assert_eq!(
            value,
            json!({
                "tick": 3,
                "t": 0.3,
                "x": 1.0,
                "y": 2.0,
                "yaw": 0.5,
                "v": 4.0,
                "a": 2.0,
                "delta": -0.25
            })
        );
    }

    #[test]
    fn when_script_omits_controls_then_they_default_to_zero() {
        let dto: ControlScriptDto = serde_json::from_value(json!({
            "segments": [
                { "duration": 1.5, "a": 1.0 },
                { "duration": 2.0, "delta": 0.2 },
                { "duration": 0.5 }
            ]
        }))
        .expect("expected script to parse");

        let script = ControlScript::try_from(dto).expect("expected valid script");

        assert_eq!(script.total_duration(), 4.0);
        assert_eq!(script.control_at_time(0.0), ControlInput::new(1.0, 0.0));
        assert_eq!(script.control_at_time(2.0), ControlInput::new(0.0, 0.2));
        assert_eq!(script.control_at_time(3.9), ControlInput::default());
    }

    #[test]
    fn when_segments_key_is_missing_then_script_is_empty() {
        let dto: ControlScriptDto =
            serde_json::from_value(json!({})).expect("expected script to parse");

        let script = ControlScript::try_from(dto).expect("expected valid script");

        assert_eq!(script.total_duration(), 0.0);
    }

    #[test]
    fn when_script_has_negative_duration_then_conversion_fails() {
        let dto: ControlScriptDto = serde_json::from_value(json!({
            "segments": [{ "duration": -1.0 }]
        }))
        .expect("expected script to parse");

        assert!(matches!(
            ControlScript::try_from(dto),
            Err(ModelError::InvalidScript { segment: 0, .. })
        ));
    }
}
