use crate::domain::{ControlInput, ControlSource, ModelError};

/// Holds the same request for every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantControl(pub ControlInput);

impl ControlSource for ConstantControl {
    fn control_at(&mut self, _tick: u64, _elapsed: f64) -> ControlInput {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptSegment {
    pub duration: f64, // s
    pub control: ControlInput,
}

/// Piecewise-constant control plan. Segments run back to back, each covering
/// `[start, start + duration)`; past the last one the vehicle coasts.
#[derive(Debug, Clone, Default)]
pub struct ControlScript {
    // (end time, control) per segment, ends increasing.
    ends: Vec<(f64, ControlInput)>,
}

impl ControlScript {
    pub fn new(segments: Vec<ScriptSegment>) -> Result<Self, ModelError> {
        let mut ends = Vec::with_capacity(segments.len());
        let mut end = 0.0;
        for (index, segment) in segments.into_iter().enumerate() {
            if !segment.duration.is_finite() || segment.duration < 0.0 {
                return Err(ModelError::InvalidScript {
                    segment: index,
                    duration: segment.duration,
                });
            }
            end += segment.duration;
            ends.push((end, segment.control));
        }
        Ok(Self { ends })
    }

    pub fn total_duration(&self) -> f64 {
        self.ends.last().map_or(0.0, |(end, _)| *end)
    }

    pub fn control_at_time(&self, elapsed: f64) -> ControlInput {
        // First segment whose end lies strictly after `elapsed`; zero-length
        // segments are skipped naturally.
        let index = self.ends.partition_point(|(end, _)| *end <= elapsed);
        self.ends
            .get(index)
            .map_or_else(ControlInput::default, |(_, control)| *control)
    }
}

impl ControlSource for ControlScript {
    fn control_at(&mut self, _tick: u64, elapsed: f64) -> ControlInput {
        self.control_at_time(elapsed)
    }
}
