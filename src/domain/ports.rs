use crate::domain::state::ControlInput;

// Supplies the requested control for each simulation tick.
pub trait ControlSource {
    fn control_at(&mut self, tick: u64, elapsed: f64) -> ControlInput;
}

impl<T> ControlSource for Box<T>
where
    T: ControlSource + ?Sized,
{
    fn control_at(&mut self, tick: u64, elapsed: f64) -> ControlInput {
        (**self).control_at(tick, elapsed)
    }
}
