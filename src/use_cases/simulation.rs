use super::types::{SimulationSettings, SimulationUpdate};
use crate::domain::{ControlSource, ModelError, VehicleModel};
use tracing::{debug, info};

// Fixed-step driver: one model, one control source, one update per tick.
pub struct Simulation<C> {
    model: VehicleModel,
    controls: C,
    settings: SimulationSettings,
    tick: u64,
}

impl<C> Simulation<C>
where
    C: ControlSource,
{
    pub fn new(
        model: VehicleModel,
        controls: C,
        settings: SimulationSettings,
    ) -> Result<Self, ModelError> {
        settings.validate()?;
        Ok(Self {
            model,
            controls,
            settings,
            tick: 0,
        })
    }

    pub fn model(&self) -> &VehicleModel {
        &self.model
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn elapsed(&self) -> f64 {
        // tick * dt rather than a running sum.
        self.tick as f64 * self.settings.dt
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.settings.max_ticks
    }

    pub fn tick(&mut self) -> SimulationUpdate {
        let requested = self.controls.control_at(self.tick, self.elapsed());
        self.model.step(requested.a, requested.delta, self.settings.dt);

        let control = self.model.effective_control();
        if control != requested {
            debug!(
                tick = self.tick,
                requested_a = requested.a,
                requested_delta = requested.delta,
                a = control.a,
                delta = control.delta,
                "control saturated"
            );
        }

        self.tick += 1;
        SimulationUpdate {
            tick: self.tick,
            elapsed: self.elapsed(),
            state: self.model.state(),
            control,
        }
    }

    pub fn run(&mut self) -> Vec<SimulationUpdate> {
        info!(
            dt = self.settings.dt,
            max_ticks = self.settings.max_ticks,
            "simulation started"
        );
        let mut updates = Vec::new();
        while !self.is_finished() {
            updates.push(self.tick());
        }
        let state = self.model.state();
        info!(
            ticks = self.tick,
            x = state.x,
            y = state.y,
            yaw = state.yaw,
            v = state.v,
            "simulation finished"
        );
        updates
    }
}
