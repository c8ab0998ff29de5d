// Framework bootstrap for the telemetry runner.

use crate::domain::{ControlInput, ControlSource, VehicleModel, VehicleParameters, VehicleState};
use crate::frameworks::config;
use crate::interface_adapters::protocol::{ControlScriptDto, SimulationUpdateDto};
use crate::use_cases::{ConstantControl, ControlScript, Simulation, SimulationSettings};

use std::io::{self, Result, Write};
use std::path::Path;
use std::time::Duration;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Telemetry owns stdout; logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Step `sim` to completion, writing one JSON line per tick to `out`.
/// Returns the number of ticks written.
pub async fn run<C, W>(mut sim: Simulation<C>, realtime: bool, out: &mut W) -> Result<u64>
where
    C: ControlSource,
    W: Write,
{
    let mut pacer = realtime.then(|| {
        // Sub-nanosecond steps round to zero, which `interval` rejects.
        let period = Duration::try_from_secs_f64(sim.settings().dt)
            .unwrap_or(Duration::MAX)
            .max(Duration::from_nanos(1));
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        interval
    });

    let mut written = 0;
    while !sim.is_finished() {
        if let Some(interval) = pacer.as_mut() {
            interval.tick().await;
        }
        let update = sim.tick();
        serde_json::to_writer(&mut *out, &SimulationUpdateDto::from(&update))?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;

    let state = sim.model().state();
    tracing::info!(
        ticks = written,
        x = state.x,
        y = state.y,
        yaw = state.yaw,
        v = state.v,
        "run complete"
    );
    Ok(written)
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let sim = build_simulation().await.inspect_err(|e| {
        tracing::error!(error = %e, "failed to build simulation");
    })?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run(sim, config::realtime(), &mut out).await.map(|_| ())
}

async fn build_simulation() -> Result<Simulation<Box<dyn ControlSource>>> {
    let params = VehicleParameters::new(
        config::wheelbase(),
        config::accel_limit(),
        config::steer_limit(),
    )
    .map_err(io::Error::other)?;
    let state = VehicleState::from_array(config::initial_state());
    tracing::debug!(
        wheelbase = params.wheelbase,
        a_max = params.a_max,
        delta_max = params.delta_max,
        "vehicle configured"
    );

    let controls: Box<dyn ControlSource> = match config::control_script_path() {
        Some(path) => Box::new(load_control_script(&path).await?),
        None => {
            let (a, delta) = config::constant_control();
            Box::new(ConstantControl(ControlInput::new(a, delta)))
        }
    };

    let settings = SimulationSettings {
        dt: config::time_step(),
        max_ticks: config::max_ticks(),
    };

    Simulation::new(VehicleModel::new(state, params), controls, settings).map_err(io::Error::other)
}

pub async fn load_control_script(path: &Path) -> Result<ControlScript> {
    let raw = tokio::fs::read_to_string(path).await.inspect_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to read control script");
    })?;
    let dto: ControlScriptDto = serde_json::from_str(&raw).map_err(io::Error::other)?;
    let script = ControlScript::try_from(dto).map_err(io::Error::other)?;
    tracing::info!(
        path = %path.display(),
        duration = script.total_duration(),
        "control script loaded"
    );
    Ok(script)
}
