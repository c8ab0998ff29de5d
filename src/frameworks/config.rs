use std::{env, path::PathBuf, str::FromStr};

use crate::domain::VehicleParameters;

// Runtime knobs read from the environment (optionally seeded from `.env`).
// Each getter has a `_from` twin that takes the variable lookup explicitly.

type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

pub fn wheelbase() -> f64 {
    wheelbase_from(&env_var)
}

pub fn accel_limit() -> f64 {
    accel_limit_from(&env_var)
}

pub fn steer_limit() -> f64 {
    steer_limit_from(&env_var)
}

/// Initial `[x, y, yaw, v]`.
pub fn initial_state() -> [f64; 4] {
    initial_state_from(&env_var)
}

pub fn time_step() -> f64 {
    time_step_from(&env_var)
}

pub fn max_ticks() -> u64 {
    max_ticks_from(&env_var)
}

/// Constant `(a, delta)` request used when no control script is configured.
pub fn constant_control() -> (f64, f64) {
    constant_control_from(&env_var)
}

pub fn control_script_path() -> Option<PathBuf> {
    control_script_path_from(&env_var)
}

// Pace ticks against the wall clock instead of running flat out.
pub fn realtime() -> bool {
    parse_flag(env_var("SIM_REALTIME"))
}

fn wheelbase_from(lookup: Lookup) -> f64 {
    let default = VehicleParameters::default().wheelbase;
    parse_or(lookup("VEHICLE_WHEELBASE"), default)
}

fn accel_limit_from(lookup: Lookup) -> f64 {
    let default = VehicleParameters::default().a_max;
    parse_or(lookup("VEHICLE_A_MAX"), default)
}

fn steer_limit_from(lookup: Lookup) -> f64 {
    let default = VehicleParameters::default().delta_max;
    parse_or(lookup("VEHICLE_DELTA_MAX"), default)
}

fn initial_state_from(lookup: Lookup) -> [f64; 4] {
    let keys = ["VEHICLE_X", "VEHICLE_Y", "VEHICLE_YAW", "VEHICLE_V"];
    keys.map(|key| parse_or(lookup(key), 0.0))
}

fn time_step_from(lookup: Lookup) -> f64 {
    parse_or(lookup("SIM_DT"), 0.1)
}

fn max_ticks_from(lookup: Lookup) -> u64 {
    parse_or(lookup("SIM_MAX_TICKS"), 100)
}

fn constant_control_from(lookup: Lookup) -> (f64, f64) {
    (
        parse_or(lookup("SIM_ACCEL"), 0.0),
        parse_or(lookup("SIM_STEER"), 0.0),
    )
}

fn control_script_path_from(lookup: Lookup) -> Option<PathBuf> {
    lookup("SIM_CONTROL_SCRIPT")
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn parse_flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some("1" | "true" | "TRUE" | "yes")
    )
}
