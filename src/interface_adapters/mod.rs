// Interface adapters: wire formats for telemetry and control scripts.

pub mod protocol;
