use anyhow::Context;
use gfm_config::{GeofenceDefaults, ServiceConfig};
use gfm_observability::{init, log_startup, ObservabilityConfig};
use gfm_playground::{run, Scenario};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env("gfm-playground");
    let defaults = GeofenceDefaults::from_env();
    let handle = init(&ObservabilityConfig::from(&config));
    log_startup(&handle, &defaults);

    let scenario = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Scenario::load(&path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => {
            tracing::info!("no scenario given, replaying the built-in demo");
            Scenario::demo()
        }
    };

    let report = run(&scenario, &defaults).context("replaying scenario")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
