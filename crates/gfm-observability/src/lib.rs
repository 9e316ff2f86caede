//! Logging and metrics setup shared by geofence services.

use gfm_config::{Environment, GeofenceDefaults, ServiceConfig};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub service_name: String,
    pub environment: Environment,
    pub log_level: String,
    pub metrics_addr: Option<String>,
}

impl From<&ServiceConfig> for ObservabilityConfig {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            service_name: config.service_name.clone(),
            environment: config.environment,
            log_level: config.log_level.clone(),
            metrics_addr: config.metrics_addr.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObservabilityHandle {
    pub service_name: String,
    pub environment: Environment,
    pub metrics_enabled: bool,
}

/// Installs the log subscriber (on stderr, stdout is left to the service)
/// and, when `GFM_METRICS_ADDR` is set, the Prometheus listener with the
/// geofence counters described.
pub fn init(config: &ObservabilityConfig) -> ObservabilityHandle {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let metrics_enabled = match metrics_listener(config) {
        Some(addr) => install_exporter(config, addr),
        None => false,
    };
    if metrics_enabled {
        gfm_fence::describe_metrics();
    }

    ObservabilityHandle {
        service_name: config.service_name.clone(),
        environment: config.environment,
        metrics_enabled,
    }
}

/// Logs the service identity together with the geofence defaults it will
/// build with.
pub fn log_startup(handle: &ObservabilityHandle, defaults: &GeofenceDefaults) {
    tracing::info!(
        service = %handle.service_name,
        environment = %handle.environment,
        metrics_enabled = handle.metrics_enabled,
        radius_m = defaults.radius_m,
        min_radius_m = ?defaults.min_radius_m,
        max_radius_m = ?defaults.max_radius_m,
        stroke_color = %defaults.stroke_color,
        fill_color = %defaults.fill_color,
        "geofence service starting"
    );
}

fn metrics_listener(config: &ObservabilityConfig) -> Option<SocketAddr> {
    let raw = config.metrics_addr.as_ref()?;
    match raw.parse() {
        Ok(addr) => Some(addr),
        Err(err) => {
            tracing::warn!(
                service = %config.service_name,
                value = %raw,
                error = %err,
                "invalid GFM_METRICS_ADDR, geofence metrics disabled"
            );
            None
        }
    }
}

fn install_exporter(config: &ObservabilityConfig, addr: SocketAddr) -> bool {
    let builder = PrometheusBuilder::new()
        .with_http_listener(addr)
        .add_global_label("service", config.service_name.clone())
        .add_global_label("environment", config.environment.to_string());

    match builder.install() {
        Ok(()) => {
            tracing::debug!(%addr, "geofence metrics listening");
            true
        }
        Err(err) => {
            tracing::warn!(
                service = %config.service_name,
                error = %err,
                "failed to initialize Prometheus exporter"
            );
            false
        }
    }
}
