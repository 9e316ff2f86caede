use gfm_core::Color;
use serde::{Deserialize, Serialize};
use std::{env, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Local,
    Dev,
    Test,
    Prod,
}

impl Environment {
    pub fn from_env(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "dev" | "development" => Self::Dev,
            "test" | "testing" => Self::Test,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Prod => "prod",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    pub environment: Environment,
    pub metrics_addr: Option<String>,
    pub log_level: String,
}

impl ServiceConfig {
    pub fn from_env(default_service_name: &str) -> Self {
        Self {
            service_name: env_var("GFM_SERVICE_NAME", default_service_name.to_string()),
            environment: Environment::from_env(&env_var("GFM_ENV", "local".to_string())),
            metrics_addr: env::var("GFM_METRICS_ADDR").ok(),
            log_level: env_var("GFM_LOG_LEVEL", "info".to_string()),
        }
    }
}

/// Builder defaults for geofences, overridable per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceDefaults {
    pub radius_m: f64,
    pub min_radius_m: Option<f64>,
    pub max_radius_m: Option<f64>,
    pub stroke_width: f32,
    pub stroke_color: Color,
    pub fill_color: Color,
}

impl GeofenceDefaults {
    pub const RADIUS_M: f64 = 200.0;
    pub const STROKE_WIDTH: f32 = 4.0;
    pub const STROKE_COLOR: Color = Color::RED;

    /// Translucent fill, HSV(1°, 1, 1) at alpha 35.
    pub fn fill_color() -> Color {
        gfm_core::hsv_to_color(35, [1.0, 1.0, 200.0])
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            radius_m: parse_positive(lookup("GFM_DEFAULT_RADIUS_M"))
                .filter(|radius_m| gfm_geo::is_valid_radius(*radius_m))
                .unwrap_or(defaults.radius_m),
            min_radius_m: parse_bound(lookup("GFM_MIN_RADIUS_M")),
            max_radius_m: parse_bound(lookup("GFM_MAX_RADIUS_M")),
            stroke_width: lookup("GFM_STROKE_WIDTH")
                .and_then(|value| value.trim().parse::<f32>().ok())
                .filter(|value| value.is_finite() && *value >= 0.0)
                .unwrap_or(defaults.stroke_width),
            stroke_color: parse_color(lookup("GFM_STROKE_COLOR")).unwrap_or(defaults.stroke_color),
            fill_color: parse_color(lookup("GFM_FILL_COLOR")).unwrap_or(defaults.fill_color),
        }
    }
}

impl Default for GeofenceDefaults {
    fn default() -> Self {
        Self {
            radius_m: Self::RADIUS_M,
            min_radius_m: None,
            max_radius_m: None,
            stroke_width: Self::STROKE_WIDTH,
            stroke_color: Self::STROKE_COLOR,
            fill_color: Self::fill_color(),
        }
    }
}

fn env_var(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn parse_positive(value: Option<String>) -> Option<f64> {
    value
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
}

// `-1` (or any non-positive value) means unbounded.
fn parse_bound(value: Option<String>) -> Option<f64> {
    parse_positive(value)
}

fn parse_color(value: Option<String>) -> Option<Color> {
    value.and_then(|value| value.parse::<Color>().ok())
}
