//! Replays scripted drag gestures against a geofence on an in-memory map.

use gfm_config::GeofenceDefaults;
use gfm_core::{Color, GfmError};
use gfm_fence::{Builder, GeofenceCircle, GeofenceSnapshot, MarkerMoveResult};
use gfm_geo::{to_radius_lat_lng, LatLng};
use gfm_map::{MarkerHandle, MemorySurface};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("reading scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("geofence rejected: {0}")]
    Geofence(#[from] GfmError),
    #[error("step {step}: drag_resizer needs either `to` or `radius_m`")]
    MissingTarget { step: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeofenceSpec {
    #[serde(default)]
    pub circle_id: u64,
    pub center: LatLng,
    pub radius_m: Option<f64>,
    pub min_radius_m: Option<f64>,
    pub max_radius_m: Option<f64>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub stroke_width: Option<f32>,
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Color>,
}

impl GeofenceSpec {
    pub fn builder(&self, defaults: &GeofenceDefaults) -> Builder {
        let mut builder = Builder::from_defaults(defaults)
            .circle_id(self.circle_id)
            .center(self.center)
            .enabled(self.enabled);
        if let Some(radius_m) = self.radius_m {
            builder = builder.radius(radius_m);
        }
        if let Some(min_radius_m) = self.min_radius_m {
            builder = builder.min_radius(min_radius_m);
        }
        if let Some(max_radius_m) = self.max_radius_m {
            builder = builder.max_radius(max_radius_m);
        }
        if let Some(stroke_width) = self.stroke_width {
            builder = builder.stroke_width(stroke_width);
        }
        if let Some(stroke_color) = self.stroke_color {
            builder = builder.stroke_color(stroke_color);
        }
        if let Some(fill_color) = self.fill_color {
            builder = builder.fill_color(fill_color);
        }
        builder
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    DragCenter {
        to: LatLng,
    },
    /// Drops the resize handle at `to`, or `radius_m` east of the center.
    DragResizer {
        #[serde(default)]
        to: Option<LatLng>,
        #[serde(default)]
        radius_m: Option<f64>,
    },
    SetCenter {
        to: LatLng,
    },
    SetRadius {
        radius_m: f64,
    },
    Remove,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragCenter { .. } => "drag_center",
            Self::DragResizer { .. } => "drag_resizer",
            Self::SetCenter { .. } => "set_center",
            Self::SetRadius { .. } => "set_radius",
            Self::Remove => "remove",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub geofence: GeofenceSpec,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Put the handle back on the circle after a rejected resize.
    #[serde(default = "default_true")]
    pub snap_back: bool,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn demo() -> Self {
        Self {
            geofence: GeofenceSpec {
                circle_id: 1,
                center: LatLng::new(-33.8568, 151.2153),
                radius_m: Some(200.0),
                min_radius_m: Some(50.0),
                max_radius_m: Some(500.0),
                enabled: true,
                stroke_width: None,
                stroke_color: None,
                fill_color: None,
            },
            steps: vec![
                Step::DragResizer {
                    to: None,
                    radius_m: Some(300.0),
                },
                Step::DragResizer {
                    to: None,
                    radius_m: Some(30.0),
                },
                Step::DragResizer {
                    to: None,
                    radius_m: Some(600.0),
                },
                Step::DragCenter {
                    to: LatLng::new(-33.8600, 151.2100),
                },
                Step::SetRadius { radius_m: 120.0 },
                Step::Remove,
            ],
            snap_back: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    pub index: usize,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MarkerMoveResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub center: LatLng,
    pub radius_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub steps: Vec<StepReport>,
    pub geofence: GeofenceSnapshot,
    pub markers_on_surface: usize,
    pub circles_on_surface: usize,
}

pub fn run(scenario: &Scenario, defaults: &GeofenceDefaults) -> Result<Report, ScenarioError> {
    let mut surface = MemorySurface::new();
    let mut geofence = scenario.geofence.builder(defaults).build()?;
    geofence.plot(&mut surface)?;

    let mut steps = Vec::with_capacity(scenario.steps.len());
    for (index, step) in scenario.steps.iter().enumerate() {
        let mut result = None;
        let mut error = None;
        match step {
            Step::DragCenter { to } => {
                let marker = geofence.center_marker();
                result = Some(drag(
                    &mut geofence,
                    &mut surface,
                    marker,
                    *to,
                    scenario.snap_back,
                ));
            }
            Step::DragResizer { to, radius_m } => {
                let target = match (to, radius_m) {
                    (Some(to), _) => *to,
                    (None, Some(radius_m)) => to_radius_lat_lng(geofence.center(), *radius_m),
                    (None, None) => return Err(ScenarioError::MissingTarget { step: index }),
                };
                let marker = geofence.resizer_marker();
                result = Some(drag(
                    &mut geofence,
                    &mut surface,
                    marker,
                    target,
                    scenario.snap_back,
                ));
            }
            Step::SetCenter { to } => {
                error = geofence
                    .set_center(&mut surface, *to)
                    .err()
                    .map(|err| err.to_string());
            }
            Step::SetRadius { radius_m } => {
                error = geofence
                    .set_radius(&mut surface, *radius_m)
                    .err()
                    .map(|err| err.to_string());
            }
            Step::Remove => geofence.remove_area(&mut surface),
        }

        if let Some(message) = &error {
            tracing::warn!(step = index, action = step.name(), error = %message, "step rejected");
        }
        steps.push(StepReport {
            index,
            action: step.name().to_string(),
            result,
            error,
            center: geofence.center(),
            radius_m: geofence.radius(),
        });
    }

    Ok(Report {
        steps,
        geofence: geofence.snapshot(),
        markers_on_surface: surface.marker_count(),
        circles_on_surface: surface.circle_count(),
    })
}

fn drag(
    geofence: &mut GeofenceCircle,
    surface: &mut MemorySurface,
    marker: Option<MarkerHandle>,
    to: LatLng,
    snap_back: bool,
) -> MarkerMoveResult {
    let Some(marker) = marker else {
        return MarkerMoveResult::None;
    };
    if !surface.drag_marker(marker, to) {
        tracing::debug!(marker = %marker, "marker is not draggable");
        return MarkerMoveResult::None;
    }
    let result = geofence.on_marker_moved(surface, marker);
    if snap_back && matches!(result, MarkerMoveResult::MinRadius | MarkerMoveResult::MaxRadius) {
        geofence.restore_resizer(surface);
    }
    result
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenario_walks_every_outcome() {
        let report = run(&Scenario::demo(), &GeofenceDefaults::default()).unwrap();
        let results: Vec<Option<MarkerMoveResult>> =
            report.steps.iter().map(|step| step.result).collect();
        assert_eq!(
            results,
            vec![
                Some(MarkerMoveResult::RadiusChange),
                Some(MarkerMoveResult::MinRadius),
                Some(MarkerMoveResult::MaxRadius),
                Some(MarkerMoveResult::Moved),
                None,
                None,
            ]
        );
        assert!((report.steps[2].radius_m - 300.0).abs() < 1e-6);
        assert_eq!(report.geofence.radius_m, 120.0);
        assert!(!report.geofence.plotted);
        assert_eq!(report.markers_on_surface, 0);
        assert_eq!(report.circles_on_surface, 0);
    }

    #[test]
    fn parses_json_scenario() {
        let scenario = Scenario::from_json(
            r#"{
                "geofence": {
                    "circle_id": 3,
                    "center": { "latitude": 51.5, "longitude": -0.12 },
                    "max_radius_m": 400
                },
                "steps": [
                    { "action": "drag_resizer", "radius_m": 350 },
                    { "action": "set_radius", "radius_m": -4 },
                    { "action": "remove" }
                ]
            }"#,
        )
        .unwrap();
        assert!(scenario.snap_back);
        assert!(scenario.geofence.enabled);

        let report = run(&scenario, &GeofenceDefaults::default()).unwrap();
        assert_eq!(report.geofence.circle_id.0, 3);
        assert_eq!(report.steps[0].result, Some(MarkerMoveResult::RadiusChange));
        assert!(report.steps[1].error.is_some());
        assert!((report.steps[1].radius_m - 350.0).abs() < 1e-6);
    }

    #[test]
    fn disabled_geofence_cannot_be_dragged() {
        let mut scenario = Scenario::demo();
        scenario.geofence.enabled = false;
        let report = run(&scenario, &GeofenceDefaults::default()).unwrap();
        assert_eq!(report.steps[0].result, Some(MarkerMoveResult::None));
        assert_eq!(report.steps[0].radius_m, 200.0);
    }

    #[test]
    fn resizer_drag_without_target_is_an_error() {
        let mut scenario = Scenario::demo();
        scenario.steps = vec![Step::DragResizer {
            to: None,
            radius_m: None,
        }];
        let err = run(&scenario, &GeofenceDefaults::default()).unwrap_err();
        assert!(matches!(err, ScenarioError::MissingTarget { step: 0 }));
    }

    #[test]
    fn invalid_geofence_is_reported() {
        let mut scenario = Scenario::demo();
        scenario.geofence.radius_m = Some(0.0);
        let err = run(&scenario, &GeofenceDefaults::default()).unwrap_err();
        assert!(matches!(err, ScenarioError::Geofence(_)));
    }
}
