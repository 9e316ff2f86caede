use gfm_config::GeofenceDefaults;
use gfm_core::Color;
use gfm_map::{Anchor, IconId, MarkerIcon};

/// Styling, bounds and interaction settings of a geofence.
///
/// Everything except identity, center and radius. Cloned by value into each
/// circle, so circles built from the same options never share state.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceOptions {
    pub enabled: bool,
    pub min_radius_m: Option<f64>,
    pub max_radius_m: Option<f64>,
    pub stroke_width: f32,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub center_icon: Option<IconId>,
    pub center_color: Color,
    /// Takes precedence over `center_icon` unless [`MarkerIcon::Default`].
    pub center_bitmap: MarkerIcon,
    pub resizer_icon: Option<IconId>,
    pub center_anchor: Anchor,
    pub resizer_anchor: Anchor,
}

impl GeofenceOptions {
    pub fn from_defaults(defaults: &GeofenceDefaults) -> Self {
        Self {
            min_radius_m: defaults.min_radius_m,
            max_radius_m: defaults.max_radius_m,
            stroke_width: defaults.stroke_width,
            stroke_color: defaults.stroke_color,
            fill_color: defaults.fill_color,
            ..Self::default()
        }
    }
}

impl Default for GeofenceOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            min_radius_m: None,
            max_radius_m: None,
            stroke_width: GeofenceDefaults::STROKE_WIDTH,
            stroke_color: GeofenceDefaults::STROKE_COLOR,
            fill_color: GeofenceDefaults::fill_color(),
            center_icon: Some(IconId::LOCATION_PIN),
            center_color: Color::RED,
            center_bitmap: MarkerIcon::Default,
            resizer_icon: Some(IconId::LOCATION_PIN),
            center_anchor: Anchor::CENTER,
            resizer_anchor: Anchor::CENTER,
        }
    }
}
