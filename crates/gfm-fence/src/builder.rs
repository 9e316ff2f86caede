use crate::circle::GeofenceCircle;
use crate::options::GeofenceOptions;
use gfm_config::GeofenceDefaults;
use gfm_core::{CircleId, Color, GfmError, GfmResult};
use gfm_geo::{LatLng, MAX_RADIUS_M, is_valid_radius};
use gfm_map::icon::{self, IconId, IconSource, RgbaImage};
use gfm_map::{Anchor, MarkerIcon};
use std::sync::Arc;

/// Collects the configuration of a [`GeofenceCircle`].
///
/// [`build`](Self::build) copies everything out, so a builder can be reused
/// or changed afterwards without affecting circles it already produced.
#[derive(Clone)]
pub struct Builder {
    circle_id: CircleId,
    center: Option<LatLng>,
    radius_m: f64,
    options: GeofenceOptions,
    icons: Option<Arc<dyn IconSource>>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            circle_id: CircleId::default(),
            center: None,
            radius_m: GeofenceDefaults::RADIUS_M,
            options: GeofenceOptions::default(),
            icons: None,
        }
    }

    pub fn from_defaults(defaults: &GeofenceDefaults) -> Self {
        Self {
            radius_m: defaults.radius_m,
            options: GeofenceOptions::from_defaults(defaults),
            ..Self::new()
        }
    }

    /// Copies the configuration of `circle`, current center and radius
    /// included. Visuals are not copied.
    pub fn from_circle(circle: &GeofenceCircle) -> Self {
        Self {
            circle_id: circle.circle_id(),
            center: Some(circle.center()),
            radius_m: circle.radius(),
            options: circle.options().clone(),
            icons: circle.icons().cloned(),
        }
    }

    pub fn circle_id(mut self, circle_id: u64) -> Self {
        self.circle_id = CircleId(circle_id);
        self
    }

    pub fn center(mut self, center: LatLng) -> Self {
        self.center = Some(center);
        self
    }

    pub fn radius(mut self, radius_m: f64) -> Self {
        self.radius_m = radius_m;
        self
    }

    /// Whether the user may drag the markers.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.options.enabled = enabled;
        self
    }

    /// A negative value removes the bound.
    pub fn min_radius(mut self, min_radius_m: f64) -> Self {
        self.options.min_radius_m = bound(min_radius_m);
        self
    }

    /// A negative value removes the bound.
    pub fn max_radius(mut self, max_radius_m: f64) -> Self {
        self.options.max_radius_m = bound(max_radius_m);
        self
    }

    pub fn stroke_width(mut self, stroke_width: f32) -> Self {
        self.options.stroke_width = stroke_width;
        self
    }

    pub fn stroke_color(mut self, stroke_color: Color) -> Self {
        self.options.stroke_color = stroke_color;
        self
    }

    pub fn fill_color(mut self, fill_color: Color) -> Self {
        self.options.fill_color = fill_color;
        self
    }

    pub fn center_icon(mut self, icon: IconId) -> Self {
        self.options.center_icon = Some(icon);
        self
    }

    pub fn no_center_icon(mut self) -> Self {
        self.options.center_icon = None;
        self
    }

    pub fn center_color(mut self, color: Color) -> Self {
        self.options.center_color = color;
        self
    }

    pub fn center_bitmap(mut self, bitmap: Arc<RgbaImage>) -> Self {
        self.options.center_bitmap = MarkerIcon::Bitmap(bitmap);
        self
    }

    pub fn resizer_icon(mut self, icon: IconId) -> Self {
        self.options.resizer_icon = Some(icon);
        self
    }

    pub fn no_resizer_icon(mut self) -> Self {
        self.options.resizer_icon = None;
        self
    }

    pub fn center_offset_horizontal(mut self, offset: f32) -> Self {
        self.options.center_anchor.horizontal = offset;
        self
    }

    pub fn center_offset_vertical(mut self, offset: f32) -> Self {
        self.options.center_anchor.vertical = offset;
        self
    }

    pub fn resizer_offset_horizontal(mut self, offset: f32) -> Self {
        self.options.resizer_anchor.horizontal = offset;
        self
    }

    pub fn resizer_offset_vertical(mut self, offset: f32) -> Self {
        self.options.resizer_anchor.vertical = offset;
        self
    }

    pub fn center_anchor(mut self, anchor: Anchor) -> Self {
        self.options.center_anchor = anchor;
        self
    }

    pub fn resizer_anchor(mut self, anchor: Anchor) -> Self {
        self.options.resizer_anchor = anchor;
        self
    }

    pub fn icons(mut self, icons: Arc<dyn IconSource>) -> Self {
        self.icons = Some(icons);
        self
    }

    pub fn build(&self) -> GfmResult<GeofenceCircle> {
        let center = self
            .center
            .ok_or_else(|| GfmError::invalid_input("geofence center is required"))?;
        if !center.is_finite() {
            return Err(GfmError::invalid_input(format!(
                "geofence center must be finite, got {center}"
            )));
        }
        if !is_valid_radius(self.radius_m) {
            return Err(GfmError::invalid_input(format!(
                "geofence radius must be in (0, {MAX_RADIUS_M}] meters, got {}",
                self.radius_m
            )));
        }
        for (name, value) in [
            ("min_radius", self.options.min_radius_m),
            ("max_radius", self.options.max_radius_m),
        ] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(GfmError::invalid_input(format!("{name} must be finite")));
            }
        }
        if let (Some(min), Some(max)) = (self.options.min_radius_m, self.options.max_radius_m) {
            if min > max {
                return Err(GfmError::invalid_input(format!(
                    "min_radius {min} exceeds max_radius {max}"
                )));
            }
        }
        if !self.options.stroke_width.is_finite() || self.options.stroke_width < 0.0 {
            return Err(GfmError::invalid_input(format!(
                "stroke width must be non-negative, got {}",
                self.options.stroke_width
            )));
        }

        Ok(GeofenceCircle::from_parts(
            self.circle_id,
            center,
            self.radius_m,
            self.options.clone(),
            self.icons.clone(),
        ))
    }

    /// Scales `bitmap` to `px`×`px` and clips it to a disc.
    pub fn rounded_corner_bitmap(bitmap: &RgbaImage, px: u32) -> RgbaImage {
        icon::rounded_corners(bitmap, px)
    }

    /// Draws `top` over a copy of `base`, inset by `offset_px` on both axes.
    pub fn overlay(base: &RgbaImage, top: &RgbaImage, offset_px: u32) -> RgbaImage {
        icon::overlay(base, top, offset_px)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

fn bound(value: f64) -> Option<f64> {
    if value < 0.0 { None } else { Some(value) }
}
