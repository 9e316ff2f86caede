use crate::builder::Builder;
use crate::options::GeofenceOptions;
use crate::telemetry;
use gfm_core::{CircleId, Color, GfmError, GfmResult};
use gfm_geo::{is_valid_radius, to_radius_lat_lng, to_radius_meters, LatLng, MAX_RADIUS_M};
use gfm_map::icon::{self, IconId, IconSource, RgbaImage};
use gfm_map::{CircleHandle, CircleOptions, MapSurface, MarkerHandle, MarkerIcon, MarkerOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Side of the square canvas the resizer icon is drawn into.
pub const RESIZER_ICON_PX: u32 = 120;

/// Outcome of [`GeofenceCircle::on_marker_moved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerMoveResult {
    /// The center marker moved; the circle followed.
    Moved,
    /// The resizer moved within bounds; the radius was updated.
    RadiusChange,
    /// The resizer moved inside `min_radius`; nothing changed.
    MinRadius,
    /// The resizer moved beyond `max_radius`; nothing changed.
    MaxRadius,
    /// The marker does not belong to this geofence.
    None,
}

impl MarkerMoveResult {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Moved => "moved",
            Self::RadiusChange => "radius_change",
            Self::MinRadius => "min_radius",
            Self::MaxRadius => "max_radius",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    Center,
    Resizer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Built,
    Plotted,
    Removed,
}

#[derive(Debug, Default)]
struct Visuals {
    markers: Vec<(MarkerHandle, MarkerRole)>,
    circle: Option<CircleHandle>,
}

impl Visuals {
    fn marker(&self, role: MarkerRole) -> Option<MarkerHandle> {
        self.markers
            .iter()
            .find(|(_, candidate)| *candidate == role)
            .map(|(handle, _)| *handle)
    }

    fn role_of(&self, marker: MarkerHandle) -> Option<MarkerRole> {
        self.markers
            .iter()
            .find(|(handle, _)| handle.id() == marker.id())
            .map(|(_, role)| *role)
    }
}

/// Serializable view of a geofence's geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceSnapshot {
    pub circle_id: CircleId,
    pub center: LatLng,
    pub radius_m: f64,
    pub min_radius_m: Option<f64>,
    pub max_radius_m: Option<f64>,
    pub enabled: bool,
    pub plotted: bool,
}

/// A draggable circle on a map: center marker, resize handle and overlay.
///
/// Built with [`Builder`], materialized with [`plot`](Self::plot), and kept
/// consistent by feeding drag-end events into
/// [`on_marker_moved`](Self::on_marker_moved). Every operation touching
/// visuals borrows the surface, so one surface can host many geofences.
pub struct GeofenceCircle {
    circle_id: CircleId,
    center: LatLng,
    radius_m: f64,
    options: GeofenceOptions,
    icons: Option<Arc<dyn IconSource>>,
    visuals: Visuals,
    lifecycle: Lifecycle,
}

impl GeofenceCircle {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Builder pre-filled with the configuration of `existing`, without its
    /// visuals.
    pub fn new_builder(existing: &GeofenceCircle) -> Builder {
        Builder::from_circle(existing)
    }

    pub(crate) fn from_parts(
        circle_id: CircleId,
        center: LatLng,
        radius_m: f64,
        options: GeofenceOptions,
        icons: Option<Arc<dyn IconSource>>,
    ) -> Self {
        Self {
            circle_id,
            center,
            radius_m,
            options,
            icons,
            visuals: Visuals::default(),
            lifecycle: Lifecycle::Built,
        }
    }

    /// Adds the center marker, the resizer marker and the circle overlay to
    /// `surface`.
    ///
    /// Fails with `Conflict` when the circle is already plotted or was
    /// removed.
    pub fn plot<S>(&mut self, surface: &mut S) -> GfmResult<()>
    where
        S: MapSurface + ?Sized,
    {
        match self.lifecycle {
            Lifecycle::Built => {}
            Lifecycle::Plotted => {
                return Err(GfmError::conflict(format!(
                    "geofence {} is already plotted",
                    self.circle_id
                )));
            }
            Lifecycle::Removed => {
                return Err(GfmError::conflict(format!(
                    "geofence {} was removed and cannot be plotted again",
                    self.circle_id
                )));
            }
        }

        let center_marker = surface.add_marker(
            &MarkerOptions::new(self.center)
                .flat(true)
                .anchor(self.options.center_anchor)
                .draggable(self.options.enabled)
                .icon(self.center_marker_icon()),
        );
        self.visuals.markers.push((center_marker, MarkerRole::Center));

        let resizer_marker = surface.add_marker(
            &MarkerOptions::new(to_radius_lat_lng(self.center, self.radius_m))
                .anchor(self.options.resizer_anchor)
                .draggable(self.options.enabled)
                .icon(self.resizer_marker_icon()),
        );
        self.visuals
            .markers
            .push((resizer_marker, MarkerRole::Resizer));

        self.visuals.circle = Some(surface.add_circle(&CircleOptions {
            center: self.center,
            radius_m: self.radius_m,
            stroke_width: self.options.stroke_width,
            stroke_color: self.options.stroke_color,
            fill_color: self.options.fill_color,
        }));

        self.lifecycle = Lifecycle::Plotted;
        telemetry::record_plot();
        tracing::debug!(
            circle_id = %self.circle_id,
            center = %self.center,
            radius_m = self.radius_m,
            "geofence plotted"
        );
        Ok(())
    }

    /// Reacts to a drag of `marker` that the surface already applied.
    ///
    /// The center marker drags the circle along; the resizer changes the
    /// radius unless the implied radius breaks a bound, in which case nothing
    /// changes and the caller is expected to snap the handle back (see
    /// [`restore_resizer`](Self::restore_resizer)). Markers of other
    /// geofences yield [`MarkerMoveResult::None`].
    pub fn on_marker_moved<S>(
        &mut self,
        surface: &mut S,
        marker: MarkerHandle,
    ) -> MarkerMoveResult
    where
        S: MapSurface + ?Sized,
    {
        let result = match self.visuals.role_of(marker) {
            Some(MarkerRole::Center) => match surface.marker_position(marker) {
                Some(position) => {
                    self.on_center_updated(surface, position);
                    MarkerMoveResult::Moved
                }
                None => MarkerMoveResult::None,
            },
            Some(MarkerRole::Resizer) => self.on_resizer_moved(surface, marker),
            None => return MarkerMoveResult::None,
        };

        telemetry::record_move(result);
        tracing::debug!(
            circle_id = %self.circle_id,
            result = result.as_str(),
            radius_m = self.radius_m,
            "geofence marker moved"
        );
        result
    }

    fn on_resizer_moved<S>(&mut self, surface: &mut S, marker: MarkerHandle) -> MarkerMoveResult
    where
        S: MapSurface + ?Sized,
    {
        let Some(position) = surface.marker_position(marker) else {
            return MarkerMoveResult::None;
        };
        let center = self
            .visuals
            .marker(MarkerRole::Center)
            .and_then(|center_marker| surface.marker_position(center_marker))
            .unwrap_or(self.center);
        let new_radius = to_radius_meters(center, position);

        if self
            .options
            .min_radius_m
            .is_some_and(|min| new_radius < min)
        {
            return MarkerMoveResult::MinRadius;
        }
        if self
            .options
            .max_radius_m
            .is_some_and(|max| new_radius > max)
        {
            return MarkerMoveResult::MaxRadius;
        }

        match self.set_radius(surface, new_radius) {
            Ok(()) => MarkerMoveResult::RadiusChange,
            // A handle dropped onto the center implies no circle at all.
            Err(_) => MarkerMoveResult::MinRadius,
        }
    }

    /// Moves the overlay and the resizer to follow a new center; the radius
    /// is kept.
    pub fn on_center_updated<S>(&mut self, surface: &mut S, center: LatLng)
    where
        S: MapSurface + ?Sized,
    {
        self.center = center;
        if let Some(circle) = self.visuals.circle {
            surface.set_circle_center(circle, center);
        }
        if let Some(resizer) = self.visuals.marker(MarkerRole::Resizer) {
            surface.set_marker_position(resizer, to_radius_lat_lng(center, self.radius_m));
        }
    }

    pub fn set_center<S>(&mut self, surface: &mut S, center: LatLng) -> GfmResult<()>
    where
        S: MapSurface + ?Sized,
    {
        if !center.is_finite() {
            return Err(GfmError::invalid_input(format!(
                "geofence center must be finite, got {center}"
            )));
        }
        if let Some(center_marker) = self.visuals.marker(MarkerRole::Center) {
            surface.set_marker_position(center_marker, center);
        }
        self.on_center_updated(surface, center);
        Ok(())
    }

    /// Sets the radius and updates the overlay and resizer if plotted.
    ///
    /// Rejects radii that are not finite, not positive, or longer than half
    /// the Earth's circumference.
    pub fn set_radius<S>(&mut self, surface: &mut S, radius_m: f64) -> GfmResult<()>
    where
        S: MapSurface + ?Sized,
    {
        if !is_valid_radius(radius_m) {
            return Err(GfmError::invalid_input(format!(
                "geofence radius must be in (0, {MAX_RADIUS_M}] meters, got {radius_m}"
            )));
        }
        self.radius_m = radius_m;
        if let Some(circle) = self.visuals.circle {
            surface.set_circle_radius(circle, radius_m);
        }
        self.restore_resizer(surface);
        Ok(())
    }

    /// Puts the resizer back on the circle edge.
    pub fn restore_resizer<S>(&self, surface: &mut S)
    where
        S: MapSurface + ?Sized,
    {
        if let Some(resizer) = self.visuals.marker(MarkerRole::Resizer) {
            surface.set_marker_position(resizer, to_radius_lat_lng(self.center, self.radius_m));
        }
    }

    /// Removes every visual this geofence added. Safe to call repeatedly and
    /// before [`plot`](Self::plot); the geofence cannot be plotted again.
    pub fn remove_area<S>(&mut self, surface: &mut S)
    where
        S: MapSurface + ?Sized,
    {
        if let Some(resizer) = self.visuals.marker(MarkerRole::Resizer) {
            surface.remove_marker(resizer);
        }
        if let Some(center_marker) = self.visuals.marker(MarkerRole::Center) {
            surface.remove_marker(center_marker);
        }
        if let Some(circle) = self.visuals.circle.take() {
            surface.remove_circle(circle);
        }
        self.visuals.markers.clear();

        if self.lifecycle != Lifecycle::Removed {
            self.lifecycle = Lifecycle::Removed;
            telemetry::record_removal();
            tracing::debug!(circle_id = %self.circle_id, "geofence removed");
        }
    }

    pub fn role_of(&self, marker: MarkerHandle) -> Option<MarkerRole> {
        self.visuals.role_of(marker)
    }

    pub fn circle_id(&self) -> CircleId {
        self.circle_id
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius_m
    }

    pub fn min_radius(&self) -> Option<f64> {
        self.options.min_radius_m
    }

    pub fn max_radius(&self) -> Option<f64> {
        self.options.max_radius_m
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn stroke_width(&self) -> f32 {
        self.options.stroke_width
    }

    pub fn stroke_color(&self) -> Color {
        self.options.stroke_color
    }

    pub fn fill_color(&self) -> Color {
        self.options.fill_color
    }

    pub fn is_plotted(&self) -> bool {
        self.lifecycle == Lifecycle::Plotted
    }

    pub fn options(&self) -> &GeofenceOptions {
        &self.options
    }

    pub fn icons(&self) -> Option<&Arc<dyn IconSource>> {
        self.icons.as_ref()
    }

    pub fn center_marker(&self) -> Option<MarkerHandle> {
        self.visuals.marker(MarkerRole::Center)
    }

    pub fn resizer_marker(&self) -> Option<MarkerHandle> {
        self.visuals.marker(MarkerRole::Resizer)
    }

    pub fn circle(&self) -> Option<CircleHandle> {
        self.visuals.circle
    }

    pub fn snapshot(&self) -> GeofenceSnapshot {
        GeofenceSnapshot {
            circle_id: self.circle_id,
            center: self.center,
            radius_m: self.radius_m,
            min_radius_m: self.options.min_radius_m,
            max_radius_m: self.options.max_radius_m,
            enabled: self.options.enabled,
            plotted: self.is_plotted(),
        }
    }

    fn center_marker_icon(&self) -> MarkerIcon {
        if let MarkerIcon::Bitmap(_) = self.options.center_bitmap {
            return self.options.center_bitmap.clone();
        }
        match self.options.center_icon {
            None | Some(IconId::LOCATION_PIN) => MarkerIcon::Default,
            Some(id) => self
                .resolve_icon(id)
                .map(|bitmap| {
                    MarkerIcon::Bitmap(Arc::new(icon::tint(&bitmap, self.options.center_color)))
                })
                .unwrap_or_default(),
        }
    }

    fn resizer_marker_icon(&self) -> MarkerIcon {
        match self.options.resizer_icon {
            None => MarkerIcon::Default,
            Some(id) => self
                .resolve_icon(id)
                .map(|bitmap| {
                    MarkerIcon::Bitmap(Arc::new(icon::fit_canvas(&bitmap, RESIZER_ICON_PX)))
                })
                .unwrap_or_default(),
        }
    }

    fn resolve_icon(&self, id: IconId) -> Option<Arc<RgbaImage>> {
        let Some(icons) = self.icons.as_ref() else {
            tracing::warn!(
                circle_id = %self.circle_id,
                icon = id.0,
                "no icon source, using surface default"
            );
            return None;
        };
        let resolved = icons.resolve(id);
        if resolved.is_none() {
            tracing::warn!(
                circle_id = %self.circle_id,
                icon = id.0,
                "icon not found, using surface default"
            );
        }
        resolved
    }
}

impl fmt::Debug for GeofenceCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeofenceCircle")
            .field("circle_id", &self.circle_id)
            .field("center", &self.center)
            .field("radius_m", &self.radius_m)
            .field("options", &self.options)
            .field("has_icons", &self.icons.is_some())
            .field("visuals", &self.visuals)
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

impl fmt::Display for GeofenceCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "center: {} radius: {}", self.center, self.radius_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfm_map::icon::{IconSet, RgbaImage};
    use gfm_map::{MemorySurface, SurfaceCall};

    const CENTER: LatLng = LatLng {
        latitude: 37.422,
        longitude: -122.084,
    };

    fn circle() -> GeofenceCircle {
        GeofenceCircle::builder()
            .center(CENTER)
            .radius(200.0)
            .enabled(true)
            .build()
            .unwrap()
    }

    #[test]
    fn plot_creates_three_visuals() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        geofence.plot(&mut surface).unwrap();

        assert!(geofence.is_plotted());
        assert_eq!(surface.marker_count(), 2);
        assert_eq!(surface.circle_count(), 1);

        let center_marker = surface.marker(geofence.center_marker().unwrap()).unwrap();
        assert_eq!(center_marker.position, CENTER);
        assert!(center_marker.draggable);
        assert!(center_marker.flat);

        let resizer = surface.marker(geofence.resizer_marker().unwrap()).unwrap();
        assert_eq!(resizer.position, to_radius_lat_lng(CENTER, 200.0));

        let overlay = surface.circle(geofence.circle().unwrap()).unwrap();
        assert_eq!(overlay.radius_m, 200.0);
        assert_eq!(overlay.stroke_width, geofence.stroke_width());
        assert_eq!(overlay.stroke_color, geofence.stroke_color());
        assert_eq!(overlay.fill_color, geofence.fill_color());
    }

    #[test]
    fn disabled_geofence_has_fixed_markers() {
        let mut surface = MemorySurface::new();
        let mut geofence = GeofenceCircle::builder().center(CENTER).build().unwrap();
        geofence.plot(&mut surface).unwrap();
        let center_marker = surface.marker(geofence.center_marker().unwrap()).unwrap();
        assert!(!center_marker.draggable);
    }

    #[test]
    fn plot_twice_is_a_conflict() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        geofence.plot(&mut surface).unwrap();
        let err = geofence.plot(&mut surface).unwrap_err();
        assert_eq!(err.code, gfm_core::ErrorCode::Conflict);
        assert_eq!(surface.marker_count(), 2);
    }

    #[test]
    fn plot_after_remove_is_a_conflict() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        geofence.plot(&mut surface).unwrap();
        geofence.remove_area(&mut surface);
        assert!(geofence.plot(&mut surface).is_err());
        assert_eq!(surface.marker_count(), 0);
    }

    #[test]
    fn mutations_before_plot_touch_no_visuals() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        let moved = LatLng::new(1.0, 1.0);
        geofence.set_center(&mut surface, moved).unwrap();
        geofence.set_radius(&mut surface, 75.0).unwrap();
        geofence.on_center_updated(&mut surface, moved);
        geofence.restore_resizer(&mut surface);

        assert!(surface.calls().is_empty());
        assert_eq!(geofence.center(), moved);
        assert_eq!(geofence.radius(), 75.0);
    }

    #[test]
    fn degenerate_radius_is_rejected() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        geofence.plot(&mut surface).unwrap();
        surface.clear_calls();

        for radius in [0.0, -5.0, f64::NAN, f64::INFINITY, 2.5e7] {
            assert!(geofence.set_radius(&mut surface, radius).is_err());
        }
        assert_eq!(geofence.radius(), 200.0);
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn non_finite_center_is_rejected() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        let bad = LatLng {
            latitude: f64::NAN,
            longitude: 0.0,
        };
        assert!(geofence.set_center(&mut surface, bad).is_err());
        assert_eq!(geofence.center(), CENTER);
    }

    #[test]
    fn set_radius_updates_overlay_and_resizer() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        geofence.plot(&mut surface).unwrap();
        geofence.set_radius(&mut surface, 320.0).unwrap();

        let overlay = surface.circle(geofence.circle().unwrap()).unwrap();
        assert_eq!(overlay.radius_m, 320.0);
        assert_eq!(
            surface.marker_position(geofence.resizer_marker().unwrap()),
            Some(to_radius_lat_lng(CENTER, 320.0))
        );
    }

    #[test]
    fn role_lookup_by_handle() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        geofence.plot(&mut surface).unwrap();
        let center_marker = geofence.center_marker().unwrap();
        let resizer = geofence.resizer_marker().unwrap();

        assert_eq!(geofence.role_of(center_marker), Some(MarkerRole::Center));
        assert_eq!(geofence.role_of(resizer), Some(MarkerRole::Resizer));
        assert_eq!(geofence.role_of(MarkerHandle::new()), None);
    }

    #[test]
    fn zero_length_drag_reports_min_radius() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        geofence.plot(&mut surface).unwrap();
        let resizer = geofence.resizer_marker().unwrap();
        surface.drag_marker(resizer, CENTER);

        let result = geofence.on_marker_moved(&mut surface, resizer);
        assert_eq!(result, MarkerMoveResult::MinRadius);
        assert_eq!(geofence.radius(), 200.0);
    }

    #[test]
    fn icons_resolve_through_icon_source() {
        let mut icons = IconSet::standard();
        icons.insert(IconId(7), RgbaImage::new(16, 16));
        let mut geofence = GeofenceCircle::builder()
            .center(CENTER)
            .center_icon(IconId(7))
            .icons(Arc::new(icons))
            .build()
            .unwrap();
        let mut surface = MemorySurface::new();
        geofence.plot(&mut surface).unwrap();

        let center_icon = &surface.marker(geofence.center_marker().unwrap()).unwrap().icon;
        match center_icon {
            MarkerIcon::Bitmap(bitmap) => assert_eq!(bitmap.dimensions(), (16, 16)),
            MarkerIcon::Default => panic!("center icon should be a bitmap"),
        }
        let resizer_icon = &surface.marker(geofence.resizer_marker().unwrap()).unwrap().icon;
        match resizer_icon {
            MarkerIcon::Bitmap(bitmap) => {
                assert_eq!(bitmap.dimensions(), (RESIZER_ICON_PX, RESIZER_ICON_PX))
            }
            MarkerIcon::Default => panic!("resizer icon should be a bitmap"),
        }
    }

    #[test]
    fn location_pin_center_uses_surface_default() {
        let mut geofence = GeofenceCircle::builder()
            .center(CENTER)
            .icons(Arc::new(IconSet::standard()))
            .build()
            .unwrap();
        let mut surface = MemorySurface::new();
        geofence.plot(&mut surface).unwrap();
        let center_icon = &surface.marker(geofence.center_marker().unwrap()).unwrap().icon;
        assert_eq!(*center_icon, MarkerIcon::Default);
    }

    #[test]
    fn missing_icons_fall_back_to_default() {
        let mut geofence = GeofenceCircle::builder()
            .center(CENTER)
            .center_icon(IconId(42))
            .resizer_icon(IconId(43))
            .icons(Arc::new(IconSet::new()))
            .build()
            .unwrap();
        let mut surface = MemorySurface::new();
        geofence.plot(&mut surface).unwrap();
        for marker in [geofence.center_marker(), geofence.resizer_marker()] {
            assert_eq!(surface.marker(marker.unwrap()).unwrap().icon, MarkerIcon::Default);
        }
    }

    #[test]
    fn icons_without_source_fall_back_to_default() {
        let mut geofence = GeofenceCircle::builder()
            .center(CENTER)
            .center_icon(IconId(7))
            .build()
            .unwrap();
        assert!(geofence.icons().is_none());
        let mut surface = MemorySurface::new();
        geofence.plot(&mut surface).unwrap();
        for marker in [geofence.center_marker(), geofence.resizer_marker()] {
            assert_eq!(surface.marker(marker.unwrap()).unwrap().icon, MarkerIcon::Default);
        }
    }

    #[test]
    fn center_bitmap_wins_over_icon_id() {
        let bitmap = Arc::new(RgbaImage::new(3, 5));
        let mut geofence = GeofenceCircle::builder()
            .center(CENTER)
            .center_icon(IconId(7))
            .center_bitmap(bitmap.clone())
            .build()
            .unwrap();
        let mut surface = MemorySurface::new();
        geofence.plot(&mut surface).unwrap();
        assert_eq!(
            surface.marker(geofence.center_marker().unwrap()).unwrap().icon,
            MarkerIcon::Bitmap(bitmap)
        );
    }

    #[test]
    fn display_and_snapshot() {
        let geofence = circle();
        assert_eq!(
            geofence.to_string(),
            "center: lat/lng: (37.422,-122.084) radius: 200"
        );
        let snapshot = geofence.snapshot();
        assert_eq!(snapshot.radius_m, 200.0);
        assert!(!snapshot.plotted);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["circle_id"], 0);
    }

    #[test]
    fn remove_before_plot_issues_no_calls() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        geofence.remove_area(&mut surface);
        assert!(surface.calls().is_empty());
        assert!(!geofence.is_plotted());
    }

    #[test]
    fn center_move_repositions_resizer() {
        let mut surface = MemorySurface::new();
        let mut geofence = circle();
        geofence.plot(&mut surface).unwrap();
        surface.clear_calls();

        let center_marker = geofence.center_marker().unwrap();
        let resizer = geofence.resizer_marker().unwrap();
        let circle = geofence.circle().unwrap();
        let moved = LatLng::new(37.5, -122.0);
        surface.drag_marker(center_marker, moved);

        assert_eq!(
            geofence.on_marker_moved(&mut surface, center_marker),
            MarkerMoveResult::Moved
        );
        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::SetCircleCenter(circle, moved),
                SurfaceCall::SetMarkerPosition(resizer, to_radius_lat_lng(moved, 200.0)),
            ]
        );
    }
}
