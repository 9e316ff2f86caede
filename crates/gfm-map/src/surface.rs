use crate::handle::{CircleHandle, MarkerHandle};
use crate::options::{CircleOptions, MarkerOptions};
use gfm_geo::LatLng;

/// The map widget a geofence draws on.
///
/// Visuals are owned by the surface; callers only hold handles. Operations on
/// a handle the surface no longer knows are ignored.
pub trait MapSurface {
    fn add_marker(&mut self, options: &MarkerOptions) -> MarkerHandle;

    fn add_circle(&mut self, options: &CircleOptions) -> CircleHandle;

    fn marker_position(&self, marker: MarkerHandle) -> Option<LatLng>;

    fn set_marker_position(&mut self, marker: MarkerHandle, position: LatLng);

    fn remove_marker(&mut self, marker: MarkerHandle);

    fn set_circle_center(&mut self, circle: CircleHandle, center: LatLng);

    fn set_circle_radius(&mut self, circle: CircleHandle, radius_m: f64);

    fn remove_circle(&mut self, circle: CircleHandle);
}
