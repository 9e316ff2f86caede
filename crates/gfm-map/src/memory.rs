use crate::handle::{CircleHandle, MarkerHandle};
use crate::options::{CircleOptions, MarkerOptions};
use crate::surface::MapSurface;
use gfm_core::HandleId;
use gfm_geo::LatLng;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    AddMarker(MarkerHandle),
    AddCircle(CircleHandle),
    SetMarkerPosition(MarkerHandle, LatLng),
    RemoveMarker(MarkerHandle),
    SetCircleCenter(CircleHandle, LatLng),
    SetCircleRadius(CircleHandle, f64),
    RemoveCircle(CircleHandle),
}

/// A [`MapSurface`] that keeps its visuals in memory and records every call.
///
/// Used headless (tests, the playground) where no real map widget exists.
#[derive(Debug, Default)]
pub struct MemorySurface {
    markers: HashMap<HandleId, MarkerOptions>,
    circles: HashMap<HandleId, CircleOptions>,
    calls: Vec<SurfaceCall>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker(&self, marker: MarkerHandle) -> Option<&MarkerOptions> {
        self.markers.get(&marker.id())
    }

    pub fn circle(&self, circle: CircleHandle) -> Option<&CircleOptions> {
        self.circles.get(&circle.id())
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn removal_count(&self, id: HandleId) -> usize {
        self.calls
            .iter()
            .filter(|call| match call {
                SurfaceCall::RemoveMarker(marker) => marker.id() == id,
                SurfaceCall::RemoveCircle(circle) => circle.id() == id,
                _ => false,
            })
            .count()
    }

    /// Moves a marker the way a user drag would: the position changes, nothing
    /// is recorded, and non-draggable markers stay put.
    pub fn drag_marker(&mut self, marker: MarkerHandle, position: LatLng) -> bool {
        match self.markers.get_mut(&marker.id()) {
            Some(options) if options.draggable => {
                options.position = position;
                true
            }
            _ => false,
        }
    }
}

impl MapSurface for MemorySurface {
    fn add_marker(&mut self, options: &MarkerOptions) -> MarkerHandle {
        let handle = MarkerHandle::new();
        self.markers.insert(handle.id(), options.clone());
        self.calls.push(SurfaceCall::AddMarker(handle));
        handle
    }

    fn add_circle(&mut self, options: &CircleOptions) -> CircleHandle {
        let handle = CircleHandle::new();
        self.circles.insert(handle.id(), options.clone());
        self.calls.push(SurfaceCall::AddCircle(handle));
        handle
    }

    fn marker_position(&self, marker: MarkerHandle) -> Option<LatLng> {
        self.markers.get(&marker.id()).map(|options| options.position)
    }

    fn set_marker_position(&mut self, marker: MarkerHandle, position: LatLng) {
        self.calls.push(SurfaceCall::SetMarkerPosition(marker, position));
        match self.markers.get_mut(&marker.id()) {
            Some(options) => options.position = position,
            None => tracing::trace!(marker = %marker, "position update for unknown marker"),
        }
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        self.calls.push(SurfaceCall::RemoveMarker(marker));
        self.markers.remove(&marker.id());
    }

    fn set_circle_center(&mut self, circle: CircleHandle, center: LatLng) {
        self.calls.push(SurfaceCall::SetCircleCenter(circle, center));
        if let Some(options) = self.circles.get_mut(&circle.id()) {
            options.center = center;
        }
    }

    fn set_circle_radius(&mut self, circle: CircleHandle, radius_m: f64) {
        self.calls.push(SurfaceCall::SetCircleRadius(circle, radius_m));
        if let Some(options) = self.circles.get_mut(&circle.id()) {
            options.radius_m = radius_m;
        }
    }

    fn remove_circle(&mut self, circle: CircleHandle) {
        self.calls.push(SurfaceCall::RemoveCircle(circle));
        self.circles.remove(&circle.id());
    }
}
