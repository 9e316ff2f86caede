//! Editable geofence circle: a center marker, a resize handle and a circle
//! overlay kept consistent on a [`MapSurface`](gfm_map::MapSurface).

pub mod builder;
pub mod circle;
pub mod options;
pub mod telemetry;

pub use builder::Builder;
pub use circle::{GeofenceCircle, GeofenceSnapshot, MarkerMoveResult, MarkerRole};
pub use options::GeofenceOptions;
pub use telemetry::describe_metrics;
