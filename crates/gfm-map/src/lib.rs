pub mod handle;
pub mod icon;
pub mod memory;
pub mod options;
pub mod surface;

pub use handle::{CircleHandle, MarkerHandle};
pub use icon::{IconId, IconSet, IconSource, RgbaImage};
pub use memory::{MemorySurface, SurfaceCall};
pub use options::{Anchor, CircleOptions, MarkerIcon, MarkerOptions};
pub use surface::MapSurface;
