pub mod color;
pub mod error;
pub mod ids;

pub use color::{hsv_to_color, Color};
pub use error::{ErrorCode, GfmError, GfmResult};
pub use ids::{CircleId, HandleId};
