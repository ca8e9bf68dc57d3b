pub mod error;
pub mod geometry;
pub mod layout;
pub mod output;
mod wasm;

pub use error::{LayoutError, Result};
pub use geometry::{Axis, Point, Rectangle, Size};
pub use layout::{layout_cloud, CloudLayouter, LayoutConfig};
pub use wasm::{layout_cloud_json, TagCloud};
