//! Output types for rendering consumers.
//!
//! These structs are serialized to JSON and handed to whatever draws the
//! cloud. Rectangles are listed in placement order.

use crate::geometry::{Point, Rectangle};
use serde::Serialize;

/// Error information attached to a failed layout request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    /// Position of the offending size in the request, if one is to blame.
    pub index: Option<usize>,
}

/// A whole laid-out cloud
#[derive(Debug, Clone, Serialize)]
pub struct CloudOutput {
    pub center: Point,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rectangles: Vec<Rectangle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Rectangle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Result of placing a single rectangle
#[derive(Debug, Clone, Serialize)]
pub struct PlacementOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<Rectangle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}
