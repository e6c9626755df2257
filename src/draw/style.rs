//! Style snapshot applied to shapes when they are created.

use super::color::{BLACK, Color, WHITE};
use serde::{Deserialize, Serialize};

/// Fill, stroke and thickness captured at the moment a shape is created.
///
/// Changing the current style afterwards never touches shapes that already
/// exist; each shape keeps its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingParameters {
    /// Interior color (ignored for lines)
    pub fill: Color,
    /// Outline color
    pub stroke: Color,
    /// Outline width in canvas units
    pub stroke_thickness: f64,
}

impl Default for DrawingParameters {
    fn default() -> Self {
        Self {
            fill: WHITE,
            stroke: BLACK,
            stroke_thickness: 1.0,
        }
    }
}
