//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{DrawingParameters, ShapeType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the shape type and style selected when a session starts. The
/// presentation layer can change all of them at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Shape type selected at startup (none, line, rectangle, ellipse, polygon, polyline, pencil)
    #[serde(default = "default_shape")]
    pub default_shape: ShapeType,

    /// Outline color - a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Interior color for rectangles, ellipses, polygons and polylines
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Outline width in canvas units (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_thickness")]
    pub stroke_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_shape: default_shape(),
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
            stroke_thickness: default_stroke_thickness(),
        }
    }
}

impl DrawingConfig {
    /// Resolves the configured style into the snapshot applied to new shapes.
    pub fn parameters(&self) -> DrawingParameters {
        DrawingParameters {
            fill: self.fill_color.to_color(),
            stroke: self.stroke_color.to_color(),
            stroke_thickness: self.stroke_thickness,
        }
    }
}

/// Canvas settings used when rendering to an image.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Image width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Image height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 4],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background_color: default_background_color(),
        }
    }
}

/// Where rendered images are written when no explicit path is given.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Directory for rendered images (supports ~ for home directory)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template (chrono format specifiers, without extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_shape() -> ShapeType {
    ShapeType::Line
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_stroke_thickness() -> f64 {
    1.0
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_save_directory() -> String {
    "~/Pictures/Painter".to_string()
}

fn default_filename_template() -> String {
    "painter_%Y-%m-%d_%H%M%S".to_string()
}
