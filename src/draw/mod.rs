//! Shape model, construction strategies and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`ShapeType`]: what the user picked in the toolbar
//! - [`Shape`]: a primitive with its geometry and [`DrawingParameters`]
//! - [`strategy`]: how each shape type is seeded and grown from pointer input
//! - [`DisplayCollections`]: the per-type lists finished shapes are committed to
//! - Rendering functions for Cairo-based output

pub mod collections;
pub mod color;
pub mod factory;
pub mod render;
pub mod shape;
pub mod strategy;
pub mod style;

// Re-export commonly used types at module level
pub use collections::{DisplayCollections, ShapeId};
pub use color::Color;
pub use factory::create_shape;
pub use render::{RenderError, render_collections, render_shape, render_to_png};
pub use shape::{ClickMultiplicity, Geometry, Shape, ShapeBucket, ShapeType};
pub use style::DrawingParameters;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
