//! Builds empty shapes for a shape type.

use super::shape::{Geometry, Shape, ShapeType};
use super::style::DrawingParameters;
use crate::util::Point;

/// Creates an empty shape of the given type carrying a copy of `params`.
///
/// Two-point shapes start collapsed at the origin; polygons and polylines
/// start without vertices. Pencil strokes are polylines. Returns `None` for
/// [`ShapeType::None`].
pub fn create_shape(shape_type: ShapeType, params: &DrawingParameters) -> Option<Shape> {
    let geometry = match shape_type {
        ShapeType::None => return None,
        ShapeType::Line => Geometry::Line {
            start: Point::ORIGIN,
            end: Point::ORIGIN,
        },
        ShapeType::Rectangle => Geometry::Rectangle {
            start: Point::ORIGIN,
            end: Point::ORIGIN,
        },
        ShapeType::Ellipse => Geometry::Ellipse {
            start: Point::ORIGIN,
            end: Point::ORIGIN,
        },
        ShapeType::Polygon => Geometry::Polygon { points: Vec::new() },
        ShapeType::Polyline | ShapeType::Pencil => Geometry::Polyline { points: Vec::new() },
    };

    log::debug!("Created empty {shape_type} shape");
    Some(Shape::new(geometry, *params))
}
