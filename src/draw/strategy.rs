//! Per-shape construction strategies.
//!
//! Each shape type knows two things: how to seed its geometry from the first
//! press, and how to grow it from later pointer positions. Both live here as
//! plain functions collected into a fixed dispatch table keyed by
//! [`ShapeType`].

use super::shape::{Geometry, Shape, ShapeType};
use crate::util::Point;

/// Seed/grow pair for one shape type.
///
/// Each function returns `false` when the geometry variant is not one it
/// knows how to handle, leaving the geometry untouched.
pub struct Strategy {
    pub add_initial_point: fn(&mut Geometry, Point) -> bool,
    pub add_end_point: fn(&mut Geometry, Point) -> bool,
}

static LINE: Strategy = Strategy {
    add_initial_point: seed_two_point,
    add_end_point: move_line_end,
};

static BOXED: Strategy = Strategy {
    add_initial_point: seed_two_point,
    add_end_point: resize_box,
};

static VERTICES: Strategy = Strategy {
    add_initial_point: append_vertex,
    add_end_point: append_vertex,
};

/// Looks up the strategy for a shape type. `None` has no strategy.
pub fn strategy_for(shape_type: ShapeType) -> Option<&'static Strategy> {
    match shape_type {
        ShapeType::None => None,
        ShapeType::Line => Some(&LINE),
        ShapeType::Rectangle | ShapeType::Ellipse => Some(&BOXED),
        ShapeType::Polygon | ShapeType::Polyline | ShapeType::Pencil => Some(&VERTICES),
    }
}

/// Establishes the starting geometry of `shape` at `point`.
///
/// Does nothing when the shape or point is missing, when `shape_type` has no
/// strategy, or when the shape's geometry does not match the strategy.
/// Returns whether the geometry changed.
pub fn add_initial_point(
    shape_type: ShapeType,
    shape: Option<&mut Shape>,
    point: Option<Point>,
) -> bool {
    dispatch(shape_type, shape, point, |s| s.add_initial_point)
}

/// Updates `shape` to follow the pointer at `point`.
///
/// Same guards as [`add_initial_point`].
pub fn add_end_point(shape_type: ShapeType, shape: Option<&mut Shape>, point: Option<Point>) -> bool {
    dispatch(shape_type, shape, point, |s| s.add_end_point)
}

fn dispatch(
    shape_type: ShapeType,
    shape: Option<&mut Shape>,
    point: Option<Point>,
    pick: impl FnOnce(&Strategy) -> fn(&mut Geometry, Point) -> bool,
) -> bool {
    let (Some(shape), Some(point)) = (shape, point) else {
        return false;
    };
    let Some(strategy) = strategy_for(shape_type) else {
        return false;
    };
    pick(strategy)(&mut shape.geometry, point)
}

fn seed_two_point(geometry: &mut Geometry, point: Point) -> bool {
    match geometry {
        Geometry::Line { start, end }
        | Geometry::Rectangle { start, end }
        | Geometry::Ellipse { start, end } => {
            *start = point;
            *end = point;
            true
        }
        _ => false,
    }
}

fn move_line_end(geometry: &mut Geometry, point: Point) -> bool {
    if let Geometry::Line { end, .. } = geometry {
        *end = point;
        true
    } else {
        false
    }
}

// The box is re-derived from `start` and `end` on read, so any drag
// direction keeps a non-negative size.
fn resize_box(geometry: &mut Geometry, point: Point) -> bool {
    match geometry {
        Geometry::Rectangle { end, .. } | Geometry::Ellipse { end, .. } => {
            *end = point;
            true
        }
        _ => false,
    }
}

fn append_vertex(geometry: &mut Geometry, point: Point) -> bool {
    match geometry {
        Geometry::Polygon { points } | Geometry::Polyline { points } => {
            points.push(point);
            true
        }
        _ => false,
    }
}
