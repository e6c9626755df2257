//! Holds the shape under construction and the last pointer positions.

use crate::draw::{Shape, ShapeType, strategy};
use crate::util::Point;

/// Tracks the shape currently being built and routes pointer positions to
/// the strategy for the active shape type.
///
/// It performs no sequencing of its own; the interaction state machine
/// decides when each call happens.
#[derive(Debug, Default)]
pub struct PositioningCoordinator {
    /// Last pointer-down position
    pub initial_point: Option<Point>,
    /// Last pointer-move position while resizing
    pub end_point: Option<Point>,
    selected_shape: Option<Shape>,
}

impl PositioningCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shape under construction, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_shape.as_ref()
    }

    /// Makes `shape` the shape under construction.
    ///
    /// Any previous shape is handed back so the caller can decide its fate.
    pub fn begin(&mut self, shape: Shape) -> Option<Shape> {
        self.selected_shape.replace(shape)
    }

    /// Releases the shape under construction.
    pub fn take_shape(&mut self) -> Option<Shape> {
        self.selected_shape.take()
    }

    /// Applies the seed step of `shape_type`'s strategy at `initial_point`.
    pub fn add_initial_point_to_shape(&mut self, shape_type: ShapeType) -> bool {
        strategy::add_initial_point(
            shape_type,
            self.selected_shape.as_mut(),
            self.initial_point,
        )
    }

    /// Applies the grow step of `shape_type`'s strategy at `end_point`.
    pub fn add_end_point_to_shape(&mut self, shape_type: ShapeType) -> bool {
        strategy::add_end_point(shape_type, self.selected_shape.as_mut(), self.end_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawingParameters, Geometry, create_shape};

    #[test]
    fn calls_without_shape_or_points_do_nothing() {
        let mut coordinator = PositioningCoordinator::new();
        assert!(!coordinator.add_initial_point_to_shape(ShapeType::Line));

        coordinator.begin(create_shape(ShapeType::Line, &DrawingParameters::default()).unwrap());
        assert!(!coordinator.add_initial_point_to_shape(ShapeType::Line));
        assert!(!coordinator.add_end_point_to_shape(ShapeType::Line));
        assert!(coordinator.selected_shape().unwrap().geometry.is_empty());
    }

    #[test]
    fn routes_points_to_the_shape_under_construction() {
        let mut coordinator = PositioningCoordinator::new();
        coordinator
            .begin(create_shape(ShapeType::Ellipse, &DrawingParameters::default()).unwrap());

        coordinator.initial_point = Some(Point::new(10.0, 10.0));
        assert!(coordinator.add_initial_point_to_shape(ShapeType::Ellipse));
        coordinator.end_point = Some(Point::new(4.0, 30.0));
        assert!(coordinator.add_end_point_to_shape(ShapeType::Ellipse));

        let shape = coordinator.take_shape().unwrap();
        assert_eq!(shape.geometry, Geometry::Ellipse {
            start: Point::new(10.0, 10.0),
            end: Point::new(4.0, 30.0),
        });
        assert!(coordinator.selected_shape().is_none());
    }

    #[test]
    fn begin_returns_the_replaced_shape() {
        let mut coordinator = PositioningCoordinator::new();
        let params = DrawingParameters::default();
        assert!(coordinator.begin(create_shape(ShapeType::Line, &params).unwrap()).is_none());
        let previous = coordinator.begin(create_shape(ShapeType::Polygon, &params).unwrap());
        assert!(matches!(
            previous.map(|s| s.geometry),
            Some(Geometry::Line { .. })
        ));
    }
}
