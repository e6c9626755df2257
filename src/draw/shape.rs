//! Shape definitions: shape types, geometry and bounding boxes.

use super::style::DrawingParameters;
use crate::util::{Point, Rect};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of shape the user has selected for drawing.
///
/// Determines which construction strategy runs and which display collection
/// a finished shape ends up in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeType {
    /// Nothing selected; pointer events are ignored
    #[default]
    None,
    /// Straight segment, press-drag-release
    Line,
    /// Axis-aligned rectangle, press-drag-release
    Rectangle,
    /// Ellipse inscribed in the dragged box, press-drag-release
    Ellipse,
    /// Closed outline, one vertex per click, double-click to finish
    Polygon,
    /// Open outline, one vertex per click, double-click to finish
    Polyline,
    /// Freehand stroke, every motion sample becomes a vertex
    Pencil,
}

/// Whether a shape type completes on one press-drag-release or after many clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMultiplicity {
    None,
    Single,
    Multiple,
}

impl ShapeType {
    /// Every selectable shape type, in toolbar order.
    pub const ALL: [ShapeType; 6] = [
        ShapeType::Line,
        ShapeType::Rectangle,
        ShapeType::Ellipse,
        ShapeType::Polygon,
        ShapeType::Polyline,
        ShapeType::Pencil,
    ];

    pub fn click_multiplicity(self) -> ClickMultiplicity {
        match self {
            ShapeType::Line | ShapeType::Rectangle | ShapeType::Ellipse | ShapeType::Pencil => {
                ClickMultiplicity::Single
            }
            ShapeType::Polygon | ShapeType::Polyline => ClickMultiplicity::Multiple,
            ShapeType::None => ClickMultiplicity::None,
        }
    }

    /// Returns true unless the type is [`ShapeType::None`].
    pub fn is_selected(self) -> bool {
        self != ShapeType::None
    }

    /// Display collection that receives shapes of this type.
    pub fn bucket(self) -> Option<ShapeBucket> {
        match self {
            ShapeType::None => None,
            ShapeType::Line => Some(ShapeBucket::Lines),
            ShapeType::Rectangle => Some(ShapeBucket::Rectangles),
            ShapeType::Ellipse => Some(ShapeBucket::Ellipses),
            ShapeType::Polygon => Some(ShapeBucket::Polygons),
            ShapeType::Polyline | ShapeType::Pencil => Some(ShapeBucket::Polylines),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeType::None => "none",
            ShapeType::Line => "line",
            ShapeType::Rectangle => "rectangle",
            ShapeType::Ellipse => "ellipse",
            ShapeType::Polygon => "polygon",
            ShapeType::Polyline => "polyline",
            ShapeType::Pencil => "pencil",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        ShapeType::ALL
            .into_iter()
            .chain([ShapeType::None])
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| {
                format!(
                    "unknown shape '{s}' (expected one of: none, line, rectangle, ellipse, polygon, polyline, pencil)"
                )
            })
    }
}

/// One of the five display collections shapes are committed to.
///
/// Declaration order is the compositing order: later buckets render on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeBucket {
    Lines,
    Rectangles,
    Ellipses,
    Polygons,
    Polylines,
}

impl ShapeBucket {
    pub const ALL: [ShapeBucket; 5] = [
        ShapeBucket::Lines,
        ShapeBucket::Rectangles,
        ShapeBucket::Ellipses,
        ShapeBucket::Polygons,
        ShapeBucket::Polylines,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeBucket::Lines => "Lines",
            ShapeBucket::Rectangles => "Rectangles",
            ShapeBucket::Ellipses => "Ellipses",
            ShapeBucket::Polygons => "Polygons",
            ShapeBucket::Polylines => "Polylines",
        }
    }
}

/// Geometry of a shape, one variant per primitive.
///
/// Two-point primitives keep the corner where the drag started (`start`) and
/// the corner following the pointer (`end`). Vertex primitives keep their
/// points in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Line { start: Point, end: Point },
    Rectangle { start: Point, end: Point },
    Ellipse { start: Point, end: Point },
    Polygon { points: Vec<Point> },
    Polyline { points: Vec<Point> },
}

impl Geometry {
    pub fn bucket(&self) -> ShapeBucket {
        match self {
            Geometry::Line { .. } => ShapeBucket::Lines,
            Geometry::Rectangle { .. } => ShapeBucket::Rectangles,
            Geometry::Ellipse { .. } => ShapeBucket::Ellipses,
            Geometry::Polygon { .. } => ShapeBucket::Polygons,
            Geometry::Polyline { .. } => ShapeBucket::Polylines,
        }
    }

    /// Box spanned by the geometry itself, without stroke.
    ///
    /// Rectangles and ellipses report the box re-derived from their two
    /// corners. Returns `None` for vertex shapes with no points yet.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Geometry::Line { start, end }
            | Geometry::Rectangle { start, end }
            | Geometry::Ellipse { start, end } => Some(Rect::from_corners(*start, *end)),
            Geometry::Polygon { points } | Geometry::Polyline { points } => {
                Rect::enclosing(points)
            }
        }
    }

    /// Vertices of a polygon or polyline; empty for two-point shapes.
    pub fn vertices(&self) -> &[Point] {
        match self {
            Geometry::Polygon { points } | Geometry::Polyline { points } => points,
            _ => &[],
        }
    }

    /// Whether the geometry still covers no area and no length.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Line { start, end }
            | Geometry::Rectangle { start, end }
            | Geometry::Ellipse { start, end } => start == end,
            Geometry::Polygon { points } | Geometry::Polyline { points } => points.is_empty(),
        }
    }
}

/// A drawable primitive together with the style it was created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub geometry: Geometry,
    pub style: DrawingParameters,
}

impl Shape {
    pub fn new(geometry: Geometry, style: DrawingParameters) -> Self {
        Self { geometry, style }
    }

    pub fn bucket(&self) -> ShapeBucket {
        self.geometry.bucket()
    }

    /// Returns the axis-aligned bounding box, expanded to cover stroke width.
    ///
    /// Suitable for damage hints in a presentation layer. Returns `None` only
    /// when the shape has no points yet.
    pub fn bounding_box(&self) -> Option<Rect> {
        let padding = (self.style.stroke_thickness / 2.0).max(0.0);
        self.geometry.bounds().map(|rect| rect.inflate(padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    fn style(thickness: f64) -> DrawingParameters {
        DrawingParameters {
            fill: BLUE,
            stroke: RED,
            stroke_thickness: thickness,
        }
    }

    #[test]
    fn click_multiplicity_depends_only_on_shape_type() {
        use ClickMultiplicity::*;
        let expected = [
            (ShapeType::None, None),
            (ShapeType::Line, Single),
            (ShapeType::Rectangle, Single),
            (ShapeType::Ellipse, Single),
            (ShapeType::Pencil, Single),
            (ShapeType::Polygon, Multiple),
            (ShapeType::Polyline, Multiple),
        ];
        for (shape_type, multiplicity) in expected {
            assert_eq!(shape_type.click_multiplicity(), multiplicity, "{shape_type}");
        }
    }

    #[test]
    fn pencil_strokes_share_the_polyline_bucket() {
        assert_eq!(ShapeType::Pencil.bucket(), Some(ShapeBucket::Polylines));
        assert_eq!(ShapeType::Polyline.bucket(), Some(ShapeBucket::Polylines));
        assert_eq!(ShapeType::None.bucket(), None);
    }

    #[test]
    fn shape_type_parses_case_insensitively() {
        assert_eq!("Polygon".parse::<ShapeType>().unwrap(), ShapeType::Polygon);
        assert_eq!(" pencil ".parse::<ShapeType>().unwrap(), ShapeType::Pencil);
        assert!("triangle".parse::<ShapeType>().is_err());
        for shape_type in ShapeType::ALL {
            assert_eq!(shape_type.to_string().parse::<ShapeType>(), Ok(shape_type));
        }
    }

    #[test]
    fn rectangle_bounding_box_covers_stroke() {
        let shape = Shape::new(
            Geometry::Rectangle {
                start: Point::new(70.0, 90.0),
                end: Point::new(50.0, 40.0),
            },
            style(4.0),
        );

        let rect = shape.bounding_box().expect("rectangle should have bounds");
        assert_eq!(rect, Rect {
            x: 48.0,
            y: 38.0,
            width: 24.0,
            height: 54.0
        });
    }

    #[test]
    fn empty_polyline_has_no_bounds() {
        let shape = Shape::new(Geometry::Polyline { points: Vec::new() }, style(2.0));
        assert!(shape.bounding_box().is_none());
        assert!(shape.geometry.is_empty());
        assert_eq!(shape.bucket(), ShapeBucket::Polylines);
    }

    #[test]
    fn vertices_are_only_reported_for_vertex_shapes() {
        let line = Geometry::Line {
            start: Point::ORIGIN,
            end: Point::new(1.0, 1.0),
        };
        assert!(line.vertices().is_empty());
        assert!(!line.is_empty());

        let polygon = Geometry::Polygon {
            points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
        };
        assert_eq!(polygon.vertices().len(), 2);
    }
}
