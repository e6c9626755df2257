use cairo::{Context, ImageSurface};
use painter::draw::{
    BLACK, DisplayCollections, DrawingParameters, Geometry, RED, Shape, TRANSPARENT, WHITE,
    render_collections, render_shape, render_to_png,
};
use painter::util::Point;
use tempfile::TempDir;

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn style() -> DrawingParameters {
    DrawingParameters {
        fill: WHITE,
        stroke: RED,
        stroke_thickness: 3.0,
    }
}

#[test]
fn every_geometry_renders_pixels() {
    let shapes = [
        Geometry::Line {
            start: Point::new(5.0, 5.0),
            end: Point::new(60.0, 40.0),
        },
        Geometry::Rectangle {
            start: Point::new(60.0, 50.0),
            end: Point::new(10.0, 10.0),
        },
        Geometry::Ellipse {
            start: Point::new(10.0, 10.0),
            end: Point::new(70.0, 40.0),
        },
        Geometry::Polygon {
            points: vec![
                Point::new(10.0, 10.0),
                Point::new(60.0, 10.0),
                Point::new(30.0, 50.0),
            ],
        },
        Geometry::Polyline {
            points: vec![Point::new(10.0, 10.0), Point::new(50.0, 45.0)],
        },
    ];

    for geometry in shapes {
        let (mut surface, ctx) = surface_with_context(80, 60);
        render_shape(&ctx, &Shape::new(geometry.clone(), style()));
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "{geometry:?} should render pixels"
        );
    }
}

#[test]
fn degenerate_shapes_render_nothing() {
    let invisible = DrawingParameters {
        fill: TRANSPARENT,
        stroke: BLACK,
        stroke_thickness: 2.0,
    };
    let shapes = [
        Shape::new(
            Geometry::Ellipse {
                start: Point::new(20.0, 20.0),
                end: Point::new(20.0, 40.0),
            },
            style(),
        ),
        Shape::new(Geometry::Polygon { points: Vec::new() }, style()),
        Shape::new(
            Geometry::Line {
                start: Point::new(0.0, 0.0),
                end: Point::new(30.0, 30.0),
            },
            DrawingParameters {
                stroke: TRANSPARENT,
                ..invisible
            },
        ),
    ];

    for shape in shapes {
        let (mut surface, ctx) = surface_with_context(40, 40);
        render_shape(&ctx, &shape);
        drop(ctx);
        assert!(!surface_has_pixels(&mut surface), "{shape:?} should be invisible");
    }
}

#[test]
fn collections_render_and_export_to_png() {
    let mut collections = DisplayCollections::new();
    collections.push(Shape::new(
        Geometry::Rectangle {
            start: Point::new(4.0, 4.0),
            end: Point::new(30.0, 20.0),
        },
        style(),
    ));

    let (mut surface, ctx) = surface_with_context(40, 30);
    render_collections(&ctx, &collections);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("drawing.png");
    render_to_png(&collections, None, 40, 30, WHITE, &path).unwrap();
    assert!(std::fs::read(&path).unwrap().starts_with(b"\x89PNG"));
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let temp = TempDir::new().unwrap();
    let result = render_to_png(
        &DisplayCollections::new(),
        None,
        0,
        10,
        WHITE,
        &temp.path().join("x.png"),
    );
    assert!(result.is_err());
}
