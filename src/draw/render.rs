//! Cairo-based rendering of shapes and display collections.

use super::collections::DisplayCollections;
use super::color::Color;
use super::shape::{Geometry, Shape};
use super::style::DrawingParameters;
use crate::util::{Point, Rect};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors raised while rasterizing a drawing to an image file.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("failed to create {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fills the whole canvas with a solid background color.
///
/// Transparent backgrounds leave the surface untouched.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    if color.is_visible() {
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        let _ = ctx.paint();
    }
}

/// Renders every committed shape in compositing order (first = bottom layer).
pub fn render_collections(ctx: &cairo::Context, collections: &DisplayCollections) {
    for shape in collections.iter() {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape to a Cairo context.
///
/// Lines are stroked only; closed shapes are filled, then stroked. Polylines
/// fill the area their vertices enclose but keep an open outline.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    let style = &shape.style;
    match &shape.geometry {
        Geometry::Line { start, end } => render_line(ctx, *start, *end, style),
        Geometry::Rectangle { start, end } => {
            render_rect(ctx, Rect::from_corners(*start, *end), style)
        }
        Geometry::Ellipse { start, end } => {
            render_ellipse(ctx, Rect::from_corners(*start, *end), style)
        }
        Geometry::Polygon { points } => render_path(ctx, points, true, style),
        Geometry::Polyline { points } => render_path(ctx, points, false, style),
    }
}

/// Rasterizes a drawing to a PNG file.
///
/// Paints the background, the committed collections, and finally the shape
/// still under construction (if any) on top.
pub fn render_to_png(
    collections: &DisplayCollections,
    provisional: Option<&Shape>,
    width: u32,
    height: u32,
    background: Color,
    path: &Path,
) -> Result<(), RenderError> {
    let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
        return Err(RenderError::InvalidSize { width, height });
    };
    if w == 0 || h == 0 {
        return Err(RenderError::InvalidSize { width, height });
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        ctx.set_antialias(cairo::Antialias::Best);
        render_background(&ctx, background);
        render_collections(&ctx, collections);
        if let Some(shape) = provisional {
            render_shape(&ctx, shape);
        }
    }

    let mut file = File::create(path).map_err(|source| RenderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    surface.write_to_png(&mut file)?;

    log::info!(
        "Rendered {} shapes to {} ({}x{})",
        collections.len(),
        path.display(),
        width,
        height
    );
    Ok(())
}

fn set_source(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
}

/// Fills the current path (keeping it) and strokes it with the shape's style.
fn fill_and_stroke(ctx: &cairo::Context, style: &DrawingParameters) {
    if style.fill.is_visible() {
        set_source(ctx, style.fill);
        let _ = ctx.fill_preserve();
    }
    stroke_path(ctx, style);
}

/// Strokes and clears the current path.
fn stroke_path(ctx: &cairo::Context, style: &DrawingParameters) {
    if style.stroke.is_visible() && style.stroke_thickness > 0.0 {
        set_source(ctx, style.stroke);
        ctx.set_line_width(style.stroke_thickness);
        let _ = ctx.stroke_preserve();
    }
    ctx.new_path();
}

fn trace_vertices(ctx: &cairo::Context, first: &Point, rest: &[Point]) {
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
}

fn render_line(ctx: &cairo::Context, start: Point, end: Point, style: &DrawingParameters) {
    if !style.stroke.is_visible() || style.stroke_thickness <= 0.0 {
        return;
    }
    set_source(ctx, style.stroke);
    ctx.set_line_width(style.stroke_thickness);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    let _ = ctx.stroke();
}

fn render_rect(ctx: &cairo::Context, rect: Rect, style: &DrawingParameters) {
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
    fill_and_stroke(ctx, style);
}

/// Render an ellipse inscribed in `rect` using Cairo's arc with scaling
fn render_ellipse(ctx: &cairo::Context, rect: Rect, style: &DrawingParameters) {
    // A zero radius would make the scale matrix singular
    if !rect.is_valid() {
        return;
    }
    let center = rect.center();

    ctx.save().ok();
    ctx.translate(center.x, center.y);
    ctx.scale(rect.width / 2.0, rect.height / 2.0);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    fill_and_stroke(ctx, style);
}

fn render_path(ctx: &cairo::Context, points: &[Point], closed: bool, style: &DrawingParameters) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    if closed {
        trace_vertices(ctx, first, rest);
        ctx.close_path();
        fill_and_stroke(ctx, style);
        return;
    }

    // Open outlines still fill the area their vertices enclose
    if rest.len() >= 2 && style.fill.is_visible() {
        trace_vertices(ctx, first, rest);
        ctx.close_path();
        set_source(ctx, style.fill);
        let _ = ctx.fill();
    }
    trace_vertices(ctx, first, rest);
    stroke_path(ctx, style);
}
