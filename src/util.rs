//! Utility functions for colors, geometry, and output file naming.
//!
//! This module provides:
//! - Canvas coordinates ([`Point`]) and axis-aligned boxes ([`Rect`])
//! - Name-to-color mapping used by the configuration system
//! - Timestamped file names for PNG exports

use crate::draw::{Color, color::*};
use chrono::Local;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A position on the canvas in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The canvas origin, used as the placeholder position of freshly created shapes.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with a top-left corner and non-negative size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Builds the box spanned by two opposite corners, in any drag direction.
    ///
    /// The top-left corner is `(min x, min y)` and the size is the absolute
    /// difference of the coordinates, so width and height never go negative.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Builds the smallest box containing every point, or `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;

        for p in rest {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Some(Self::from_corners(min, max))
    }

    /// Grows the rectangle evenly in all directions by `amount`.
    pub fn inflate(self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and replay scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black", "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Returns "Custom" if the color doesn't match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.a < 0.1 {
        "Transparent"
    } else if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Output Files
// ============================================================================

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_corners_normalizes_every_drag_direction() {
        let anchor = Point::new(50.0, 50.0);
        let cases = [
            (Point::new(80.0, 90.0), (50.0, 50.0)),
            (Point::new(20.0, 90.0), (20.0, 50.0)),
            (Point::new(20.0, 10.0), (20.0, 10.0)),
            (Point::new(80.0, 10.0), (50.0, 10.0)),
        ];

        for (corner, (x, y)) in cases {
            let rect = Rect::from_corners(anchor, corner);
            assert_eq!((rect.x, rect.y), (x, y), "corner {corner:?}");
            assert_eq!(rect.width, (corner.x - anchor.x).abs());
            assert_eq!(rect.height, (corner.y - anchor.y).abs());
        }
    }

    #[test]
    fn rect_enclosing_handles_empty_and_scattered_points() {
        assert!(Rect::enclosing(&[]).is_none());

        let rect = Rect::enclosing(&[
            Point::new(10.0, 40.0),
            Point::new(-5.0, 12.0),
            Point::new(30.0, 20.0),
        ])
        .expect("points have bounds");
        assert_eq!(rect, Rect {
            x: -5.0,
            y: 12.0,
            width: 35.0,
            height: 28.0
        });
    }

    #[test]
    fn zero_size_rect_is_not_valid() {
        let p = Point::new(3.0, 4.0);
        let rect = Rect::from_corners(p, p);
        assert!(!rect.is_valid());
        assert!(rect.inflate(1.0).is_valid());
        assert_eq!(rect.center(), p);
    }

    #[test]
    fn name_color_mappings_round_trip() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert_eq!(name_to_color("transparent").unwrap(), TRANSPARENT);
        assert!(name_to_color("chartreuse").is_none());
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(
            color_to_name(&Color {
                r: 0.42,
                g: 0.42,
                b: 0.42,
                a: 1.0
            }),
            "Custom"
        );
    }

    #[test]
    fn generate_filename_appends_extension() {
        let filename = generate_filename("drawing_%Y%m%d", "png");
        assert!(filename.starts_with("drawing_"));
        assert!(filename.ends_with(".png"));
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths_alone() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
    }
}
