//! Interactive vector shape construction.
//!
//! Turns a stream of pointer events into lines, rectangles, ellipses,
//! polygons, polylines and freehand strokes, and commits each finished shape
//! to a per-type display collection that a presentation layer renders.
//!
//! ```
//! use painter::draw::{DrawingParameters, ShapeBucket, ShapeType};
//! use painter::input::InputState;
//! use painter::util::Point;
//!
//! let mut state = InputState::with_defaults(DrawingParameters::default(), ShapeType::Line);
//! state.on_pointer_down(Point::new(0.0, 0.0), 1);
//! state.on_pointer_move(Point::new(40.0, 30.0));
//! state.on_pointer_up(Point::new(40.0, 30.0));
//! assert_eq!(state.collections.bucket(ShapeBucket::Lines).len(), 1);
//! ```

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
