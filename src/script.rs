//! Recorded pointer scripts.
//!
//! A script is a TOML file of `[[steps]]`, each tagged by `kind`, that replays
//! the same calls a presentation layer would make: selecting a shape type,
//! changing the style, and pressing/moving/releasing the pointer.
//!
//! ```toml
//! [[steps]]
//! kind = "select"
//! shape = "rectangle"
//!
//! [[steps]]
//! kind = "down"
//! x = 10.0
//! y = 10.0
//!
//! [[steps]]
//! kind = "move"
//! x = 120.0
//! y = 80.0
//!
//! [[steps]]
//! kind = "up"
//! x = 120.0
//! y = 80.0
//! ```

use crate::config::ColorSpec;
use crate::draw::{ShapeBucket, ShapeType};
use crate::input::{CanvasUpdate, InputState, PointerEvent};
use crate::util::Point;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("script contains no steps")]
    Empty,
}

/// One recorded interaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScriptStep {
    /// Pick a shape type in the toolbar
    Select { shape: ShapeType },
    /// Change the style used for shapes created afterwards
    Style {
        #[serde(default)]
        stroke: Option<ColorSpec>,
        #[serde(default)]
        fill: Option<ColorSpec>,
        #[serde(default)]
        thickness: Option<f64>,
    },
    /// Primary button press
    Down {
        x: f64,
        y: f64,
        #[serde(default = "default_clicks")]
        clicks: u32,
    },
    /// Pointer motion
    Move { x: f64, y: f64 },
    /// Primary button release
    Up { x: f64, y: f64 },
}

fn default_clicks() -> u32 {
    1
}

impl ScriptStep {
    fn pointer_event(&self) -> Option<PointerEvent> {
        match *self {
            ScriptStep::Down { x, y, clicks } => Some(PointerEvent::Down {
                position: Point::new(x, y),
                click_count: clicks,
            }),
            ScriptStep::Move { x, y } => Some(PointerEvent::Move {
                position: Point::new(x, y),
            }),
            ScriptStep::Up { x, y } => Some(PointerEvent::Up {
                position: Point::new(x, y),
            }),
            ScriptStep::Select { .. } | ScriptStep::Style { .. } => None,
        }
    }
}

/// A parsed pointer script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

/// What a replay did to the drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Steps applied
    pub steps: usize,
    /// Shapes that entered construction
    pub started: usize,
    /// Shapes committed to a display collection (including by type switches)
    pub committed: usize,
    /// Geometry updates to the shape under construction
    pub reshaped: usize,
    /// Whether a shape was still under construction when the script ended
    pub unfinished: bool,
    /// Shape count per display collection after the replay
    pub counts: Vec<(ShapeBucket, usize)>,
}

impl Script {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::parse(&source)?;
        log::info!(
            "Loaded script {} ({} steps)",
            path.display(),
            script.steps.len()
        );
        Ok(script)
    }

    /// Parses script text; a script without steps is rejected.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let script: Script = toml::from_str(source)?;
        if script.steps.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(script)
    }

    /// Feeds every step through `state`, exactly as a presentation layer would.
    pub fn replay(&self, state: &mut InputState) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for step in &self.steps {
            summary.steps += 1;
            match step {
                ScriptStep::Select { shape } => {
                    if state.set_shape_type(*shape).is_some() {
                        summary.committed += 1;
                    }
                }
                ScriptStep::Style {
                    stroke,
                    fill,
                    thickness,
                } => {
                    if let Some(stroke) = stroke {
                        state.set_stroke_color(stroke.to_color());
                    }
                    if let Some(fill) = fill {
                        state.set_fill_color(fill.to_color());
                    }
                    if let Some(thickness) = thickness {
                        state.set_stroke_thickness(*thickness);
                    }
                }
                _ => {
                    let Some(event) = step.pointer_event() else {
                        continue;
                    };
                    match state.handle_event(event).update {
                        Some(CanvasUpdate::Started { .. }) => summary.started += 1,
                        Some(CanvasUpdate::Reshaped) => summary.reshaped += 1,
                        Some(CanvasUpdate::Committed(_)) => summary.committed += 1,
                        None => {}
                    }
                }
            }
        }

        summary.unfinished = state.shape_under_construction().is_some();
        summary.counts = state.collections.counts().to_vec();
        log::debug!("Replay finished: {:?}", summary);
        summary
    }
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Replayed {} steps", self.steps)?;
        for (bucket, count) in &self.counts {
            writeln!(f, "  {:<11} {}", format!("{}:", bucket.label()), count)?;
        }
        if self.unfinished {
            writeln!(f, "  (one shape still under construction)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, DrawingParameters};

    const POLYGON_SCRIPT: &str = r#"
        [[steps]]
        kind = "select"
        shape = "polygon"

        [[steps]]
        kind = "style"
        stroke = "blue"
        thickness = 5.0

        [[steps]]
        kind = "down"
        x = 0.0
        y = 0.0

        [[steps]]
        kind = "up"
        x = 0.0
        y = 0.0

        [[steps]]
        kind = "down"
        x = 40.0
        y = 0.0

        [[steps]]
        kind = "up"
        x = 40.0
        y = 0.0

        [[steps]]
        kind = "down"
        x = 20.0
        y = 30.0
        clicks = 2

        [[steps]]
        kind = "up"
        x = 20.0
        y = 30.0
    "#;

    fn fresh_state() -> InputState {
        InputState::with_defaults(DrawingParameters::default(), ShapeType::None)
    }

    #[test]
    fn parses_all_step_kinds() {
        let script = Script::parse(POLYGON_SCRIPT).unwrap();
        assert_eq!(script.steps.len(), 8);
        assert_eq!(script.steps[0], ScriptStep::Select {
            shape: ShapeType::Polygon
        });
        assert_eq!(script.steps[2], ScriptStep::Down {
            x: 0.0,
            y: 0.0,
            clicks: 1
        });
        assert!(matches!(script.steps[6], ScriptStep::Down { clicks: 2, .. }));
    }

    #[test]
    fn replay_builds_the_recorded_polygon() {
        let script = Script::parse(POLYGON_SCRIPT).unwrap();
        let mut state = fresh_state();

        let summary = script.replay(&mut state);
        assert_eq!(summary.steps, 8);
        assert_eq!(summary.started, 1);
        assert_eq!(summary.committed, 1);
        assert!(!summary.unfinished);

        let polygons = state.collections.bucket(ShapeBucket::Polygons);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].geometry.vertices().len(), 3);
        assert_eq!(polygons[0].style.stroke, BLUE);
        assert_eq!(polygons[0].style.stroke_thickness, 5.0);
    }

    #[test]
    fn summary_reports_unfinished_shapes() {
        let script = Script::parse(
            r#"
            [[steps]]
            kind = "select"
            shape = "polyline"

            [[steps]]
            kind = "down"
            x = 1.0
            y = 1.0
            "#,
        )
        .unwrap();
        let mut state = fresh_state();

        let summary = script.replay(&mut state);
        assert!(summary.unfinished);
        assert!(summary.to_string().contains("still under construction"));
    }

    #[test]
    fn rejects_empty_and_malformed_scripts() {
        assert!(matches!(Script::parse(""), Err(ScriptError::Empty)));
        assert!(matches!(
            Script::parse("[[steps]]\nkind = \"jump\"\n"),
            Err(ScriptError::Parse(_))
        ));
        assert!(matches!(
            Script::load(Path::new("/definitely/not/here.toml")),
            Err(ScriptError::Read { .. })
        ));
    }
}
