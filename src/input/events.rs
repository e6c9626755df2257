//! Pointer event types delivered by the presentation layer.

use crate::util::Point;

/// A pointer event in canvas coordinates.
///
/// Presentation layers map their native mouse/pen/touch events to these
/// before handing them to [`InputState::handle_event`](super::InputState::handle_event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down {
        position: Point,
        /// 1 for a single click, 2 for the second press of a double-click
        click_count: u32,
    },
    /// Pointer moved (with or without a button held)
    Move { position: Point },
    /// Primary button released
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}
