//! Pointer handling and the shape construction state machine.
//!
//! This module translates presentation-layer pointer events into shape
//! construction. It holds the selected shape type, the current style, the
//! shape under construction and the display collections finished shapes are
//! committed to.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{CanvasUpdate, InputState, OperationType, PointerResponse, PositioningCoordinator};
