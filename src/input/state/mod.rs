mod core;
mod pointer;
mod positioning;

pub use self::core::{CanvasUpdate, InputState, OperationType, PointerResponse};
pub use positioning::PositioningCoordinator;
