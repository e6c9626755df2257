//! Interaction state and style management.

use super::positioning::PositioningCoordinator;
use crate::config::Config;
use crate::draw::{
    ClickMultiplicity, Color, DisplayCollections, DrawingParameters, Shape, ShapeBucket, ShapeId,
    ShapeType,
};

/// Progress of the shape currently being built.
///
/// `CreationCompleted` is transient: the pointer-up handler folds it back to
/// `ReadyForCreation`, so between events the machine rests in one of the
/// other two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Armed: the next press creates a new shape
    ReadyForCreation,
    /// A shape exists and follows the pointer
    CreationResize,
    /// The shape is finished and has been committed
    CreationCompleted,
}

/// Change produced by one pointer event, for the presentation layer to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasUpdate {
    /// A new shape entered construction; see [`InputState::shape_under_construction`]
    Started { bucket: ShapeBucket },
    /// The shape under construction changed geometry
    Reshaped,
    /// The shape under construction moved into its display collection
    Committed(ShapeId),
}

/// Outcome of handling a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerResponse {
    pub update: Option<CanvasUpdate>,
    /// The presentation layer should release pointer capture
    pub release_capture: bool,
}

impl PointerResponse {
    pub(super) fn with_update(update: Option<CanvasUpdate>) -> Self {
        Self {
            update,
            release_capture: false,
        }
    }
}

/// Main input state containing the whole drawing session.
///
/// Holds the committed shapes, the shape under construction (through the
/// positioning coordinator), the selected shape type and the current style,
/// and turns pointer events into shape updates.
pub struct InputState {
    /// Finished shapes, one collection per shape kind
    pub collections: DisplayCollections,
    /// Current stage of shape construction
    pub operation: OperationType,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    pub(super) positioning: PositioningCoordinator,
    shape_type: ShapeType,
    stroke_color: Color,
    fill_color: Color,
    stroke_thickness: f64,
}

impl InputState {
    /// Creates a new InputState with the given style and shape selection.
    pub fn with_defaults(params: DrawingParameters, shape_type: ShapeType) -> Self {
        Self {
            collections: DisplayCollections::new(),
            operation: OperationType::ReadyForCreation,
            needs_redraw: true,
            positioning: PositioningCoordinator::new(),
            shape_type,
            stroke_color: params.stroke,
            fill_color: params.fill,
            stroke_thickness: params.stroke_thickness,
        }
    }

    /// Creates an InputState from the `[drawing]` section of a config.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.parameters(),
            config.drawing.default_shape,
        )
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Selects the shape type for the next construction.
    ///
    /// A shape still under construction is committed as it stands. Any type
    /// other than [`ShapeType::None`] re-arms the machine for creation.
    pub fn set_shape_type(&mut self, shape_type: ShapeType) -> Option<ShapeId> {
        let committed = self.commit_pending();
        if shape_type.is_selected() {
            self.operation = OperationType::ReadyForCreation;
        }
        if shape_type != self.shape_type {
            log::debug!("Shape type {} -> {}", self.shape_type, shape_type);
        }
        self.shape_type = shape_type;
        self.needs_redraw = true;
        committed
    }

    pub fn is_shape_selected(&self) -> bool {
        self.shape_type.is_selected()
    }

    pub fn click_multiplicity(&self) -> ClickMultiplicity {
        self.shape_type.click_multiplicity()
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Sets the outline width for future shapes; negative values become 0.
    pub fn set_stroke_thickness(&mut self, thickness: f64) {
        self.stroke_thickness = thickness.max(0.0);
    }

    /// Snapshot of the current style, as applied to the next new shape.
    pub fn drawing_parameters(&self) -> DrawingParameters {
        DrawingParameters {
            fill: self.fill_color,
            stroke: self.stroke_color,
            stroke_thickness: self.stroke_thickness,
        }
    }

    /// The shape being built right now, not yet in any display collection.
    pub fn shape_under_construction(&self) -> Option<&Shape> {
        self.positioning.selected_shape()
    }

    /// Moves the shape under construction into its display collection.
    pub(super) fn commit_pending(&mut self) -> Option<ShapeId> {
        let shape = self.positioning.take_shape()?;
        let id = self.collections.push(shape);
        log::info!(
            "Committed shape to {} (#{})",
            id.bucket.label(),
            id.index + 1
        );
        self.needs_redraw = true;
        Some(id)
    }
}
