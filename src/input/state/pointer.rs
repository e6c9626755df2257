use crate::draw::{ClickMultiplicity, create_shape};
use crate::input::events::PointerEvent;
use crate::util::Point;

use super::{CanvasUpdate, InputState, OperationType, PointerResponse};

impl InputState {
    /// Dispatches a pointer event to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) -> PointerResponse {
        match event {
            PointerEvent::Down {
                position,
                click_count,
            } => self.on_pointer_down(position, click_count),
            PointerEvent::Move { position } => self.on_pointer_move(position),
            PointerEvent::Up { position } => self.on_pointer_up(position),
        }
    }

    /// Processes a primary button press.
    ///
    /// # Behavior
    /// - Ignored when no shape type is selected
    /// - Double-click (`click_count == 2`): marks the shape completed
    /// - Otherwise, while ReadyForCreation: creates a new shape and enters CreationResize
    /// - In every case the press position is then fed to the shape as an
    ///   initial point, so each click of a polygon adds a vertex (including
    ///   the double-click that finishes it)
    pub fn on_pointer_down(&mut self, position: Point, click_count: u32) -> PointerResponse {
        if !self.is_shape_selected() {
            return PointerResponse::default();
        }

        let mut update = None;
        if click_count == 2 {
            self.operation = OperationType::CreationCompleted;
        } else if self.operation == OperationType::ReadyForCreation {
            update = self.start_new_shape();
        }

        self.positioning.initial_point = Some(position);
        if self.positioning.add_initial_point_to_shape(self.shape_type()) {
            update = update.or(Some(CanvasUpdate::Reshaped));
        }

        if self.operation == OperationType::CreationCompleted
            && let Some(id) = self.commit_pending()
        {
            update = Some(CanvasUpdate::Committed(id));
        }

        self.finish(update)
    }

    /// Processes pointer motion.
    ///
    /// Only acts while a shape is in CreationResize: two-point shapes follow
    /// the pointer, polygons/polylines/pencil strokes gain a vertex.
    pub fn on_pointer_move(&mut self, position: Point) -> PointerResponse {
        if !self.is_shape_selected() || self.operation != OperationType::CreationResize {
            return PointerResponse::default();
        }

        self.positioning.end_point = Some(position);
        let update = self
            .positioning
            .add_end_point_to_shape(self.shape_type())
            .then_some(CanvasUpdate::Reshaped);

        self.finish(update)
    }

    /// Processes a primary button release.
    ///
    /// # Behavior
    /// - Single-click shapes complete on release
    /// - A completed shape is committed and the machine re-arms for the next
    ///   shape of the same type
    /// - Multi-click shapes stay in CreationResize until a double-click
    /// - Pointer capture is released whenever a shape type is selected
    pub fn on_pointer_up(&mut self, _position: Point) -> PointerResponse {
        if !self.is_shape_selected() {
            return PointerResponse::default();
        }

        if self.click_multiplicity() == ClickMultiplicity::Single {
            self.operation = OperationType::CreationCompleted;
        }

        let mut update = None;
        if self.operation == OperationType::CreationCompleted {
            update = self.commit_pending().map(CanvasUpdate::Committed);
            self.operation = OperationType::ReadyForCreation;
            log::debug!("Ready for next {}", self.shape_type());
        }

        PointerResponse {
            release_capture: true,
            ..self.finish(update)
        }
    }

    fn start_new_shape(&mut self) -> Option<CanvasUpdate> {
        let shape = create_shape(self.shape_type(), &self.drawing_parameters())?;
        let bucket = shape.bucket();

        // A held shape normally implies CreationResize
        if let Some(id) = self.commit_pending() {
            log::warn!("Committed an unfinished shape left in {}", id.bucket.label());
        }
        self.positioning.begin(shape);
        self.operation = OperationType::CreationResize;
        Some(CanvasUpdate::Started { bucket })
    }

    fn finish(&mut self, update: Option<CanvasUpdate>) -> PointerResponse {
        if update.is_some() {
            self.needs_redraw = true;
        }
        PointerResponse::with_update(update)
    }
}
