//! Capabilities the drag tool uses to talk back to the host.

use editor_core::{CoordsXY, DragVehicleArgs};

/// Tile selection overlay drawn on the map.
pub trait HighlightOverlay {
    /// Replaces the highlighted tiles. An empty slice clears the overlay.
    fn set_tiles(&mut self, tiles: &[CoordsXY]);
}

/// Command boundary between a tool session and the simulation.
pub trait ActionDispatcher {
    /// Shows `args` on the local client only. Previews are disposable and must
    /// never reach other participants.
    fn preview(&mut self, args: &DragVehicleArgs);

    /// Submits `args` as an authoritative, replicated action.
    fn execute(&mut self, args: DragVehicleArgs);
}

/// Host tool manager.
pub trait ToolHost {
    /// Cancels the tool registered under `id` if it is active.
    fn cancel_tool(&mut self, id: &str);
}

/// Outputs handed to a tool session on every callback.
pub struct ToolOutputs<'o> {
    pub overlay: &'o mut dyn HighlightOverlay,
    pub actions: &'o mut dyn ActionDispatcher,
}

impl<'o> ToolOutputs<'o> {
    pub fn new(overlay: &'o mut dyn HighlightOverlay, actions: &'o mut dyn ActionDispatcher) -> Self {
        Self { overlay, actions }
    }
}

impl HighlightOverlay for Option<CoordsXY> {
    fn set_tiles(&mut self, tiles: &[CoordsXY]) {
        *self = tiles.first().copied();
    }
}
