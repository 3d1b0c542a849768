//! Interactive vehicle drag tool.
//!
//! A [`DragToolController`] is created per tool activation and consumed when
//! the tool finishes. While active it turns pointer moves into local previews
//! and, when the session ends, submits exactly one authoritative update:
//! `Complete` after a confirmation, `Cancel` otherwise.

use editor_core::{DragEnv, DragState, DragVehicleArgs, ToolHit, VehicleType, resolve_position};
use tracing::{debug, info, trace};

use crate::config::ToolConfig;
use crate::output::{ToolHost, ToolOutputs};
use crate::session::{DragSession, DragTarget};
use crate::throttle::MoveThrottle;

/// Id of the vehicle drag tool registered with the host.
pub const DRAG_TOOL_ID: &str = "rve-drag-vehicle";

/// What the host should do with the tool after a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolFlow {
    /// Keep the tool active.
    Continue,
    /// Close the tool; the host must then deliver [`ToolSession::on_finish`].
    Close,
}

/// Event handlers of an active host tool.
pub trait ToolSession {
    /// Pointer moved over the map.
    fn on_move(&mut self, hit: &ToolHit, out: &mut ToolOutputs<'_>);

    /// Pointer pressed down.
    fn on_down(&mut self, out: &mut ToolOutputs<'_>) -> ToolFlow;

    /// Tool closed, by the user, by the host, or after [`ToolFlow::Close`].
    fn on_finish(self, out: &mut ToolOutputs<'_>)
    where
        Self: Sized;
}

/// Enables or disables the drag tool.
///
/// Returns the new session when the tool button is pressed and a car is
/// selected. Otherwise any running drag tool is cancelled through `host`
/// (which finishes its session) and `None` is returned.
pub fn toggle_vehicle_dragger<'a>(
    is_pressed: bool,
    target: Option<DragTarget>,
    env: DragEnv<'a>,
    config: &ToolConfig,
    host: &mut dyn ToolHost,
    on_cancel: impl FnOnce() + 'a,
) -> Option<DragToolController<'a>> {
    match target {
        Some(target) if is_pressed => Some(DragToolController::activate(
            target, env, config, on_cancel,
        )),
        _ => {
            debug!(is_pressed, "no car to drag, cancelling drag tool");
            host.cancel_tool(DRAG_TOOL_ID);
            None
        }
    }
}

/// Drag session controller for one tool activation.
pub struct DragToolController<'a> {
    env: DragEnv<'a>,
    session: DragSession,
    vehicle_type: Option<VehicleType>,
    throttle: MoveThrottle,
    on_cancel: Box<dyn FnOnce() + 'a>,
}

impl<'a> DragToolController<'a> {
    /// Starts dragging `target`. The multiplayer mode is sampled once here and
    /// holds for the whole session.
    pub fn activate(
        target: DragTarget,
        env: DragEnv<'a>,
        config: &ToolConfig,
        on_cancel: impl FnOnce() + 'a,
    ) -> Self {
        let multiplayer = env.network().is_multiplayer();
        info!(
            car = %target.car,
            position = %target.position,
            on_track = target.track_location.is_some(),
            multiplayer,
            "drag started"
        );
        Self {
            env,
            session: DragSession::begin(&target),
            vehicle_type: target.vehicle_type,
            throttle: MoveThrottle::new(multiplayer, config.throttle_interval()),
            on_cancel: Box::new(on_cancel),
        }
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }
}

impl ToolSession for DragToolController<'_> {
    fn on_move(&mut self, hit: &ToolHit, out: &mut ToolOutputs<'_>) {
        let tick = self.env.clock().ticks_elapsed();
        if !self.throttle.allows(tick) {
            trace!(tick, "move throttled");
            return;
        }

        let Some(candidate) = resolve_position(
            hit,
            self.vehicle_type.as_ref(),
            self.env.tiles(),
            self.env.tracks(),
        ) else {
            trace!(?hit, "no placement under pointer");
            return;
        };

        let Some(position) = self.session.accept(candidate) else {
            return;
        };

        debug!(
            car = %self.session.target(),
            position = %position.tile_position,
            track = ?position.track_position(),
            "drag candidate accepted"
        );
        let preview = DragVehicleArgs::new(self.session.target(), position, DragState::Dragging);
        out.actions.preview(&preview);
        out.overlay
            .set_tiles(&[position.tile_position.xy().align_with_map()]);
    }

    fn on_down(&mut self, out: &mut ToolOutputs<'_>) -> ToolFlow {
        if self.session.is_confirmed() {
            return ToolFlow::Close;
        }

        let args = self.session.confirm();
        info!(
            car = %args.target,
            position = %args.position.tile_position,
            state = %args.state,
            "drag committed"
        );
        out.actions.execute(args);
        ToolFlow::Close
    }

    fn on_finish(self, out: &mut ToolOutputs<'_>) {
        if let Some(args) = self.session.revert() {
            info!(
                car = %args.target,
                position = %args.position.tile_position,
                state = %args.state,
                "drag cancelled, restoring car"
            );
            out.actions.execute(args);
        }

        out.overlay.set_tiles(&[]);
        (self.on_cancel)();
    }
}
