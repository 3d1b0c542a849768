//! Host-side event routing for a single tool activation.

use editor_core::{EditorError, ErrorSeverity, ToolHit};
use tracing::warn;

use crate::controller::{ToolFlow, ToolSession};
use crate::output::ToolOutputs;

/// Input events delivered to an active tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToolEvent {
    /// Pointer moved over the map.
    Move(ToolHit),
    /// Pointer pressed down.
    Down,
    /// Tool closed without confirmation.
    Finish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    #[error("tool session already finished")]
    SessionClosed,
}

impl EditorError for DriverError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "DRIVER_SESSION_CLOSED"
    }
}

/// Routes host events into one tool session until it finishes.
///
/// A [`ToolFlow::Close`] answer from the session finishes it immediately, the
/// same way the host closes a tool from inside its own callback.
pub struct ToolDriver<S: ToolSession> {
    session: Option<S>,
}

impl<S: ToolSession> ToolDriver<S> {
    pub fn new(session: S) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&S> {
        self.session.as_ref()
    }

    /// Delivers `event` to the session.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::SessionClosed`] if the session already finished.
    pub fn dispatch(&mut self, event: ToolEvent, out: &mut ToolOutputs<'_>) -> Result<(), DriverError> {
        let Some(session) = self.session.as_mut() else {
            warn!(?event, "event delivered to finished tool");
            return Err(DriverError::SessionClosed);
        };

        match event {
            ToolEvent::Move(hit) => session.on_move(&hit, out),
            ToolEvent::Down => {
                if session.on_down(out) == ToolFlow::Close {
                    self.finish(out);
                }
            }
            ToolEvent::Finish => self.finish(out),
        }
        Ok(())
    }

    /// Finishes the session if it is still active.
    pub fn finish(&mut self, out: &mut ToolOutputs<'_>) {
        if let Some(session) = self.session.take() {
            session.on_finish(out);
        }
    }
}
