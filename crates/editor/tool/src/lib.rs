//! Interactive vehicle drag tool.
//!
//! This crate turns host input events into drag sessions on top of the pure
//! types in `editor-core`:
//! - [`controller`] hosts the per-activation [`DragToolController`]
//! - [`session`] tracks the original and last accepted placement
//! - [`throttle`] bounds move resolution in multiplayer
//! - [`driver`] routes host events into a session until it finishes
//! - [`dispatch`] applies drag commands to the in-memory park
//! - [`output`] defines the capabilities a session writes to
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod driver;
pub mod output;
pub mod session;
pub mod throttle;

pub use config::{ConfigError, ToolConfig};
pub use controller::{
    DRAG_TOOL_ID, DragToolController, ToolFlow, ToolSession, toggle_vehicle_dragger,
};
pub use dispatch::ParkDispatcher;
pub use driver::{DriverError, ToolDriver, ToolEvent};
pub use output::{ActionDispatcher, HighlightOverlay, ToolHost, ToolOutputs};
pub use session::{DragSession, DragTarget};
pub use throttle::MoveThrottle;
