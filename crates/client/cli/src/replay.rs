//! Replays a recorded drag session against the in-memory park.

use std::cell::Cell;

use anyhow::Result;
use editor_core::{CarId, CoordsXY, DragVehicleArgs, Env, ParkState};
use editor_tool::{
    DragTarget, ParkDispatcher, ToolConfig, ToolDriver, ToolHost, ToolOutputs,
    toggle_vehicle_dragger,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::scenario::Scenario;

/// Outcome of a replayed session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Authoritative park state after the session.
    pub park: ParkState,
    /// Authoritative commands issued by the session.
    pub executed: Vec<DragVehicleArgs>,
    /// Cars observers were asked to redraw.
    pub refreshed: Vec<CarId>,
    /// Whether the tool's cancellation callback ran.
    pub finished: bool,
}

/// Tool manager of the replay: there is only ever one tool.
#[derive(Default)]
struct ReplayHost {
    cancelled: Vec<String>,
}

impl ToolHost for ReplayHost {
    fn cancel_tool(&mut self, id: &str) {
        info!(tool = id, "tool cancelled");
        self.cancelled.push(id.to_owned());
    }
}

/// Runs `scenario` through the drag tool.
///
/// Events after the session closed are ignored. A session still active when
/// the events run out is finished as if the host closed the tool.
pub fn replay(scenario: &Scenario, config: &ToolConfig) -> Result<ReplayReport> {
    let finished = Cell::new(false);
    let mut host = ReplayHost::default();
    let mut park = scenario.park.clone();
    let env = Env::new(&scenario.map, &scenario.map, &scenario.host, &scenario.host);

    let target = scenario
        .car
        .and_then(|id| park.car(id))
        .map(DragTarget::from_car);
    if scenario.car.is_some() && target.is_none() {
        warn!(car = ?scenario.car, "selected car does not exist");
    }

    let Some(controller) = toggle_vehicle_dragger(
        true,
        target,
        env.as_drag_env(),
        config,
        &mut host,
        || finished.set(true),
    ) else {
        return Ok(ReplayReport {
            park,
            executed: Vec::new(),
            refreshed: Vec::new(),
            finished: false,
        });
    };

    let mut overlay: Option<CoordsXY> = None;
    let mut dispatcher = ParkDispatcher::new(&mut park);
    let mut driver = ToolDriver::new(controller);
    {
        let mut out = ToolOutputs::new(&mut overlay, &mut dispatcher);
        for (index, event) in scenario.events.iter().enumerate() {
            if !driver.is_active() {
                warn!(
                    remaining = scenario.events.len() - index,
                    "tool closed, ignoring remaining events"
                );
                break;
            }
            driver.dispatch(*event, &mut out)?;
        }
        driver.finish(&mut out);
    }

    let executed = dispatcher.executed().to_vec();
    let refreshed = dispatcher.refreshed().to_vec();
    drop(dispatcher);

    Ok(ReplayReport {
        park,
        executed,
        refreshed,
        finished: finished.get(),
    })
}
