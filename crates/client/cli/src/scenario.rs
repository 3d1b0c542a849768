//! Replay scenario files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use editor_core::{CarId, FixedHost, MapSnapshot, ParkState};
use editor_tool::ToolEvent;
use serde::{Deserialize, Serialize};

/// A recorded drag session: the world it ran in plus the tool events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Clock and network mode the session ran under.
    #[serde(default)]
    pub host: FixedHost,
    pub map: MapSnapshot,
    pub park: ParkState,
    /// Car selected when the tool was activated. `None` if nothing was selected.
    pub car: Option<CarId>,
    pub events: Vec<ToolEvent>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_scenario_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "map": {{ "elements": [] }},
                "park": {{ "cars": [{{ "id": 1, "position": {{ "x": 100, "y": 100, "z": 50 }} }}] }},
                "car": 1,
                "events": ["Down"]
            }}"#
        )
        .unwrap();

        let scenario = Scenario::load(file.path()).unwrap();

        assert_eq!(scenario.host, FixedHost::default());
        assert_eq!(scenario.car, Some(CarId(1)));
        assert_eq!(scenario.park.cars.len(), 1);
        assert_eq!(scenario.events, vec![ToolEvent::Down]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Scenario::load(Path::new("/nonexistent/scenario.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scenario.json"));
    }
}
