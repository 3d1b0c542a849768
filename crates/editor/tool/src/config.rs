//! Drag tool configuration and loaders.

use std::env;
use std::str::FromStr;

use editor_core::{EditorConfig, EditorError, ErrorSeverity};

/// Errors raised while reading tool configuration from the environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl EditorError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "CONFIG_INVALID_VALUE"
    }
}

/// Runtime settings of the drag tool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolConfig {
    pub editor: EditorConfig,
}

impl ToolConfig {
    pub const fn new(editor: EditorConfig) -> Self {
        Self { editor }
    }

    /// Move events are resolved on ticks divisible by this interval in
    /// multiplayer sessions.
    pub fn throttle_interval(&self) -> u64 {
        self.editor.throttle_interval
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DRAG_THROTTLE_INTERVAL` - Tick interval between resolved moves in
    ///   multiplayer (default: 5, minimum 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("DRAG_THROTTLE_INTERVAL")? {
            config.editor = EditorConfig::with_throttle_interval(interval);
        }

        Ok(config)
    }
}

fn read_env<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    let Ok(raw) = env::var(key) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
        })
}
