//! Common error infrastructure for editor-core.
//!
//! The drag path itself never fails: stale targets, empty hit-tests and
//! missing track iterators all degrade to "nothing happened". Typed errors only
//! exist at the real fallible edges (wire codec, configuration), and they share
//! the severity classification defined here.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Temporary condition, the same request may succeed later.
    Recoverable,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: malformed payload bytes, unparsable configuration value
    Validation,

    /// Unexpected state inconsistency that indicates a bug.
    Internal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all editor errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and classify
/// severity based on recoverability, not impact.
pub trait EditorError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Error type for actions that never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}

impl EditorError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}
