//! Binary codec for replicated action payloads.

use super::DragVehicleArgs;
use crate::error::{EditorError, ErrorSeverity};

/// Errors raised while encoding or decoding an action payload.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to encode action payload: {0}")]
    Encode(String),

    #[error("failed to decode action payload: {0}")]
    Decode(String),
}

impl EditorError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CodecError::Encode(_) => ErrorSeverity::Internal,
            CodecError::Decode(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CodecError::Encode(_) => "CODEC_ENCODE",
            CodecError::Decode(_) => "CODEC_DECODE",
        }
    }
}

impl DragVehicleArgs {
    /// Serializes the payload with bincode for transmission to other clients.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(self).map_err(|err| CodecError::Encode(err.to_string()))
    }

    /// Decodes a payload received from another client.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        bincode::deserialize(bytes).map_err(|err| CodecError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{DragPosition, DragState};
    use crate::state::{CarId, CarTrackLocation, CoordsXYZ};

    #[test]
    fn cancel_payload_survives_the_wire() {
        let location = CarTrackLocation::new(CoordsXYZ::new(32, 64, 16), 3, 12);
        let args = DragVehicleArgs::new(
            CarId(4),
            DragPosition::on_track(CoordsXYZ::new(48, 80, 16), location, Some(23)),
            DragState::Cancel,
        );

        let bytes = args.to_bytes().unwrap();
        assert_eq!(DragVehicleArgs::from_bytes(&bytes).unwrap(), args);
    }

    #[test]
    fn truncated_payload_is_a_validation_error() {
        let err = DragVehicleArgs::from_bytes(&[1, 2]).unwrap_err();

        assert!(matches!(err, CodecError::Decode(_)));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
