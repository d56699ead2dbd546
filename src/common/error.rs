// src/common/error.rs

/// Broad failure class, for callers choosing a retry policy.
///
/// Communication failures mean the sensor never produced a frame (silence,
/// disconnection, severe misconfiguration) and usually warrant a longer
/// backoff. Data-integrity failures mean a frame arrived but did not survive
/// validation, and an immediate retry is normally fine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    Communication,
    DataIntegrity,
}

#[derive(Debug, thiserror::Error)]
pub enum Pms7003Error<E = ()>
where
    E: core::fmt::Debug, // Debug is required for the generic Io error
{
    /// Underlying I/O error from the HAL implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// A bounded write or flush did not complete in time.
    #[error("Operation timed out")]
    Timeout,

    /// The `42 4D` start sequence was not found within the scan window.
    #[error("Unable to find start sequence")]
    StartSequenceTimeout,

    /// The start sequence was found but the frame body stopped short.
    #[error("Truncated frame: needed {needed} body bytes, got {got}")]
    TruncatedFrame { needed: usize, got: usize },

    /// Received checksum byte does not match the derived low-8-bit sum.
    #[error("Checksum mismatch: received {received:#04x}, derived {derived:#04x}")]
    ChecksumMismatch { received: u8, derived: u8 },

    /// Every payload byte is zero. Known power-on artifact of the hardware,
    /// not a legitimate air-quality reading.
    #[error("Sensor returned an all-zero payload")]
    ZeroPayload,

    /// The sensor itself reported a non-zero error code in the frame.
    #[error("Sensor reported error code {0:#04x}")]
    SensorFault(u8),
}

impl<E: core::fmt::Debug> Pms7003Error<E> {
    /// Classifies the error into the two recoverable kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Pms7003Error::Io(_)
            | Pms7003Error::Timeout
            | Pms7003Error::StartSequenceTimeout
            | Pms7003Error::TruncatedFrame { .. } => ErrorKind::Communication,
            Pms7003Error::ChecksumMismatch { .. }
            | Pms7003Error::ZeroPayload
            | Pms7003Error::SensorFault(_) => ErrorKind::DataIntegrity,
        }
    }
}

// Allow mapping from underlying HAL error if From is implemented
impl<E: core::fmt::Debug> From<E> for Pms7003Error<E> {
    fn from(e: E) -> Self {
        Pms7003Error::Io(e)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockIoError;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Pms7003Error::Io(MockIoError).kind(), ErrorKind::Communication);
        assert_eq!(Pms7003Error::<()>::Timeout.kind(), ErrorKind::Communication);
        assert_eq!(
            Pms7003Error::<()>::StartSequenceTimeout.kind(),
            ErrorKind::Communication
        );
        assert_eq!(
            Pms7003Error::<()>::TruncatedFrame { needed: 30, got: 4 }.kind(),
            ErrorKind::Communication
        );
        assert_eq!(
            Pms7003Error::<()>::ChecksumMismatch { received: 0x12, derived: 0x34 }.kind(),
            ErrorKind::DataIntegrity
        );
        assert_eq!(Pms7003Error::<()>::ZeroPayload.kind(), ErrorKind::DataIntegrity);
        assert_eq!(Pms7003Error::<()>::SensorFault(4).kind(), ErrorKind::DataIntegrity);
    }

    #[test]
    fn test_from_io_error() {
        let err: Pms7003Error<MockIoError> = MockIoError.into();
        assert!(matches!(err, Pms7003Error::Io(MockIoError)));
    }
}
