//! Error types for mcxcomm-core

/// Result type alias for mcxcomm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
///
/// Malformed frames are not errors here; they are reported as
/// [`Failures`](crate::Failures) by [`Frame::check`](crate::Frame::check).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Buffer is not exactly one frame long
    #[error("Frame length mismatch: expected {expected} bytes, got {actual} bytes")]
    FrameLength {
        expected: usize,
        actual: usize,
    },

    /// Byte is not a known response code
    #[error("Unknown response code: 0x{0:02X}")]
    UnknownResponse(u8),

    /// Byte is not a known command code
    #[error("Unknown command code: 0x{0:02X}")]
    UnknownCommand(u8),
}
