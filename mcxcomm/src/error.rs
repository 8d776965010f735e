//! High-level error types

use mcxcomm_core::{Failures, Frame};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] mcxcomm_core::Error),

    #[error("Invalid frame [{failures}]: {frame}")]
    Invalid {
        failures: Failures,
        frame: Frame,
    },
}

impl Error {
    /// Check if the error points at link corruption (a resend might succeed)
    ///
    /// Marker and checksum damage come from the wire; a rejected response
    /// code with intact framing is the camera saying no.
    pub fn is_link_error(&self) -> bool {
        match self {
            Self::Invalid { failures, .. } => failures.intersects(
                Failures::BAD_START | Failures::BAD_END | Failures::BAD_CHECKSUM,
            ),
            Self::Core(mcxcomm_core::Error::FrameLength { .. }) => true,
            Self::Core(_) => false,
        }
    }
}
