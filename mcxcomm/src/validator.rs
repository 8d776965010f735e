//! Validation of frames received from the camera

use mcxcomm_core::{FRAME_LEN, Failure, Failures, Frame};

use crate::{
    error::{Error, Result},
    sink::{DiagnosticSink, TracingSink},
};

/// Outcome of validating one received frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    frame: Frame,
    failures: Failures,
    computed_crc: u16,
}

impl Validation {
    /// Received frame, decoded as-is
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Every condition that failed (empty on success)
    pub fn failures(&self) -> Failures {
        self.failures
    }

    /// Check if the frame passed every condition
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Check a single condition
    pub fn has(&self, failure: Failure) -> bool {
        self.failures.contains(failure.flag())
    }

    /// Checksum stored in the frame
    pub fn stored_crc(&self) -> u16 {
        self.frame.crc
    }

    /// Checksum computed over code..ETX
    pub fn computed_crc(&self) -> u16 {
        self.computed_crc
    }

    /// Convert into a `Result`, for callers that want to bail with `?`
    pub fn into_result(self) -> Result<Frame> {
        if self.is_ok() {
            Ok(self.frame)
        } else {
            Err(Error::Invalid {
                failures: self.failures,
                frame: self.frame,
            })
        }
    }
}

/// Frame validator
///
/// Checks start marker, response code, end marker and checksum, and
/// reports each failed condition to its sink.
///
/// # Examples
///
/// ```
/// use mcxcomm::{Frame, NullSink, Validator};
///
/// let mut frame = Frame::set(0x10, &[0x01]);
/// frame.code = 0xA0;
/// frame.seal();
///
/// let validator = Validator::new().with_sink(NullSink);
/// assert!(validator.validate(&frame.encode()).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator<S = TracingSink> {
    sink: S,
}

impl Validator {
    /// Create a validator that reports through `tracing`
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: DiagnosticSink> Validator<S> {
    /// Replace the diagnostic sink
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> Validator<T> {
        Validator { sink }
    }

    /// Validate a received 19-byte buffer
    pub fn validate(&self, bytes: &[u8; FRAME_LEN]) -> Validation {
        self.validate_frame(Frame::decode(bytes))
    }

    /// Validate a buffer of unchecked length
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is not exactly one frame long.
    pub fn validate_slice(&self, bytes: &[u8]) -> Result<Validation> {
        let frame = Frame::try_from(bytes)?;
        Ok(self.validate_frame(frame))
    }

    /// Validate an already decoded frame
    ///
    /// Failures go to the sink only; nothing is logged globally.
    pub fn validate_frame(&self, frame: Frame) -> Validation {
        let (failures, computed_crc) = frame.check_with_crc();

        for failure in failures.reasons() {
            self.sink.on_failure(failure, &frame);
        }

        Validation {
            frame,
            failures,
            computed_crc,
        }
    }
}
