//! Diagnostic sinks for validation failures
//!
//! The validator does not log on its own. Every failed condition is handed
//! to a [`DiagnosticSink`] chosen by the caller.

use mcxcomm_core::{Failure, Frame};
use tracing::warn;

/// Receiver for per-condition validation failures
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// Called once for each failed condition of a received frame
    fn on_failure(&self, failure: Failure, frame: &Frame);
}

/// Sink that reports through `tracing` at WARN level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn on_failure(&self, failure: Failure, frame: &Frame) {
        match failure {
            Failure::BadStart => warn!(reason = %failure, stx = frame.stx, "Bad start marker"),
            Failure::BadResponseCode => {
                warn!(reason = %failure, code = frame.code, "Bad response code 0x{:02x}", frame.code)
            }
            Failure::BadEnd => warn!(reason = %failure, etx = frame.etx, "Bad end marker"),
            Failure::BadChecksum => warn!(
                reason = %failure,
                stored_crc = frame.crc,
                computed_crc = frame.computed_crc(),
                "Bad checksum"
            ),
        }
    }
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn on_failure(&self, _failure: Failure, _frame: &Frame) {}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn on_failure(&self, failure: Failure, frame: &Frame) {
        (**self).on_failure(failure, frame);
    }
}
