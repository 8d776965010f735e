//! # mcxcomm
//!
//! Frame codec and validator for the MallinCam camera control protocol.
//!
//! ## Features
//!
//! - Builds 19-byte `SET`/`GET` request frames with CRC-16
//! - Validates received frames and reports every failed condition
//! - Pluggable diagnostic sink (defaults to `tracing`)
//! - No I/O: the serial link belongs to the caller
//!
//! ## Quick Start
//!
//! ```
//! use mcxcomm::{build_get, dump, validate};
//!
//! // Ask the camera for item 0x05, subitem 0x01
//! let request = build_get(0x05, 0x01, 0x00);
//! println!("-> {}", dump(&request));
//!
//! // Pretend the camera answered with the same frame
//! let validation = validate(&request);
//! assert!(!validation.is_ok()); // GET is not a response code
//! ```

pub mod error;
pub mod sink;
pub mod validator;

// Re-exports
pub use error::{Error, Result};
pub use sink::{DiagnosticSink, NullSink, TracingSink};
pub use validator::{Validation, Validator};

// Re-export core types
pub use mcxcomm_core::{
    Command, FRAME_LEN, Failure, Failures, Frame, Response, checksum, constants,
};

/// Build a "set" frame ready to transmit
///
/// Payloads shorter than 13 bytes are zero-filled, longer ones truncated.
pub fn build_set(item: u8, data: &[u8]) -> [u8; FRAME_LEN] {
    Frame::set(item, data).encode()
}

/// Build a "get" frame ready to transmit
pub fn build_get(item: u8, subitem: u8, subsubitem: u8) -> [u8; FRAME_LEN] {
    Frame::get(item, subitem, subsubitem).encode()
}

/// Validate a received frame, logging failures through `tracing`
pub fn validate(bytes: &[u8; FRAME_LEN]) -> Validation {
    Validator::new().validate(bytes)
}

/// Render every field of a frame in hex, valid or not
pub fn dump(bytes: &[u8; FRAME_LEN]) -> String {
    Frame::decode(bytes).to_string()
}

/// Render a buffer of any length, for traffic that could not be framed
pub fn dump_raw(bytes: &[u8]) -> String {
    match Frame::try_from(bytes) {
        Ok(frame) => frame.to_string(),
        Err(_) => format!("len={} raw={}", bytes.len(), hex::encode(bytes)),
    }
}
