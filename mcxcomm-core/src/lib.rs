//! # mcxcomm-core
//!
//! Core protocol implementation for the MallinCam camera control link.
//!
//! This crate provides the low-level protocol primitives:
//! - Frame layout and encoding/decoding
//! - CRC-16 calculation
//! - Command and response code definitions
//! - Validation failure reasons
//!
//! Nothing here touches a serial port. Callers hand in raw 19-byte buffers
//! and get frames or verdicts back.

pub mod checksum;
pub mod command;
pub mod constants;
pub mod error;
pub mod failure;
pub mod frame;

pub use command::{Command, Response};
pub use constants::FRAME_LEN;
pub use error::{Error, Result};
pub use failure::{Failure, Failures};
pub use frame::Frame;
