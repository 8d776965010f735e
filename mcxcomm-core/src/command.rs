//! MallinCam command and response code definitions

use std::fmt;

use crate::constants::RSP_UNDOCUMENTED;
use crate::error::{Error, Result};

/// Request codes (from host to camera)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Write a camera parameter
    Set = 0x21,

    /// Read a camera parameter
    Get = 0x31,
}

impl Command {
    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::Set => "CMD_SET",
            Self::Get => "CMD_GET",
        }
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x21 => Ok(Self::Set),
            0x31 => Ok(Self::Get),
            _ => Err(Error::UnknownCommand(value)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}

/// Response codes (from camera to host)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Response {
    Ok = 0xA0,
    Ne1 = 0xA2,
    Ne2 = 0xA3,
    Fail = 0xA4,
    Other = 0xA5,

    /// Not in the protocol documentation, but sent by some cameras
    /// in reply to zoom requests
    Undocumented = RSP_UNDOCUMENTED,
}

impl Response {
    /// Check if the camera treats this as a successful reply
    ///
    /// Only `OK`, `NE2` and the undocumented 0xA9 pass. `NE1`, `FAIL` and
    /// `OTHER` are rejected.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Ok | Self::Ne2 | Self::Undocumented)
    }

    /// Get response name
    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "RSP_OK",
            Self::Ne1 => "RSP_NE1",
            Self::Ne2 => "RSP_NE2",
            Self::Fail => "RSP_FAIL",
            Self::Other => "RSP_OTHER",
            Self::Undocumented => "RSP_UNDOCUMENTED",
        }
    }
}

/// Check a raw response byte against the accepted set
pub fn is_accepted_code(code: u8) -> bool {
    Response::try_from(code).is_ok_and(Response::is_accepted)
}

impl From<Response> for u8 {
    fn from(rsp: Response) -> u8 {
        rsp as u8
    }
}

impl TryFrom<u8> for Response {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0xA0 => Ok(Self::Ok),
            0xA2 => Ok(Self::Ne1),
            0xA3 => Ok(Self::Ne2),
            0xA4 => Ok(Self::Fail),
            0xA5 => Ok(Self::Other),
            RSP_UNDOCUMENTED => Ok(Self::Undocumented),
            _ => Err(Error::UnknownResponse(value)),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}
