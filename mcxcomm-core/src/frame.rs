//! MallinCam frame structure and encoding/decoding

use bytes::{Buf, BufMut};
use std::fmt;
use tracing::trace;

use crate::{
    checksum,
    command::{self, Command, Response},
    constants::{DATA_LEN, ETX, FRAME_LEN, STX},
    error::{Error, Result},
    failure::Failures,
};

/// MallinCam protocol frame
///
/// # Frame Structure
///
/// ```text
/// ┌─────┬─────────┬──────┬───────────┬─────┬─────────────┐
/// │ STX │ CMD/RSP │ CTRL │   DATA    │ ETX │   CRC-16    │
/// │  1  │    1    │  1   │ 13 bytes  │  1  │ 2 (BE u16)  │
/// └─────┴─────────┴──────┴───────────┴─────┴─────────────┘
/// ```
///
/// Every field is kept exactly as it sits on the wire so a received frame
/// can be inspected (and dumped) even when it is malformed.
///
/// # Examples
///
/// ```
/// use mcxcomm_core::Frame;
///
/// let frame = Frame::set(0x10, &[0x01, 0x02]);
/// let bytes = frame.encode();
///
/// assert_eq!(bytes.len(), 19);
/// assert_eq!(Frame::decode(&bytes), frame);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Start marker
    pub stx: u8,

    /// Command code (outgoing) or response code (incoming)
    pub code: u8,

    /// Item identifier the frame addresses
    pub ctrl: u8,

    /// Fixed-width payload
    pub data: [u8; DATA_LEN],

    /// End marker
    pub etx: u8,

    /// Checksum as stored in the frame
    pub crc: u16,
}

impl Frame {
    /// Build a sealed request frame
    ///
    /// `data` is copied from payload offset 0; missing bytes are zero and
    /// anything past [`DATA_LEN`] bytes is dropped.
    pub fn build(command: Command, item: u8, data: &[u8]) -> Self {
        let len = data.len().min(DATA_LEN);
        if data.len() > DATA_LEN {
            trace!(
                item = item,
                supplied = data.len(),
                kept = DATA_LEN,
                "Truncating payload"
            );
        }

        let mut payload = [0u8; DATA_LEN];
        payload[..len].copy_from_slice(&data[..len]);

        let mut frame = Self {
            stx: STX,
            code: command.into(),
            ctrl: item,
            data: payload,
            etx: ETX,
            crc: 0,
        };
        frame.seal();
        frame
    }

    /// Build a "set" frame
    ///
    /// Never fails: over-long payloads are truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcxcomm_core::Frame;
    ///
    /// let frame = Frame::set(0x10, &[0x01, 0x02]);
    /// assert_eq!(&frame.data[..3], &[0x01, 0x02, 0x00]);
    /// ```
    pub fn set(item: u8, data: &[u8]) -> Self {
        Self::build(Command::Set, item, data)
    }

    /// Build a "get" frame
    ///
    /// The payload is `[subitem, subsubitem]` followed by zeros.
    pub fn get(item: u8, subitem: u8, subsubitem: u8) -> Self {
        Self::build(Command::Get, item, &[subitem, subsubitem])
    }

    /// Recompute and store the checksum over the current fields
    pub fn seal(&mut self) {
        self.crc = self.computed_crc();
    }

    /// Checksum computed from the current fields (code through ETX)
    pub fn computed_crc(&self) -> u16 {
        checksum::frame_crc(&self.encode())
    }

    /// Encode frame to bytes
    ///
    /// The stored checksum is written as-is; use [`Frame::seal`] first if
    /// fields were changed by hand.
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let mut out = [0u8; FRAME_LEN];
        let mut buf = &mut out[..];

        buf.put_u8(self.stx);
        buf.put_u8(self.code);
        buf.put_u8(self.ctrl);
        buf.put_slice(&self.data);
        buf.put_u8(self.etx);
        buf.put_u16(self.crc);

        out
    }

    /// Decode frame from bytes
    ///
    /// No validation is performed; see [`Frame::check`].
    pub fn decode(bytes: &[u8; FRAME_LEN]) -> Self {
        let mut buf = &bytes[..];

        let stx = buf.get_u8();
        let code = buf.get_u8();
        let ctrl = buf.get_u8();
        let mut data = [0u8; DATA_LEN];
        buf.copy_to_slice(&mut data);
        let etx = buf.get_u8();
        let crc = buf.get_u16();

        Self {
            stx,
            code,
            ctrl,
            data,
            etx,
            crc,
        }
    }

    /// Check a received frame
    ///
    /// Evaluates all four conditions independently and returns every one
    /// that failed. Request codes (`SET`/`GET`) are not valid responses, so
    /// checking an outgoing frame reports [`Failures::BAD_RESPONSE_CODE`].
    pub fn check(&self) -> Failures {
        self.check_with_crc().0
    }

    /// Same as [`Frame::check`], also returning the computed checksum
    pub fn check_with_crc(&self) -> (Failures, u16) {
        let computed_crc = self.computed_crc();
        let mut failures = Failures::empty();

        if self.stx != STX {
            failures |= Failures::BAD_START;
        }

        if !command::is_accepted_code(self.code) {
            failures |= Failures::BAD_RESPONSE_CODE;
        }

        if self.etx != ETX {
            failures |= Failures::BAD_END;
        }

        if self.crc != computed_crc {
            failures |= Failures::BAD_CHECKSUM;
        }

        (failures, computed_crc)
    }

    /// Check if the frame passes every condition
    pub fn is_valid(&self) -> bool {
        self.check().is_empty()
    }

    /// Interpret the code byte as a request code
    pub fn command(&self) -> Result<Command> {
        Command::try_from(self.code)
    }

    /// Interpret the code byte as a response code
    pub fn response(&self) -> Result<Response> {
        Response::try_from(self.code)
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; FRAME_LEN] = bytes.try_into().map_err(|_| Error::FrameLength {
            expected: FRAME_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self::decode(bytes))
    }
}

impl From<&[u8; FRAME_LEN]> for Frame {
    fn from(bytes: &[u8; FRAME_LEN]) -> Self {
        Self::decode(bytes)
    }
}

impl From<Frame> for [u8; FRAME_LEN] {
    fn from(frame: Frame) -> Self {
        frame.encode()
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("stx", &format!("0x{:02X}", self.stx))
            .field("code", &format!("0x{:02X}", self.code))
            .field("ctrl", &format!("0x{:02X}", self.ctrl))
            .field("data", &hex::encode(self.data))
            .field("etx", &format!("0x{:02X}", self.etx))
            .field("crc", &format!("0x{:04X}", self.crc))
            .finish()
    }
}

/// Fixed one-line dump of every field, for traffic logs
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stx={:02x} cmd={:02x} ctrl={:02x} data=(",
            self.stx, self.code, self.ctrl
        )?;
        for (i, byte) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        write!(f, ") etx={:02x} crc={:04x}", self.etx, self.crc)
    }
}
