//! Protocol constants
//!
//! Wire layout of a frame:
//!
//! ```text
//! ┌─────┬──────────┬──────┬──────────────┬─────┬────────┬────────┐
//! │ STX │ CMD/RSP  │ CTRL │     DATA     │ ETX │ CRC_HI │ CRC_LO │
//! │  1  │    1     │  1   │      13      │  1  │   1    │   1    │
//! └─────┴──────────┴──────┴──────────────┴─────┴────────┴────────┘
//!        └──────────── CRC-16 range ─────────────┘
//! ```

use std::ops::Range;

/// Start-of-frame marker
pub const STX: u8 = 0x02;

/// End-of-frame marker
pub const ETX: u8 = 0x03;

/// Total frame length in bytes
pub const FRAME_LEN: usize = 19;

/// Payload width in bytes
pub const DATA_LEN: usize = 13;

/// Byte offsets within a serialized frame
pub mod offset {
    pub const STX: usize = 0;
    pub const CODE: usize = 1;
    pub const CTRL: usize = 2;
    pub const DATA: usize = 3;
    pub const ETX: usize = DATA + super::DATA_LEN;
    pub const CRC_HI: usize = ETX + 1;
    pub const CRC_LO: usize = CRC_HI + 1;
}

/// Bytes covered by the checksum: code through end-marker inclusive.
pub const CRC_RANGE: Range<usize> = offset::CODE..offset::CRC_HI;

/// Number of bytes covered by the checksum
pub const CRC_COVERED_LEN: usize = offset::CRC_HI - offset::CODE;

/// Undocumented response code some cameras send on success (seen on zoom
/// requests).
pub const RSP_UNDOCUMENTED: u8 = 0xA9;

const _: () = assert!(offset::CRC_LO + 1 == FRAME_LEN);
const _: () = assert!(CRC_COVERED_LEN == 16);
