//! MallinCam frame checksum
//!
//! The camera firmware uses the classic CRC-16 (also known as CRC-16/ARC
//! or CRC-16/IBM):
//! 1. Polynomial x^16 + x^15 + x^2 + 1 (0x8005), processed LSB first (0xA001)
//! 2. Initial value 0x0000
//! 3. Input and output reflected, no final XOR
//!
//! The value is stored big-endian in the last two bytes of the frame.

use tracing::trace;

use crate::constants::{CRC_RANGE, FRAME_LEN};

/// Reflected form of polynomial 0x8005
const POLY_REFLECTED: u16 = 0xA001;

/// Initial register value
const INIT: u16 = 0x0000;

/// Calculate CRC-16 over arbitrary bytes
///
/// # Algorithm
///
/// ```text
/// crc = 0
/// for each byte:
///     crc ^= byte
///     repeat 8 times:
///         crc = (crc & 1) ? (crc >> 1) ^ 0xA001 : crc >> 1
/// ```
///
/// # Examples
///
/// ```
/// use mcxcomm_core::checksum;
///
/// assert_eq!(checksum::calculate(b"123456789"), 0xBB3D);
/// ```
pub fn calculate(bytes: &[u8]) -> u16 {
    let mut crc = INIT;

    for &byte in bytes {
        crc ^= u16::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ POLY_REFLECTED
            } else {
                crc >> 1
            };
        }
    }

    trace!(
        len = bytes.len(),
        checksum = format!("0x{:04X}", crc),
        "Calculated checksum"
    );

    crc
}

/// Verify checksum
pub fn verify(bytes: &[u8], expected: u16) -> bool {
    calculate(bytes) == expected
}

/// Checksum of a serialized frame over its covered range (code through ETX)
pub fn frame_crc(frame: &[u8; FRAME_LEN]) -> u16 {
    calculate(&frame[CRC_RANGE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CRC_COVERED_LEN, offset};
    use proptest::prelude::*;

    const REFERENCE: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_ARC);

    #[test]
    fn test_checksum_check_value() {
        assert_eq!(calculate(b"123456789"), 0xBB3D);
    }

    #[test]
    fn test_checksum_empty() {
        assert_eq!(calculate(&[]), 0x0000);
    }

    #[test]
    fn test_checksum_verify() {
        let body = [0x21, 0x10, 0x01, 0x02];
        let checksum = calculate(&body);

        assert!(verify(&body, checksum));
        assert!(!verify(&body, checksum.wrapping_add(1)));
    }

    #[test]
    fn test_frame_crc_skips_markers_and_crc() {
        let mut frame = [0u8; FRAME_LEN];
        frame[offset::CODE] = 0x21;
        frame[offset::ETX] = 0x03;
        let base = frame_crc(&frame);

        // STX and the checksum bytes are outside the covered range
        frame[offset::STX] = 0xFF;
        frame[offset::CRC_HI] = 0xAA;
        frame[offset::CRC_LO] = 0x55;
        assert_eq!(frame_crc(&frame), base);

        frame[offset::ETX] = 0x04;
        assert_ne!(frame_crc(&frame), base);
    }

    proptest! {
        #[test]
        fn prop_matches_reference_crc(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(calculate(&bytes), REFERENCE.checksum(&bytes));
        }

        #[test]
        fn prop_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(calculate(&bytes), calculate(&bytes));
        }

        #[test]
        fn prop_single_byte_change_detected(
            body in proptest::array::uniform16(any::<u8>()),
            index in 0usize..CRC_COVERED_LEN,
            flip in 1u8..=255,
        ) {
            let mut corrupted = body;
            corrupted[index] ^= flip;
            prop_assert_ne!(calculate(&body), calculate(&corrupted));
        }
    }
}
