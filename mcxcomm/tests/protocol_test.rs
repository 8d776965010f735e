//! End-to-end checks of the public API against known wire bytes

use mcxcomm::constants::{CRC_RANGE, DATA_LEN, ETX, STX, offset};
use mcxcomm::{
    FRAME_LEN, Failure, Failures, Frame, NullSink, Validator, build_get, build_set, dump, validate,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Turn a request into the reply the camera would send with `code`
fn answer(request: [u8; FRAME_LEN], code: u8) -> [u8; FRAME_LEN] {
    let mut frame = Frame::decode(&request);
    frame.code = code;
    frame.seal();
    frame.encode()
}

#[test]
fn test_build_set_example() {
    let bytes = build_set(0x10, &[0x01, 0x02]);

    let mut expected = vec![STX, 0x21, 0x10, 0x01, 0x02];
    expected.extend_from_slice(&[0x00; DATA_LEN - 2]);
    expected.push(ETX);
    let crc = mcxcomm::checksum::calculate(&expected[CRC_RANGE]);
    expected.extend_from_slice(&crc.to_be_bytes());

    assert_eq!(bytes.to_vec(), expected);
    assert_eq!(&bytes[offset::CRC_HI..], &[0xC6, 0x8F]);
}

#[test]
fn test_build_get_payload() {
    let bytes = build_get(0x07, 0xAA, 0xBB);

    assert_eq!(bytes[offset::STX], STX);
    assert_eq!(bytes[offset::CODE], 0x31);
    assert_eq!(bytes[offset::CTRL], 0x07);
    assert_eq!(
        &bytes[offset::DATA..offset::ETX],
        &[0xAA, 0xBB, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(bytes[offset::ETX], ETX);
}

#[test]
fn test_validate_accepts_undocumented_code() {
    let validation = validate(&answer(build_set(0x30, &[0x05]), 0xA9));
    assert!(validation.is_ok());
}

#[test]
fn test_validate_rejects_ne1() {
    let validation = validate(&answer(build_set(0x30, &[0x05]), 0xA2));

    assert!(!validation.is_ok());
    assert_eq!(validation.failures(), Failures::BAD_RESPONSE_CODE);
}

#[test]
fn test_validate_corrupted_payload() {
    let mut bytes = answer(build_get(0x01, 0x02, 0x03), 0xA0);
    bytes[offset::DATA + 7] = 0x5A;

    let validation = Validator::new().with_sink(NullSink).validate(&bytes);
    assert_eq!(validation.failures(), Failures::BAD_CHECKSUM);
    assert!(validation.has(Failure::BadChecksum));
    assert_ne!(validation.stored_crc(), validation.computed_crc());
}

#[test]
fn test_validate_bad_end_also_breaks_checksum() {
    // ETX is inside the checksum range
    let mut bytes = answer(build_get(0x01, 0x02, 0x03), 0xA0);
    bytes[offset::ETX] = 0x00;

    let failures = validate(&bytes).failures();
    assert_eq!(failures, Failures::BAD_END | Failures::BAD_CHECKSUM);
}

#[test]
fn test_dump_garbage() {
    let bytes = [0xFF; FRAME_LEN];
    assert_eq!(
        dump(&bytes),
        "stx=ff cmd=ff ctrl=ff data=(ff ff ff ff ff ff ff ff ff ff ff ff ff) etx=ff crc=ffff"
    );
}

proptest! {
    #[test]
    fn prop_answered_set_validates(
        item in any::<u8>(),
        data in proptest::collection::vec(any::<u8>(), 0..=DATA_LEN),
        code in prop_oneof![Just(0xA0u8), Just(0xA3u8), Just(0xA9u8)],
    ) {
        let validation = Validator::new()
            .with_sink(NullSink)
            .validate(&answer(build_set(item, &data), code));
        prop_assert!(validation.is_ok());
    }

    #[test]
    fn prop_dump_field_count(bytes in proptest::array::uniform19(any::<u8>())) {
        let dump = dump(&bytes);
        prop_assert_eq!(dump.matches('=').count(), 6);
    }
}
