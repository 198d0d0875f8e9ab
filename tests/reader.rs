mod common;

use std::io::Read;

use cryptal_rand::rng::{BufferedReader, DEFAULT_CAPACITY, RandomError, ReaderConfig};
use proptest::prelude::*;
use rand_core::RngCore;

use common::{cycling_reader, failing_reader, os_reader};

#[test]
fn open_uses_default_capacity() {
    let reader = os_reader();
    assert_eq!(reader.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn open_rejects_zero_capacity() {
    let result = BufferedReader::open(ReaderConfig::with_capacity(0));
    assert!(matches!(result, Err(RandomError::InvalidSize)));
}

#[test]
fn open_fails_when_initial_fill_fails() {
    let result = failing_reader(16, 0);
    assert!(matches!(result, Err(RandomError::EntropyUnavailable(_))));
}

#[test]
fn read_byte_refills_small_buffer() {
    let reader = BufferedReader::open(ReaderConfig::with_capacity(8)).unwrap();
    for _ in 0..100 {
        reader.read_byte().unwrap();
    }
}

#[test]
fn read_byte_serves_stream_in_order_across_refills() {
    let reader = cycling_reader(4);
    let bytes: Vec<u8> = (0..10).map(|_| reader.read_byte().unwrap()).collect();
    assert_eq!(bytes, (0..10).collect::<Vec<u8>>());
}

#[test]
fn read_exact_spans_several_refills() {
    let reader = cycling_reader(4);

    let mut first = [0u8; 3];
    reader.read_exact(&mut first).unwrap();
    assert_eq!(first, [0, 1, 2]);

    let mut second = [0u8; 10];
    reader.read_exact(&mut second).unwrap();
    assert_eq!(second, [3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
}

#[test]
fn read_exact_zero_length_consumes_nothing() {
    let reader = cycling_reader(4);
    reader.read_exact(&mut []).unwrap();
    assert_eq!(reader.read_byte().unwrap(), 0);
}

#[test]
fn read_range_stays_in_bounds() {
    let reader = os_reader();
    let mut buf = [0u8; 256];
    reader.read_range(&mut buf, 10, 20).unwrap();
    assert!(buf.iter().all(|b| (10..=20).contains(b)));
}

#[test]
fn read_range_rejects_out_of_range_bytes() {
    // 0..=9 and 13..=255 are discarded, then the stream wraps.
    let reader = cycling_reader(256);
    let mut buf = [0u8; 5];
    reader.read_range(&mut buf, 10, 12).unwrap();
    assert_eq!(buf, [10, 11, 12, 10, 11]);
}

#[test]
fn read_range_single_value() {
    let reader = os_reader();
    let mut buf = [0u8; 8];
    reader.read_range(&mut buf, 0x7F, 0x7F).unwrap();
    assert_eq!(buf, [0x7F; 8]);
}

#[test]
fn read_range_invalid_range_fails_before_reading() {
    let reader = cycling_reader(4);
    let result = reader.read_range(&mut [0u8; 5], 20, 10);
    assert!(matches!(result, Err(RandomError::InvalidRange { lo: 20, hi: 10 })));
    assert_eq!(reader.read_byte().unwrap(), 0);
}

#[test]
fn read_range_zero_length() {
    let reader = os_reader();
    reader.read_range(&mut [], 0, 255).unwrap();
}

#[test]
fn bytes_returns_requested_length() {
    let reader = os_reader();
    assert_eq!(reader.bytes(1000).unwrap().len(), 1000);
    assert!(matches!(reader.bytes(0), Err(RandomError::InvalidLength)));
}

#[test]
fn refill_failure_is_reported_and_sticky() {
    let reader = failing_reader(4, 1).unwrap();

    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).unwrap();
    assert_eq!(buf, [0xA5; 4]);

    assert!(matches!(reader.read_byte(), Err(RandomError::EntropyUnavailable(_))));
    assert!(matches!(
        reader.read_exact(&mut buf),
        Err(RandomError::EntropyUnavailable(_))
    ));
    assert!(reader.bytes(1).is_err());
}

#[test]
fn io_read_fills_whole_buffer() {
    let reader = cycling_reader(4);
    let mut handle = &reader;
    let mut buf = [0u8; 6];
    let n = handle.read(&mut buf).unwrap();
    assert_eq!(n, 6);
    assert_eq!(buf, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn io_read_surfaces_entropy_errors() {
    let reader = failing_reader(2, 1).unwrap();
    let mut handle = &reader;
    let mut buf = [0u8; 4];
    assert!(handle.read(&mut buf).is_err());
}

#[test]
fn rng_core_adapter_draws_from_stream() {
    let reader = cycling_reader(8);
    let mut rng = &reader;
    assert_eq!(rng.next_u32(), u32::from_le_bytes([0, 1, 2, 3]));

    let mut buf = [0u8; 2];
    rng.try_fill_bytes(&mut buf).unwrap();
    assert_eq!(buf, [4, 5]);
}

#[test]
fn rng_core_try_fill_reports_failure() {
    let reader = failing_reader(2, 1).unwrap();
    let mut rng = &reader;
    assert!(rng.try_fill_bytes(&mut [0u8; 3]).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn read_range_respects_any_valid_range(a in any::<u8>(), b in any::<u8>(), n in 1usize..64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let reader = cycling_reader(64);
        let mut buf = vec![0u8; n];
        reader.read_range(&mut buf, lo, hi).unwrap();
        prop_assert!(buf.iter().all(|&x| x >= lo && x <= hi));
    }

    #[test]
    fn read_exact_never_short(capacity in 1usize..32, n in 0usize..200) {
        let reader = cycling_reader(capacity);
        let mut buf = vec![0u8; n];
        reader.read_exact(&mut buf).unwrap();
        let expected: Vec<u8> = (0..n).map(|i| i as u8).collect();
        prop_assert_eq!(buf, expected);
    }
}
