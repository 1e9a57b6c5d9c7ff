//! Edge case integration tests for the KLV stream parser.
//!
//! These cover the behaviors that make the parser safe on hostile or
//! damaged streams:
//!
//! - **Key cap**: a BER-OID key must terminate within 4 bytes; one that
//!   does not ends the sequence without consuming the stream behind it.
//!
//! - **Zero-length values**: a length of 0 (short form or an empty long
//!   form) yields an element with an empty value, not a skipped element.
//!
//! - **Truncation**: an element whose declared length exceeds the bytes
//!   actually available produces no triplet at all; the sequence simply
//!   ends, indistinguishable from clean end-of-data.
//!
//! - **Oversized lengths**: a long-form length with more significant
//!   octets than a u64 can hold is malformed and ends the sequence.
//!
//! - **Terminal state**: every failure latches the parser; later pulls
//!   return nothing even when the source still holds readable bytes.

use klv_parser::{KeyFormat, StreamParser, Triplet};

// ── BER-OID key handling ─────────────────────────────────────────────────────

#[test]
fn oid_key_single_byte() {
    let mut parser = StreamParser::from_bytes(vec![0x05, 0x01, 0xAA], KeyFormat::BerOid);

    let triplet = parser.next_triplet().unwrap();
    assert_eq!(triplet.key, vec![0x05]);
}

#[test]
fn oid_key_accumulates_across_bytes() {
    // 0x81 0x00: acc = 1, then acc = (1 << 7) | 0 = 128
    let mut parser = StreamParser::from_bytes(vec![0x81, 0x00, 0x01, 0xAA], KeyFormat::BerOid);

    let triplet = parser.next_triplet().unwrap();
    assert_eq!(triplet.key, vec![0x80]);
}

#[test]
fn oid_key_unterminated_ends_sequence() {
    // Four continuation bytes, then a perfectly valid element that must
    // never be reached
    let stream = vec![0x81, 0x81, 0x81, 0x81, 0x05, 0x01, 0xAA];
    let parser = StreamParser::from_bytes(stream, KeyFormat::BerOid);

    assert_eq!(parser.count(), 0);
}

#[test]
fn oid_key_terminating_on_fourth_byte_is_valid() {
    // 0x81 0x81 0x81 0x01 stays within the cap
    let stream = vec![0x81, 0x81, 0x81, 0x01, 0x01, 0xAA];
    let mut parser = StreamParser::from_bytes(stream, KeyFormat::BerOid);

    let triplet = parser.next_triplet().unwrap();
    let expected = (((((1u64 << 7) | 1) << 7) | 1) << 7) | 1;
    assert_eq!(triplet.key, klv_wire::bytes::int_to_be_bytes(expected));
    assert_eq!(triplet.value, vec![0xAA]);
}

// ── Zero-length values ───────────────────────────────────────────────────────

#[test]
fn zero_length_value_is_emitted() {
    let mut parser = StreamParser::from_bytes(vec![0x05, 0x00], KeyFormat::BerOid);

    let triplet = parser.next_triplet().unwrap();
    assert_eq!(triplet.key, vec![0x05]);
    assert!(triplet.value.is_empty());
    assert!(parser.next_triplet().is_none());
}

#[test]
fn long_form_with_zero_octets_is_zero_length() {
    let mut parser = StreamParser::from_bytes(vec![0x05, 0x80, 0x05, 0x00], KeyFormat::BerOid);

    let first = parser.next_triplet().unwrap();
    assert!(first.value.is_empty());

    // The stream continues normally after the empty element
    let second = parser.next_triplet().unwrap();
    assert!(second.value.is_empty());
    assert!(parser.next_triplet().is_none());
}

#[test]
fn empty_stream_yields_nothing() {
    let parser = StreamParser::from_bytes(Vec::new(), KeyFormat::BerOid);
    assert_eq!(parser.count(), 0);
}

// ── Truncation ───────────────────────────────────────────────────────────────

#[test]
fn truncated_value_yields_no_triplet() {
    // Length claims 10 bytes, only 5 are available
    let stream = vec![0x05, 0x0A, 0x01, 0x02, 0x03, 0x04, 0x05];
    let mut parser = StreamParser::from_bytes(stream, KeyFormat::BerOid);

    assert!(parser.next_triplet().is_none());
    assert!(parser.next_triplet().is_none());
}

#[test]
fn valid_element_before_truncated_tail_is_kept() {
    let stream = vec![
        0x08, 0x03, 0xAA, 0xBB, 0xCC, // complete element
        0x09, 0x0A, 0xDE, 0xAD, 0xBE, 0xEF, // claims 10 bytes, has 4
    ];
    let parser = StreamParser::from_bytes(stream, KeyFormat::BerOid);
    let triplets: Vec<Triplet> = parser.collect();

    assert_eq!(triplets.len(), 1);
    assert_eq!(triplets[0].key, vec![0x08]);
    assert_eq!(triplets[0].value, vec![0xAA, 0xBB, 0xCC]);
}

#[test]
fn truncated_fixed_key_yields_no_triplet() {
    // Only 3 bytes remain for a 16-byte key; the short key read is
    // accepted but the stream exhausts inside the length field
    let stream = vec![0x06, 0x0E, 0x2B];
    let parser = StreamParser::from_bytes(stream, KeyFormat::Fixed(16));

    assert_eq!(parser.count(), 0);
}

// ── Oversized lengths ────────────────────────────────────────────────────────

#[test]
fn length_overflowing_u64_ends_sequence() {
    // Long form declaring nine significant octets
    let mut stream = vec![0x05, 0x89];
    stream.extend_from_slice(&[0x01; 9]);
    stream.extend_from_slice(&[0xAA; 16]);

    let parser = StreamParser::from_bytes(stream, KeyFormat::BerOid);
    assert_eq!(parser.count(), 0);
}

#[test]
fn huge_declared_length_terminates_cleanly() {
    // Eight octets of 0xFF declare a u64::MAX-byte value; the source
    // holds almost nothing
    let mut stream = vec![0x05, 0x88];
    stream.extend_from_slice(&[0xFF; 8]);
    stream.extend_from_slice(&[0xAA; 32]);

    let mut parser = StreamParser::from_bytes(stream, KeyFormat::BerOid);
    assert!(parser.next_triplet().is_none());
}

// ── Terminal state ───────────────────────────────────────────────────────────

#[test]
fn termination_survives_remaining_data() {
    // The malformed key latches the parser even though the bytes that
    // follow would form a valid element
    let stream = vec![0x81, 0x81, 0x81, 0x81, 0x05, 0x01, 0xAA];
    let mut parser = StreamParser::from_bytes(stream, KeyFormat::BerOid);

    assert!(parser.next_triplet().is_none());
    assert!(parser.next_triplet().is_none());
    assert!(parser.next_triplet().is_none());
}

#[test]
fn iterator_fuses_after_exhaustion() {
    let mut parser = StreamParser::from_bytes(vec![0x05, 0x00], KeyFormat::BerOid);

    assert!(parser.next().is_some());
    assert!(parser.next().is_none());
    assert!(parser.next().is_none());
}
