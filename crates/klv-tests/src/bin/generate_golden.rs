//! Golden fixture generator for the KLV conformance test suite.
//!
//! This binary creates all fixture files under `tests/golden/`. Run it once
//! after changing fixture content to regenerate the committed hex streams.
//! Snapshot files (`.snap`) are updated separately via `cargo insta review`
//! after running the conformance tests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p klv-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory        | Contents                                           |
//! |------------------|----------------------------------------------------|
//! | uas_local_set    | Five BER-OID tagged elements (ST 0601 style)       |
//! | universal_key    | 16-byte universal key wrapping the local set       |
//! | long_form_length | 300-byte value behind a two-octet long-form length |
//! | truncated_tail   | Complete element, then one cut off mid-value       |

#![allow(clippy::pedantic)]

use std::path::Path;

use klv_wire::bytes::int_to_be_bytes;

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    generate_uas_local_set(&golden_dir);
    generate_universal_key(&golden_dir);
    generate_long_form_length(&golden_dir);
    generate_truncated_tail(&golden_dir);

    println!("All golden fixtures written to {}", golden_dir.display());
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_hex(dir: &Path, stream: &[u8]) {
    std::fs::create_dir_all(dir).expect("create_dir_all");
    let path = dir.join("payload.hex");
    let mut text = hex::encode(stream);
    text.push('\n');
    std::fs::write(&path, text).expect("write payload.hex");
    println!("  wrote {}", path.display());
}

fn ber_length(len: usize) -> Vec<u8> {
    if len < 128 {
        return vec![len as u8];
    }
    let octets = int_to_be_bytes(len as u64);
    let mut out = vec![0x80 | octets.len() as u8];
    out.extend_from_slice(&octets);
    out
}

fn element(key: &[u8], value: &[u8]) -> Vec<u8> {
    let mut out = key.to_vec();
    out.extend_from_slice(&ber_length(value.len()));
    out.extend_from_slice(value);
    out
}

/// The ST 0601 UAS Datalink universal key.
const UNIVERSAL_KEY: [u8; 16] = [
    0x06, 0x0E, 0x2B, 0x34, 0x02, 0x0B, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x01,
    0x01, 0x00, 0x00, 0x00,
];

/// The ST 0601-style local set shared by two fixtures: precision
/// timestamp, mission ID, sensor latitude/longitude, checksum.
fn local_set() -> Vec<u8> {
    let mut stream = Vec::new();
    stream.extend_from_slice(&element(
        &[0x02],
        &[0x00, 0x04, 0x59, 0xF4, 0xA6, 0xAA, 0x4A, 0xA8],
    ));
    stream.extend_from_slice(&element(&[0x03], b"MISSN1"));
    stream.extend_from_slice(&element(&[0x0D], &[0x55, 0x95, 0xB6, 0x6D]));
    stream.extend_from_slice(&element(&[0x0E], &[0x5B, 0x53, 0x60, 0xC4]));
    stream.extend_from_slice(&element(&[0x01], &[0xAA, 0x43]));
    stream
}

// ── Fixture generators ───────────────────────────────────────────────────────

fn generate_uas_local_set(golden: &Path) {
    write_hex(&golden.join("uas_local_set"), &local_set());
}

fn generate_universal_key(golden: &Path) {
    let packet = element(&UNIVERSAL_KEY, &local_set());
    write_hex(&golden.join("universal_key"), &packet);
}

fn generate_long_form_length(golden: &Path) {
    let ramp: Vec<u8> = (0..300).map(|i| (i % 256) as u8).collect();
    let mut stream = element(&[0x06], &ramp);
    stream.extend_from_slice(&element(&[0x07], &[]));
    write_hex(&golden.join("long_form_length"), &stream);
}

fn generate_truncated_tail(golden: &Path) {
    let mut stream = element(&[0x08], &[0xAA, 0xBB, 0xCC]);
    // Second element claims ten value bytes but the stream stops after four
    stream.extend_from_slice(&[0x09, 0x0A, 0xDE, 0xAD, 0xBE, 0xEF]);
    write_hex(&golden.join("truncated_tail"), &stream);
}
