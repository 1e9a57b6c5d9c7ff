#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: decode_ber_length short/long form codec.
//
// Catches bugs in:
// - Truncated long-form octet runs
// - Zero-octet long form (0x80)
// - LengthOverflow (>8 significant octets)
// - Maximum value edge cases (u64::MAX)
fuzz_target!(|data: &[u8]| {
    let _ = klv_wire::length::decode_ber_length(data);
});
