#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: decode_ber_oid variable-length key codec.
//
// Catches bugs in:
// - OidTooLong (4 continuation bytes without a terminator)
// - Zero-length input
// - Truncated keys mid-continuation
// - Accumulator shifts at the 28-bit ceiling
fuzz_target!(|data: &[u8]| {
    let _ = klv_wire::oid::decode_ber_oid(data);
});
