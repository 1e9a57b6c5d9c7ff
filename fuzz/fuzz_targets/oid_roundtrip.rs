#![no_main]

use libfuzzer_sys::fuzz_target;

// Encode an identifier as BER-OID bytes: seven payload bits per byte,
// high bit set on every byte except the last.
fn encode_ber_oid(mut value: u64) -> Vec<u8> {
    let mut out = vec![(value & 0x7F) as u8];
    value >>= 7;
    while value > 0 {
        out.insert(0, (value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    out
}

// Fuzz target: BER-OID encode->decode roundtrip.
//
// Takes 4 bytes of fuzz input, interprets as a u32 masked to the 28-bit
// key ceiling, encodes it as BER-OID bytes, then decodes it and asserts
// the value matches.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let value = u64::from(u32::from_le_bytes(data[..4].try_into().unwrap()) & 0x0FFF_FFFF);

    let encoded = encode_ber_oid(value);

    let (decoded, consumed) = klv_wire::oid::decode_ber_oid(&encoded).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(consumed, encoded.len());
});
