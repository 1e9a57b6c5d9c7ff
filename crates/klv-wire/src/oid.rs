use crate::error::WireError;

/// Maximum number of bytes a BER-OID key may occupy.
/// The cap bounds work on malformed input; four 7-bit groups cover 28 bits.
pub const MAX_OID_KEY_BYTES: usize = 4;

/// Decode a BER object identifier key from the provided byte slice.
///
/// Each byte contributes its low 7 bits to the accumulator, most
/// significant group first; a set high bit means another byte follows.
///
/// # Returns
///
/// `(decoded_key, bytes_consumed)` on success.
///
/// # Errors
///
/// - [`WireError::OidTooLong`] if no byte within the first 4 has the high
///   bit clear.
/// - [`WireError::UnexpectedEof`] if the slice ends mid-key before the cap
///   is reached.
///
/// # Wire format examples
///
/// | Bytes                      | Key   |
/// |----------------------------|-------|
/// | `[0x05]`                   | 5     |
/// | `[0x7F]`                   | 127   |
/// | `[0x81, 0x00]`             | 128   |
/// | `[0xFF, 0x7F]`             | 16383 |
pub fn decode_ber_oid(buf: &[u8]) -> Result<(u64, usize), WireError> {
    let mut acc: u64 = 0;

    for (i, &byte) in buf.iter().enumerate().take(MAX_OID_KEY_BYTES) {
        // Shift in the 7 data bits
        acc = (acc << 7) | u64::from(byte & 0x7F);

        // High bit clear marks the final byte
        if byte & 0x80 == 0 {
            return Ok((acc, i + 1));
        }
    }

    if buf.len() >= MAX_OID_KEY_BYTES {
        Err(WireError::OidTooLong)
    } else {
        Err(WireError::UnexpectedEof { offset: buf.len() })
    }
}
