use crate::bytes::be_bytes_to_int;
use crate::error::WireError;

/// Decode a BER length field from the provided byte slice.
///
/// A prefix byte below 0x80 is the length itself (short form). Otherwise
/// the low 7 bits of the prefix give the count of following big-endian
/// length octets (long form). A long form declaring zero octets decodes to
/// length 0.
///
/// # Returns
///
/// `(length, bytes_consumed)` on success.
///
/// # Errors
///
/// - [`WireError::UnexpectedEof`] if the slice ends mid-field.
/// - [`WireError::LengthOverflow`] if the length octets encode a value
///   outside the u64 range.
///
/// # Wire format examples
///
/// | Bytes                | Length |
/// |----------------------|--------|
/// | `[0x00]`             | 0      |
/// | `[0x7F]`             | 127    |
/// | `[0x81, 0x80]`       | 128    |
/// | `[0x82, 0x01, 0x2C]` | 300    |
pub fn decode_ber_length(buf: &[u8]) -> Result<(u64, usize), WireError> {
    let Some(&prefix) = buf.first() else {
        return Err(WireError::UnexpectedEof { offset: 0 });
    };

    // Short form: bit 7 clear, the prefix is the length
    if prefix & 0x80 == 0 {
        return Ok((u64::from(prefix), 1));
    }

    let octets = usize::from(prefix & 0x7F);
    let end = 1 + octets;
    if buf.len() < end {
        return Err(WireError::UnexpectedEof { offset: buf.len() });
    }

    match be_bytes_to_int(&buf[1..end]) {
        Some(length) => Ok((length, end)),
        None => Err(WireError::LengthOverflow { octets }),
    }
}
