/// Encode a `u64` as its minimal big-endian byte representation.
///
/// Leading zero bytes are stripped, so the result never carries a zero
/// prefix; the value 0 itself encodes as the single byte `0x00`.
///
/// # Wire format examples
///
/// | Value  | Encoded bytes        |
/// |--------|----------------------|
/// | 0      | `[0x00]`             |
/// | 1      | `[0x01]`             |
/// | 255    | `[0xFF]`             |
/// | 256    | `[0x01, 0x00]`       |
/// | 300    | `[0x01, 0x2C]`       |
#[must_use]
pub fn int_to_be_bytes(value: u64) -> Vec<u8> {
    let raw = value.to_be_bytes();
    // For value 0 there is no nonzero byte; keep the last zero byte
    let start = raw.iter().position(|&b| b != 0).unwrap_or(raw.len() - 1);
    raw[start..].to_vec()
}

/// Interpret a byte slice as a big-endian unsigned integer.
///
/// An empty slice decodes to 0. Leading zero bytes are ignored.
///
/// # Returns
///
/// `None` when more than 8 significant bytes remain after stripping leading
/// zeros, i.e. the value would not fit a `u64`.
#[must_use]
pub fn be_bytes_to_int(bytes: &[u8]) -> Option<u64> {
    let significant = match bytes.iter().position(|&b| b != 0) {
        Some(first) => &bytes[first..],
        None => return Some(0),
    };

    if significant.len() > 8 {
        return None;
    }

    let mut value: u64 = 0;
    for &byte in significant {
        value = (value << 8) | u64::from(byte);
    }
    Some(value)
}
