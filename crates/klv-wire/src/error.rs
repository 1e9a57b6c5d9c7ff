#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// BER-OID key exceeded 4 bytes without a terminating byte.
    #[error("BER-OID key too long: no terminator within 4-byte limit")]
    OidTooLong,

    /// Input ended before a complete key or length field could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// Long-form length field encodes a value outside the u64 range.
    #[error("length field too large: {octets} octets exceed u64 range")]
    LengthOverflow { octets: usize },
}
