use std::io::{Cursor, ErrorKind, Read};

use klv_wire::bytes::{be_bytes_to_int, int_to_be_bytes};
use klv_wire::oid::{MAX_OID_KEY_BYTES, decode_ber_oid};

/// Key encoding mode for a KLV stream.
///
/// SMPTE ST 336 elements carry either fixed-width keys (16-byte universal
/// keys are the common case) or variable-width BER object identifier keys
/// (local set tags). The mode applies to every element in the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFormat {
  /// Keys are exactly this many raw bytes. The width is expected to be
  /// positive; a zero width degenerates to empty keys.
  Fixed(usize),

  /// Keys are 1-4 byte BER object identifiers.
  BerOid,
}

/// A decoded key/value pair.
///
/// The key is the raw bytes read (fixed mode) or the minimal big-endian
/// encoding of the decoded identifier (BER-OID mode). The value is exactly
/// the byte count the element's length field declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triplet {
  pub key: Vec<u8>,
  pub value: Vec<u8>,
}

/// Internal state machine for the parser.
///
/// ```text
///   Reading → Terminated
/// ```
///
/// `Terminated` is entered on source exhaustion, an unterminated BER-OID
/// key, an oversized length field, or an I/O error. It is final: once
/// entered, every later pull returns `None` without touching the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ParserState {
  Reading,
  Terminated,
}

/// Pull-based KLV stream parser that yields raw key/value pairs one at
/// a time without buffering the stream.
///
/// Each pull decodes one `Key LengthField Value` element from the source:
/// the key per the configured [`KeyFormat`], a BER short or long form
/// length, then exactly that many value bytes. Interpretation of keys and
/// values belongs to higher layers; this parser only extracts the raw
/// pairs in stream order.
///
/// Termination is a plain `None` and covers clean end-of-data and
/// malformed or truncated input alike; the two are indistinguishable
/// through this API. The parser is not restartable; re-parsing requires
/// a new instance over a freshly positioned source.
///
/// The parser never closes or rewinds its source. Pass `&mut reader` to
/// keep using the reader afterwards, or move the reader in to hand it
/// over for the parser's lifetime.
///
/// # Example
///
/// ```rust
/// use klv_parser::{KeyFormat, StreamParser};
///
/// // Tag 5, length 2, two value bytes
/// let stream = [0x05, 0x02, 0xAA, 0xBB];
/// let mut parser = StreamParser::from_bytes(stream.to_vec(), KeyFormat::BerOid);
///
/// let triplet = parser.next_triplet().unwrap();
/// assert_eq!(triplet.key, vec![0x05]);
/// assert_eq!(triplet.value, vec![0xAA, 0xBB]);
/// assert!(parser.next_triplet().is_none());
/// ```
pub struct StreamParser<R> {
  source: R,
  key_format: KeyFormat,
  state: ParserState,
}

impl<R: Read> StreamParser<R> {
  /// Create a parser over the given source. No I/O occurs until the
  /// first pull.
  #[must_use]
  pub fn new(source: R, key_format: KeyFormat) -> Self {
    Self {
      source,
      key_format,
      state: ParserState::Reading,
    }
  }

  /// Decode the next element, or `None` once the sequence has ended.
  ///
  /// `None` covers clean exhaustion the same as malformed data or an
  /// I/O failure; the contract deliberately does not distinguish them.
  /// No partial triplet is ever emitted: a pull either yields a complete
  /// pair or terminates the sequence.
  pub fn next_triplet(&mut self) -> Option<Triplet> {
    if self.state == ParserState::Terminated {
      return None;
    }

    match self.parse_triplet() {
      Some(triplet) => Some(triplet),
      None => {
        self.state = ParserState::Terminated;
        None
      }
    }
  }

  fn parse_triplet(&mut self) -> Option<Triplet> {
    let key = match self.key_format {
      KeyFormat::Fixed(width) => self.read_verbatim(width)?,
      KeyFormat::BerOid => self.read_oid_key()?,
    };

    let length = self.read_ber_length()?;
    let value = self.read_value(length)?;

    Some(Triplet { key, value })
  }

  /// Read a BER-OID key byte by byte, then decode the collected bytes.
  ///
  /// Key bytes are pulled one at a time up to the 4-byte cap; the first
  /// byte with the high bit clear ends the key. A key still unterminated
  /// at the cap is malformed and ends the sequence without consuming
  /// further bytes. The decoded identifier is re-emitted as its minimal
  /// big-endian encoding, which need not match the wire bytes.
  fn read_oid_key(&mut self) -> Option<Vec<u8>> {
    let mut raw = [0u8; MAX_OID_KEY_BYTES];
    let mut len = 0;

    loop {
      let byte = self.read_byte()?;
      raw[len] = byte;
      len += 1;

      // High bit clear marks the final key byte
      if byte & 0x80 == 0 {
        break;
      }

      if len >= MAX_OID_KEY_BYTES {
        return None;
      }
    }

    let (oid, _) = decode_ber_oid(&raw[..len]).ok()?;
    Some(int_to_be_bytes(oid))
  }

  /// Decode a BER length field from the stream.
  ///
  /// Long-form length octets come from one read request, used as-is:
  /// a short read here is interpreted verbatim, exactly like a short
  /// fixed-key read, and can desynchronize element boundaries on sources
  /// that return partial chunks.
  fn read_ber_length(&mut self) -> Option<u64> {
    let prefix = self.read_byte()?;

    // Short form: bit 7 clear, the prefix is the length
    if prefix & 0x80 == 0 {
      return Some(u64::from(prefix));
    }

    let octets = self.read_verbatim(usize::from(prefix & 0x7F))?;
    be_bytes_to_int(&octets)
  }

  /// Read exactly `length` value bytes, filling across short reads.
  ///
  /// `take` bounds the read so allocation tracks the bytes actually
  /// present rather than the declared length. Any shortfall means the
  /// source ran out mid-value: the sequence ends with no triplet.
  fn read_value(&mut self, length: u64) -> Option<Vec<u8>> {
    if length == 0 {
      return Some(Vec::new());
    }

    // A length beyond the address space can never be satisfied
    let want = usize::try_from(length).ok()?;

    let mut value = Vec::new();
    match (&mut self.source).take(length).read_to_end(&mut value) {
      Ok(read) if read == want => Some(value),
      _ => None,
    }
  }

  /// Single read request for `size` bytes, short results used as-is.
  ///
  /// `size == 0` yields an empty buffer without touching the source.
  /// A zero-byte result is the sole end-of-stream signal.
  fn read_verbatim(&mut self, size: usize) -> Option<Vec<u8>> {
    if size == 0 {
      return Some(Vec::new());
    }

    let mut buf = vec![0u8; size];
    let read = self.read_once(&mut buf)?;
    if read == 0 {
      return None;
    }

    buf.truncate(read);
    Some(buf)
  }

  fn read_byte(&mut self) -> Option<u8> {
    let mut byte = [0u8; 1];
    if self.read_once(&mut byte)? == 0 {
      return None;
    }
    Some(byte[0])
  }

  /// Issue one read call against the source, retrying only on
  /// `Interrupted`. Any other I/O error folds into termination.
  fn read_once(&mut self, buf: &mut [u8]) -> Option<usize> {
    loop {
      match self.source.read(buf) {
        Ok(read) => return Some(read),
        Err(e) if e.kind() == ErrorKind::Interrupted => {}
        Err(_) => return None,
      }
    }
  }
}

impl StreamParser<Cursor<Vec<u8>>> {
  /// Create a parser over raw bytes, wrapped in an owned in-memory
  /// cursor.
  #[must_use]
  pub fn from_bytes(data: impl Into<Vec<u8>>, key_format: KeyFormat) -> Self {
    Self::new(Cursor::new(data.into()), key_format)
  }
}

impl<R: Read> Iterator for StreamParser<R> {
  type Item = Triplet;

  fn next(&mut self) -> Option<Triplet> {
    self.next_triplet()
  }
}
