#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use klv_parser::{KeyFormat, StreamParser};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    fixed_width: u8,
    stream: Vec<u8>,
}

// Fuzz target: StreamParser over arbitrary byte streams in both key modes.
//
// Catches bugs in:
// - BER-OID key cap handling mid-stream
// - Hostile declared lengths (allocation must track supplied bytes)
// - Termination latching after malformed input
// - Fixed-width key reads at width 0 and 255
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = FuzzInput::arbitrary(&mut u) else {
        return;
    };

    let parser = StreamParser::from_bytes(input.stream.clone(), KeyFormat::BerOid);
    let _ = parser.count();

    let width = usize::from(input.fixed_width);
    let parser = StreamParser::from_bytes(input.stream, KeyFormat::Fixed(width));
    let _ = parser.count();
});
