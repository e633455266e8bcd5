#![no_main]

use libfuzzer_sys::fuzz_target;
use ruka::lexer::{self, Kind};

fuzz_target!(|data: &[u8]| {
    // Every byte classifies, and every classification renders
    for &byte in data {
        let kind = lexer::classify_byte(byte);
        assert!(!kind.render().is_empty());
    }

    // Maximal munch only ever consumes a prefix that renders back to itself
    if let Some((kind, len)) = lexer::match_symbol(data) {
        assert_eq!(kind.render_bytes().as_ref(), &data[..len]);
    }

    // Whole-string resolution is the inverse of rendering
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(kind) = Kind::from_spelling(s) {
            assert_eq!(kind.render(), s);
        }
    }
});
