//! Integration tests for the token model: classification, resolution, rendering, and tokens.

use std::collections::HashMap;

use proptest::prelude::*;
use ruka_core::lang::{keywords, modes};
use ruka_core::{Keyword, Mode};
use ruka_syntax::lexer::{self, Kind, KindTag, Position, SYMBOLS, Token};
use strum::{EnumCount, IntoEnumIterator};

#[test]
fn single_byte_symbols_render_to_their_byte() {
    for byte in 0..=u8::MAX {
        let kind = lexer::classify_byte(byte);
        if kind.is_symbol() {
            let expected = char::from(byte).to_string();
            assert_eq!(lexer::render(&kind), expected, "byte {byte:#04x} classified as {kind:?}");
        }
    }
}

#[test]
fn character_renders_back_to_its_exact_byte() {
    for byte in 0..=u8::MAX {
        let kind = Kind::Character(byte);
        let bytes = lexer::render_bytes(&kind);
        assert_eq!(bytes.as_ref(), &[byte], "byte {byte:#04x}");
    }
    let high = Kind::Character(0xE9);
    assert_eq!(lexer::render(&high), "\u{e9}");
}

#[test]
fn structural_bytes() {
    assert_eq!(lexer::classify_byte(0x00), Kind::Eof);
    assert_eq!(lexer::classify_byte(b'\n'), Kind::Newline);
    for byte in [b' ', b'\t', b'\r', b'\'', b'"', b'`', b'a', b'Z', b'_', b'0', 0x7F, 0x80, 0xFF] {
        assert_eq!(lexer::classify_byte(byte), Kind::Illegal, "byte {byte:#04x}");
    }
}

#[test]
fn classify_byte_never_yields_multi_byte_kinds() {
    for byte in 0..=u8::MAX {
        let kind = lexer::classify_byte(byte);
        if kind.is_symbol() {
            assert_eq!(kind.spelling().map(str::len), Some(1), "{kind:?} from byte {byte:#04x}");
        }
    }
}

#[test]
fn every_single_byte_symbol_is_reachable_from_classify_byte() {
    for info in SYMBOLS.iter().filter(|s| !s.is_multi_byte()) {
        let byte = info.spelling.as_bytes()[0];
        assert_eq!(lexer::classify_byte(byte), info.kind, "spelling {:?}", info.spelling);
    }
}

#[test]
fn keyword_table_round_trips_through_kind() {
    for info in keywords::KEYWORDS {
        assert_eq!(lexer::resolve_keyword(info.canonical), Some(info.id));
        assert_eq!(lexer::render(&Kind::Keyword(info.id)), info.canonical);
    }
    assert_eq!(keywords::KEYWORDS.len(), Keyword::COUNT);
    assert_eq!(Keyword::COUNT, 35);
}

#[test]
fn mode_table_round_trips_through_kind() {
    for info in modes::MODES {
        assert_eq!(lexer::resolve_mode(info.canonical), Some(info.id));
        assert_eq!(lexer::render(&Kind::Mode(info.id)), info.canonical);
    }
    assert_eq!(modes::MODES.len(), Mode::COUNT);
}

#[test]
fn unknown_candidates_resolve_to_none() {
    assert_eq!(lexer::resolve_keyword("notakeyword"), None);
    assert_eq!(lexer::resolve_mode("notamode"), None);
}

#[test]
fn mut_mode_renders_back_to_its_spelling() {
    let mode = lexer::resolve_mode("mut").expect("mut is a mode");
    assert_eq!(mode, Mode::Mutable);
    let kind = Kind::Mode(mode);
    let rendered = lexer::render(&kind);
    assert_eq!(rendered, "mut");
    assert_eq!(lexer::resolve_mode(&rendered), Some(Mode::Mutable));
}

#[test]
fn fixed_renderings_are_stable() {
    for _ in 0..3 {
        assert_eq!(lexer::render(&Kind::Lparen), "(");
        assert_eq!(lexer::render(&Kind::RangeInc), "..=");
        assert_eq!(lexer::render(&Kind::ForwardApp), "<|");
    }
}

#[test]
fn symbol_table_agrees_with_render() {
    for info in SYMBOLS {
        assert_eq!(lexer::render(&info.kind), info.spelling, "{:?}", info.kind);
        assert_eq!(Kind::from_spelling(info.spelling), Some(info.kind.clone()));
    }
}

#[test]
fn fixed_spelling_renderings_are_injective() {
    let mut seen: HashMap<String, KindTag> = HashMap::new();
    for tag in KindTag::iter() {
        let Some(kind) = Kind::from_tag(tag) else {
            continue;
        };
        let rendered = kind.render().into_owned();
        if let Some(prev) = seen.insert(rendered.clone(), tag) {
            panic!("{prev:?} and {tag:?} both render as {rendered:?}");
        }
    }
    assert_eq!(seen.len(), KindTag::COUNT - 7);
}

#[test]
fn every_tag_is_either_payload_or_fixed() {
    let payload = [
        KindTag::Identifier,
        KindTag::String,
        KindTag::Character,
        KindTag::Integer,
        KindTag::Float,
        KindTag::Keyword,
        KindTag::Mode,
    ];
    for tag in KindTag::iter() {
        let fixed = Kind::from_tag(tag);
        assert_eq!(fixed.is_none(), payload.contains(&tag), "{tag:?}");
        if let Some(kind) = fixed {
            assert_eq!(kind.tag(), tag);
        }
    }
}

#[test]
fn token_preserves_construction_fields() {
    let token = Token::new(Kind::Identifier("foo".to_string()), "a.ruka", Position::new(3, 10));
    let copy = token.clone();
    assert_eq!(token.kind(), &Kind::Identifier("foo".to_string()));
    assert_eq!(token.file(), "a.ruka");
    assert_eq!(token.position(), Position { line: 3, column: 10 });
    assert_eq!(copy, token);
}

#[test]
fn rendered_token_stream() {
    // let x := a <| 1..=10
    let file = "demo.ruka";
    let kinds = [
        Kind::Keyword(Keyword::Let),
        Kind::Identifier("x".into()),
        Kind::InferAssign,
        Kind::Identifier("a".into()),
        Kind::ForwardApp,
        Kind::Integer("1".into()),
        Kind::RangeInc,
        Kind::Integer("10".into()),
    ];
    let tokens: Vec<Token> = kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| Token::new(kind, file, Position::new(1, i + 1)))
        .collect();
    let rendered = tokens
        .iter()
        .map(|t| t.kind().render())
        .collect::<Vec<_>>()
        .join(" ");
    insta::assert_snapshot!(rendered, @"let x := a <| 1 ..= 10");
}

proptest! {
    #[test]
    fn classify_byte_is_total_and_renders(byte in any::<u8>()) {
        let kind = lexer::classify_byte(byte);
        let rendered = lexer::render(&kind);
        prop_assert!(!rendered.is_empty());
        prop_assert!(kind.spelling().is_some());
    }

    #[test]
    fn match_symbol_consumes_a_prefix(input in proptest::collection::vec(any::<u8>(), 0..6)) {
        if let Some((kind, len)) = lexer::match_symbol(&input) {
            prop_assert!(len >= 1 && len <= input.len());
            let rendered = lexer::render_bytes(&kind);
            prop_assert_eq!(rendered.as_ref(), &input[..len]);
        }
    }

    #[test]
    fn from_spelling_inverts_render(s in "[a-z.<>=|:+*/%&^!~-]{1,4}") {
        if let Some(kind) = Kind::from_spelling(&s) {
            prop_assert_eq!(kind.render(), s.as_str());
        }
    }
}
