#![forbid(unsafe_code)]
//! Shared token model for the Ruka language front-end.
//!
//! This crate is dependency-light and intended for reuse by the scanner, parser, formatter, and any tooling that
//! needs to turn lexemes into typed tokens or print them back.
//!
//! ## Notes
//! - This crate is intentionally "token-only": it does not walk source text or track positions itself.
//! - Vocabulary identity (keywords/modes) comes from `ruka_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use ruka_syntax::lexer::{self, Kind, Position, Token};
//!
//! assert_eq!(lexer::classify_byte(b'('), Kind::Lparen);
//! assert_eq!(lexer::match_symbol(b"..=10"), Some((Kind::RangeInc, 3)));
//!
//! let kind = lexer::resolve_keyword("let").map(Kind::Keyword).unwrap();
//! let token = Token::new(kind, "main.ruka", Position::new(1, 1));
//! assert_eq!(token.kind().render(), "let");
//! ```
//!
//! ## See also
//! - `ruka_core::lang` for registry-backed language vocabulary.

pub mod lexer;
pub mod token_helpers;
