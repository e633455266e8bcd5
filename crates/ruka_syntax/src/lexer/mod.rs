//! Lexical token model for the Ruka programming language.
//!
//! Provides the classification primitives a scanner calls while walking source text:
//! - Single bytes ([`classify_byte`])
//! - Multi-byte operators by maximal munch ([`match_symbol`])
//! - Identifier candidates that may be reserved words or parameter modes ([`resolve_keyword`], [`resolve_mode`])
//! - Canonical rendering of any kind back to text ([`render`]) or to its exact bytes ([`render_bytes`])
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (Kind, KindTag, Token, Position)
//! - `symbols` - Fixed-spelling symbol table and lookahead matching
//!
//! ## Notes
//! - Everything here is a pure function of its input. The scanner owns position tracking, comment and whitespace
//!   skipping, and literal body extraction.

pub mod symbols;
pub mod tokens;

use std::borrow::Cow;

use ruka_core::lang::{keywords, modes};
use ruka_core::{Keyword, Mode};

pub use symbols::{MAX_SYMBOL_LEN, SYMBOLS, SymbolCategory, SymbolInfo, match_symbol};
pub use tokens::{Kind, KindTag, Position, Token};

/// Classify one source byte. Total: unknown bytes become [`Kind::Illegal`].
pub fn classify_byte(byte: u8) -> Kind {
    Kind::from_byte(byte)
}

/// Resolve an identifier candidate to a reserved word. `None` means ordinary identifier.
pub fn resolve_keyword(text: &str) -> Option<Keyword> {
    keywords::from_str(text)
}

/// Resolve an identifier candidate to a parameter mode. `None` means ordinary identifier.
pub fn resolve_mode(text: &str) -> Option<Mode> {
    modes::from_str(text)
}

/// Render a kind back to its canonical source text.
pub fn render(kind: &Kind) -> Cow<'_, str> {
    kind.render()
}

/// Render a kind back to the exact bytes it stands for. See [`Kind::render_bytes`].
pub fn render_bytes(kind: &Kind) -> Cow<'_, [u8]> {
    kind.render_bytes()
}
