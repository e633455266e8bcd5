//! Fixed-spelling symbol table.
//!
//! Lists every punctuation, operator, and assignment [`Kind`] together with its literal spelling. The table backs
//! maximal-munch matching for the scanner ([`match_symbol`]) and whole-string resolution ([`Kind::from_spelling`]).
//!
//! ## Notes
//! - Spellings must agree with [`Kind::spelling`]; the guardrail tests check every row.
//! - The table is checked at compile time: one row per fixed-spelling variant, no duplicate spellings.

use std::sync::LazyLock;

use ruka_core::lang::registry;
use ruka_core::lang::{keywords, modes};
use rustc_hash::FxHashMap;

use super::tokens::{Kind, KindTag};

/// Broad syntactic grouping for symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `:`.
    Separator,
    /// `=` and the compound assignments.
    Assignment,
    /// Arrows, ranges, and application pipes.
    Arrow,
    Operator,
    /// Misc markers like `?` and `@`.
    Marker,
}

impl SymbolCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolCategory::Delimiter => "delimiter",
            SymbolCategory::Separator => "separator",
            SymbolCategory::Assignment => "assignment",
            SymbolCategory::Arrow => "arrow",
            SymbolCategory::Operator => "operator",
            SymbolCategory::Marker => "marker",
        }
    }
}

/// Metadata for a fixed-spelling symbol.
#[derive(Debug, Clone)]
pub struct SymbolInfo {
    pub kind: Kind,
    pub spelling: &'static str,
    pub category: SymbolCategory,
}

impl SymbolInfo {
    /// Return `true` if the scanner needs lookahead to produce this symbol.
    pub fn is_multi_byte(&self) -> bool {
        self.spelling.len() > 1
    }
}

/// Registry of all fixed-spelling symbols.
pub const SYMBOLS: &[SymbolInfo] = &[
    // Delimiters
    sym(Kind::Lparen, "(", SymbolCategory::Delimiter),
    sym(Kind::Rparen, ")", SymbolCategory::Delimiter),
    sym(Kind::Lbrace, "{", SymbolCategory::Delimiter),
    sym(Kind::Rbrace, "}", SymbolCategory::Delimiter),
    sym(Kind::Lsquare, "[", SymbolCategory::Delimiter),
    sym(Kind::Rsquare, "]", SymbolCategory::Delimiter),
    // Separators
    sym(Kind::Colon, ":", SymbolCategory::Separator),
    sym(Kind::Semicolon, ";", SymbolCategory::Separator),
    sym(Kind::Comma, ",", SymbolCategory::Separator),
    sym(Kind::Dot, ".", SymbolCategory::Separator),
    // Assignment
    sym(Kind::Assign, "=", SymbolCategory::Assignment),
    sym(Kind::InferAssign, ":=", SymbolCategory::Assignment),
    sym(Kind::PlusAssign, "+=", SymbolCategory::Assignment),
    sym(Kind::MinusAssign, "-=", SymbolCategory::Assignment),
    sym(Kind::AsteriskAssign, "*=", SymbolCategory::Assignment),
    sym(Kind::SlashAssign, "/=", SymbolCategory::Assignment),
    sym(Kind::PercentAssign, "%=", SymbolCategory::Assignment),
    sym(Kind::AmpersandAssign, "&=", SymbolCategory::Assignment),
    sym(Kind::PipeAssign, "|=", SymbolCategory::Assignment),
    sym(Kind::CaretAssign, "^=", SymbolCategory::Assignment),
    sym(Kind::LshiftAssign, "<<=", SymbolCategory::Assignment),
    sym(Kind::RshiftAssign, ">>=", SymbolCategory::Assignment),
    // Arrows / ranges / application
    sym(Kind::Arrow, "->", SymbolCategory::Arrow),
    sym(Kind::WideArrow, "=>", SymbolCategory::Arrow),
    sym(Kind::RangeExc, "..", SymbolCategory::Arrow),
    sym(Kind::RangeInc, "..=", SymbolCategory::Arrow),
    sym(Kind::ForwardApp, "<|", SymbolCategory::Arrow),
    sym(Kind::BackwardApp, "|>", SymbolCategory::Arrow),
    // Operators
    sym(Kind::Plus, "+", SymbolCategory::Operator),
    sym(Kind::Minus, "-", SymbolCategory::Operator),
    sym(Kind::Asterisk, "*", SymbolCategory::Operator),
    sym(Kind::Slash, "/", SymbolCategory::Operator),
    sym(Kind::Percent, "%", SymbolCategory::Operator),
    sym(Kind::Increment, "++", SymbolCategory::Operator),
    sym(Kind::Decrement, "--", SymbolCategory::Operator),
    sym(Kind::Exponent, "**", SymbolCategory::Operator),
    sym(Kind::Ampersand, "&", SymbolCategory::Operator),
    sym(Kind::Pipe, "|", SymbolCategory::Operator),
    sym(Kind::Caret, "^", SymbolCategory::Operator),
    sym(Kind::Tilde, "~", SymbolCategory::Operator),
    sym(Kind::Bang, "!", SymbolCategory::Operator),
    sym(Kind::Lshift, "<<", SymbolCategory::Operator),
    sym(Kind::Rshift, ">>", SymbolCategory::Operator),
    sym(Kind::Concat, "<>", SymbolCategory::Operator),
    sym(Kind::Equal, "==", SymbolCategory::Operator),
    sym(Kind::NotEqual, "!=", SymbolCategory::Operator),
    sym(Kind::Lesser, "<", SymbolCategory::Operator),
    sym(Kind::LesserEq, "<=", SymbolCategory::Operator),
    sym(Kind::Greater, ">", SymbolCategory::Operator),
    sym(Kind::GreaterEq, ">=", SymbolCategory::Operator),
    // Markers
    sym(Kind::Question, "?", SymbolCategory::Marker),
    sym(Kind::At, "@", SymbolCategory::Marker),
    sym(Kind::Hash, "#", SymbolCategory::Marker),
    sym(Kind::Dollar, "$", SymbolCategory::Marker),
    sym(Kind::Backslash, "\\", SymbolCategory::Marker),
];

/// Length in bytes of the longest symbol spelling.
pub const MAX_SYMBOL_LEN: usize = max_spelling_len();

const _: () = assert!(spellings_are_distinct(), "SYMBOLS spellings must be pairwise distinct");

static INDEX: LazyLock<FxHashMap<&'static [u8], &'static SymbolInfo>> =
    LazyLock::new(|| SYMBOLS.iter().map(|s| (s.spelling.as_bytes(), s)).collect());

/// Match the longest symbol spelling at the start of `input`.
///
/// ## Returns
/// - `Some((kind, len))` with the matched kind and the number of bytes it spans.
/// - `None` if `input` does not start with a symbol (letters, digits, quotes, whitespace, `\n`, NUL).
///
/// ## Notes
/// - Longer spellings always win: `..=` before `..` before `.`, and `<<=` before `<<` before `<`.
pub fn match_symbol(input: &[u8]) -> Option<(Kind, usize)> {
    let longest = input.len().min(MAX_SYMBOL_LEN);
    (1..=longest)
        .rev()
        .find_map(|len| INDEX.get(&input[..len]))
        .map(|info| (info.kind.clone(), info.spelling.len()))
}

/// Return the metadata row for a fixed-spelling symbol kind.
pub fn info_for(kind: &Kind) -> Option<&'static SymbolInfo> {
    kind.spelling().and_then(|s| INDEX.get(s.as_bytes()).copied())
}

impl Kind {
    /// Resolve a whole spelling to a vocabulary kind.
    ///
    /// ## Notes
    /// - Tries keywords, then modes, then fixed symbols. Exact and case-sensitive.
    /// - Never produces a payload kind or a structural marker; a miss is `None`.
    pub fn from_spelling(s: &str) -> Option<Kind> {
        if let Some(k) = keywords::from_str(s) {
            return Some(Kind::Keyword(k));
        }
        if let Some(m) = modes::from_str(s) {
            return Some(Kind::Mode(m));
        }
        INDEX.get(s.as_bytes()).map(|info| info.kind.clone())
    }

    /// Build the kind for a payload-free tag.
    ///
    /// ## Returns
    /// - `None` for tags whose variant carries data (`Identifier`, `Keyword`, ...).
    pub fn from_tag(tag: KindTag) -> Option<Kind> {
        match tag {
            KindTag::Newline => Some(Kind::Newline),
            KindTag::Illegal => Some(Kind::Illegal),
            KindTag::Eof => Some(Kind::Eof),
            _ => SYMBOLS.iter().find(|s| s.kind.tag() == tag).map(|s| s.kind.clone()),
        }
    }
}

const fn sym(kind: Kind, spelling: &'static str, category: SymbolCategory) -> SymbolInfo {
    SymbolInfo {
        kind,
        spelling,
        category,
    }
}

const fn spellings_are_distinct() -> bool {
    let mut i = 0;
    while i < SYMBOLS.len() {
        let mut j = i + 1;
        while j < SYMBOLS.len() {
            if registry::str_eq(SYMBOLS[i].spelling, SYMBOLS[j].spelling) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn max_spelling_len() -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < SYMBOLS.len() {
        if SYMBOLS[i].spelling.len() > max {
            max = SYMBOLS[i].spelling.len();
        }
        i += 1;
    }
    max
}
