//! Token types for the Ruka scanner.
//!
//! The token model uses **registry-backed ids** for reserved vocabulary:
//! - `Keyword(Keyword)` for reserved words
//! - `Mode(Mode)` for parameter-mode annotations
//!
//! Punctuation, operators, and assignment symbols are payload-free variants with one fixed spelling each.
//!
//! ## Notes
//! - [`Kind::render`] is the inverse of classification: fixed-spelling variants render to their literal, payload
//!   variants render their stored text.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use ruka_core::lang::keywords::{self, Keyword};
use ruka_core::lang::modes::{self, Mode};
use strum::{EnumCount, EnumDiscriminants, EnumIter, EnumString, IntoStaticStr};

// ============================================================================
// TOKEN KINDS
// ============================================================================

/// Kind of lexeme produced by the scanner.
///
/// ## Notes
/// - The set is closed; [`KindTag`] is its payload-free mirror, used for counting and iteration.
/// - Every fixed-spelling variant renders to exactly one literal, and no two render alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumDiscriminants)]
#[strum_discriminants(name(KindTag), derive(Hash, EnumIter, EnumCount, EnumString, IntoStaticStr))]
pub enum Kind {
    // ========== Carrying data ==========
    Identifier(String),
    String(String),
    Character(u8),
    Integer(String),
    Float(String),
    Keyword(Keyword),
    Mode(Mode),

    // ========== Assignment ==========
    Assign,          // =
    InferAssign,     // :=
    PlusAssign,      // +=
    MinusAssign,     // -=
    AsteriskAssign,  // *=
    SlashAssign,     // /=
    PercentAssign,   // %=
    AmpersandAssign, // &=
    PipeAssign,      // |=
    CaretAssign,     // ^=
    LshiftAssign,    // <<=
    RshiftAssign,    // >>=

    // ========== Delimiters / separators ==========
    Lparen,    // (
    Rparen,    // )
    Lbrace,    // {
    Rbrace,    // }
    Lsquare,   // [
    Rsquare,   // ]
    Colon,     // :
    Semicolon, // ;
    Comma,     // ,
    Dot,       // .

    // ========== Arrows / ranges / application ==========
    Arrow,       // ->
    WideArrow,   // =>
    RangeExc,    // ..
    RangeInc,    // ..=
    ForwardApp,  // <|
    BackwardApp, // |>

    // ========== Operators ==========
    Plus,      // +
    Minus,     // -
    Asterisk,  // *
    Slash,     // /
    Percent,   // %
    Increment, // ++
    Decrement, // --
    Exponent,  // **
    Ampersand, // &
    Pipe,      // |
    Caret,     // ^
    Tilde,     // ~
    Bang,      // !
    Lshift,    // <<
    Rshift,    // >>
    Concat,    // <>
    Equal,     // ==
    NotEqual,  // !=
    Lesser,    // <
    LesserEq,  // <=
    Greater,   // >
    GreaterEq, // >=

    // ========== Markers ==========
    Question,  // ?
    At,        // @
    Hash,      // #
    Dollar,    // $
    Backslash, // \

    // ========== Structural ==========
    Newline,
    Illegal,
    Eof,
}

/// Number of [`Kind`] variants that carry a payload.
pub const PAYLOAD_KINDS: usize = 7;

/// Number of structural markers (`Newline`, `Illegal`, `Eof`).
pub const STRUCTURAL_KINDS: usize = 3;

impl Kind {
    /// Classify a single source byte.
    ///
    /// ## Notes
    /// - Total over all 256 byte values: NUL is `Eof`, `\n` is `Newline`, unrecognized bytes are `Illegal`.
    /// - Never produces a multi-byte operator; the scanner tries [`crate::lexer::match_symbol`] first for those.
    pub fn from_byte(byte: u8) -> Kind {
        match byte {
            0 => Kind::Eof,
            b'\n' => Kind::Newline,
            b'=' => Kind::Assign,
            b'(' => Kind::Lparen,
            b')' => Kind::Rparen,
            b'{' => Kind::Lbrace,
            b'}' => Kind::Rbrace,
            b'[' => Kind::Lsquare,
            b']' => Kind::Rsquare,
            b':' => Kind::Colon,
            b';' => Kind::Semicolon,
            b',' => Kind::Comma,
            b'.' => Kind::Dot,
            b'+' => Kind::Plus,
            b'-' => Kind::Minus,
            b'*' => Kind::Asterisk,
            b'/' => Kind::Slash,
            b'%' => Kind::Percent,
            b'&' => Kind::Ampersand,
            b'|' => Kind::Pipe,
            b'^' => Kind::Caret,
            b'~' => Kind::Tilde,
            b'!' => Kind::Bang,
            b'<' => Kind::Lesser,
            b'>' => Kind::Greater,
            b'?' => Kind::Question,
            b'@' => Kind::At,
            b'#' => Kind::Hash,
            b'$' => Kind::Dollar,
            b'\\' => Kind::Backslash,
            _ => Kind::Illegal,
        }
    }

    /// Return the payload-free tag of this kind.
    pub fn tag(&self) -> KindTag {
        KindTag::from(self)
    }

    /// Return the statically known spelling of this kind, if it has one.
    ///
    /// ## Returns
    /// - `Some` for fixed-spelling variants and for `Keyword`/`Mode` (via their registries).
    /// - `None` for variants whose text lives in the payload.
    pub fn spelling(&self) -> Option<&'static str> {
        match self.text() {
            Text::Fixed(s) => Some(s),
            Text::Stored(_) | Text::Byte(_) => None,
        }
    }

    /// Render this kind back to its canonical source text.
    ///
    /// ## Notes
    /// - Fixed spellings, keywords, and modes borrow a `'static` literal.
    /// - Identifier/String/Integer/Float borrow their stored text unchanged.
    /// - `Character` is the one case that allocates: the byte becomes a one-character string. Bytes `0x80..=0xFF`
    ///   read as the code points `U+0080..=U+00FF` and so take two UTF-8 bytes; use [`Kind::render_bytes`] when the
    ///   exact source bytes matter.
    pub fn render(&self) -> Cow<'_, str> {
        match self.text() {
            Text::Fixed(s) => Cow::Borrowed(s),
            Text::Stored(text) => Cow::Borrowed(text),
            Text::Byte(byte) => Cow::Owned(char::from(*byte).to_string()),
        }
    }

    /// Render this kind back to the exact source bytes it was classified from.
    ///
    /// Never allocates. Agrees with [`Kind::render`] everywhere except non-ASCII `Character` bytes, which come back
    /// as the single stored byte.
    pub fn render_bytes(&self) -> Cow<'_, [u8]> {
        match self.text() {
            Text::Fixed(s) => Cow::Borrowed(s.as_bytes()),
            Text::Stored(text) => Cow::Borrowed(text.as_bytes()),
            Text::Byte(byte) => Cow::Borrowed(std::slice::from_ref(byte)),
        }
    }

    /// Where the source text of this kind lives. Exhaustive over every variant.
    fn text(&self) -> Text<'_> {
        let s = match self {
            Kind::Identifier(text) | Kind::String(text) | Kind::Integer(text) | Kind::Float(text) => {
                return Text::Stored(text);
            }
            Kind::Character(byte) => return Text::Byte(byte),
            Kind::Keyword(k) => keywords::as_str(*k),
            Kind::Mode(m) => modes::as_str(*m),

            Kind::Assign => "=",
            Kind::InferAssign => ":=",
            Kind::PlusAssign => "+=",
            Kind::MinusAssign => "-=",
            Kind::AsteriskAssign => "*=",
            Kind::SlashAssign => "/=",
            Kind::PercentAssign => "%=",
            Kind::AmpersandAssign => "&=",
            Kind::PipeAssign => "|=",
            Kind::CaretAssign => "^=",
            Kind::LshiftAssign => "<<=",
            Kind::RshiftAssign => ">>=",

            Kind::Lparen => "(",
            Kind::Rparen => ")",
            Kind::Lbrace => "{",
            Kind::Rbrace => "}",
            Kind::Lsquare => "[",
            Kind::Rsquare => "]",
            Kind::Colon => ":",
            Kind::Semicolon => ";",
            Kind::Comma => ",",
            Kind::Dot => ".",

            Kind::Arrow => "->",
            Kind::WideArrow => "=>",
            Kind::RangeExc => "..",
            Kind::RangeInc => "..=",
            Kind::ForwardApp => "<|",
            Kind::BackwardApp => "|>",

            Kind::Plus => "+",
            Kind::Minus => "-",
            Kind::Asterisk => "*",
            Kind::Slash => "/",
            Kind::Percent => "%",
            Kind::Increment => "++",
            Kind::Decrement => "--",
            Kind::Exponent => "**",
            Kind::Ampersand => "&",
            Kind::Pipe => "|",
            Kind::Caret => "^",
            Kind::Tilde => "~",
            Kind::Bang => "!",
            Kind::Lshift => "<<",
            Kind::Rshift => ">>",
            Kind::Concat => "<>",
            Kind::Equal => "==",
            Kind::NotEqual => "!=",
            Kind::Lesser => "<",
            Kind::LesserEq => "<=",
            Kind::Greater => ">",
            Kind::GreaterEq => ">=",

            Kind::Question => "?",
            Kind::At => "@",
            Kind::Hash => "#",
            Kind::Dollar => "$",
            Kind::Backslash => "\\",

            Kind::Newline => "\n",
            Kind::Illegal => "ILLEGAL",
            Kind::Eof => "\0",
        };
        Text::Fixed(s)
    }
}

enum Text<'a> {
    Fixed(&'static str),
    Stored(&'a str),
    Byte(&'a u8),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl KindTag {
    /// Return the variant name of this tag (e.g. `"RangeInc"`).
    pub fn name(self) -> &'static str {
        self.into()
    }
}

const _: () = assert!(
    crate::lexer::symbols::SYMBOLS.len() + PAYLOAD_KINDS + STRUCTURAL_KINDS == KindTag::COUNT,
    "SYMBOLS must list every fixed-spelling Kind variant"
);

// ============================================================================
// TOKENS
// ============================================================================

/// A `(line, column)` source position, as supplied by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token with its kind and source provenance.
///
/// ## Notes
/// - Tokens are immutable once built. The file identifier is shared (`Arc<str>`) so every token of a file points at
///   the same name without copying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: Kind,
    file: Arc<str>,
    position: Position,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: Kind, file: impl Into<Arc<str>>, position: Position) -> Self {
        Self {
            kind,
            file: file.into(),
            position,
        }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Name of the source the token was scanned from.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Consume the token, keeping only its kind.
    pub fn into_kind(self) -> Kind {
        self.kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {:?}", self.file, self.position, self.kind.render())
    }
}
