//! Define the reserved keyword vocabulary for the Ruka language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`Keyword`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories, and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and whole-string. A miss means "ordinary identifier", not an error.
//! - Some words are reserved for future use ([`Stability::Reserved`]); they resolve like any other keyword.
//! - The table is checked against [`Keyword`] at compile time: adding a variant without a table entry (or a duplicate
//!   spelling) fails the build.
//!
//! ## Examples
//! ```rust
//! use ruka_core::lang::keywords::{self, Keyword};
//!
//! assert_eq!(keywords::from_str("defer"), Some(Keyword::Defer));
//! assert_eq!(keywords::as_str(Keyword::SelfKw), "self");
//! assert_eq!(keywords::from_str("Defer"), None);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use strum::{EnumCount, EnumIter};
use thiserror::Error;

use super::registry::{self, Since, SpellingIndex, Stability};

/// Stable identifier for every reserved word.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`] or `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCount, EnumIter)]
pub enum Keyword {
    // Control flow
    If,
    Else,
    Match,
    For,
    While,
    Break,
    Continue,
    Return,
    Defer,
    Do,
    End,

    // Declarations
    Const,
    Let,
    Pub,
    Fn,
    Type,
    Record,
    Variant,
    Interface,

    // Modules
    Module,
    Import,

    // Bindings / receivers
    SelfKw,

    // Literals
    True,
    False,

    // Word operators
    And,
    Or,
    Not,
    In,
    As,

    // Reserved for future use
    Private,
    Derive,
    Static,
    Macro,
    Impl,
    Unsafe,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Declaration,
    Module,
    Binding,
    Literal,
    Operator,
    Reserved,
}

impl KeywordCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordCategory::ControlFlow => "control flow",
            KeywordCategory::Declaration => "declaration",
            KeywordCategory::Module => "module",
            KeywordCategory::Binding => "binding",
            KeywordCategory::Literal => "literal",
            KeywordCategory::Operator => "operator",
            KeywordCategory::Reserved => "reserved",
        }
    }
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: Keyword,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info(Keyword::If, "if", KeywordCategory::ControlFlow, Since(0, 1)),
    info(Keyword::Else, "else", KeywordCategory::ControlFlow, Since(0, 1)),
    info(Keyword::Match, "match", KeywordCategory::ControlFlow, Since(0, 1)),
    info(Keyword::For, "for", KeywordCategory::ControlFlow, Since(0, 1)),
    info(Keyword::While, "while", KeywordCategory::ControlFlow, Since(0, 1)),
    info(Keyword::Break, "break", KeywordCategory::ControlFlow, Since(0, 1)),
    info(Keyword::Continue, "continue", KeywordCategory::ControlFlow, Since(0, 1)),
    info(Keyword::Return, "return", KeywordCategory::ControlFlow, Since(0, 1)),
    info(Keyword::Defer, "defer", KeywordCategory::ControlFlow, Since(0, 2)),
    info(Keyword::Do, "do", KeywordCategory::ControlFlow, Since(0, 1)),
    info(Keyword::End, "end", KeywordCategory::ControlFlow, Since(0, 1)),
    // Declarations
    info(Keyword::Const, "const", KeywordCategory::Declaration, Since(0, 1)),
    info(Keyword::Let, "let", KeywordCategory::Declaration, Since(0, 1)),
    info(Keyword::Pub, "pub", KeywordCategory::Declaration, Since(0, 1)),
    info(Keyword::Fn, "fn", KeywordCategory::Declaration, Since(0, 1)),
    info(Keyword::Type, "type", KeywordCategory::Declaration, Since(0, 1)),
    info(Keyword::Record, "record", KeywordCategory::Declaration, Since(0, 1)),
    info(Keyword::Variant, "variant", KeywordCategory::Declaration, Since(0, 1)),
    info(Keyword::Interface, "interface", KeywordCategory::Declaration, Since(0, 2)),
    // Modules
    info(Keyword::Module, "module", KeywordCategory::Module, Since(0, 1)),
    info(Keyword::Import, "import", KeywordCategory::Module, Since(0, 1)),
    // Bindings / receivers
    info(Keyword::SelfKw, "self", KeywordCategory::Binding, Since(0, 1)),
    // Literals
    info(Keyword::True, "true", KeywordCategory::Literal, Since(0, 1)),
    info(Keyword::False, "false", KeywordCategory::Literal, Since(0, 1)),
    // Word operators
    info(Keyword::And, "and", KeywordCategory::Operator, Since(0, 1)),
    info(Keyword::Or, "or", KeywordCategory::Operator, Since(0, 1)),
    info(Keyword::Not, "not", KeywordCategory::Operator, Since(0, 1)),
    info(Keyword::In, "in", KeywordCategory::Operator, Since(0, 1)),
    info(Keyword::As, "as", KeywordCategory::Operator, Since(0, 1)),
    // Reserved for future use
    reserved(Keyword::Private, "private"),
    reserved(Keyword::Derive, "derive"),
    reserved(Keyword::Static, "static"),
    reserved(Keyword::Macro, "macro"),
    reserved(Keyword::Impl, "impl"),
    reserved(Keyword::Unsafe, "unsafe"),
];

const _: () = assert!(
    table_is_bijective(),
    "KEYWORDS must hold exactly one entry per Keyword variant, with distinct spellings"
);

static INDEX: LazyLock<SpellingIndex<Keyword>> =
    LazyLock::new(|| registry::build_index(KEYWORDS.iter().map(|k| (k.canonical, k.id))));

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: Keyword) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: Keyword) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if `id` is held back for a future language feature.
pub fn is_reserved(id: Keyword) -> bool {
    info_for(id).stability == Stability::Reserved
}

/// Full metadata.
///
/// ## Notes
/// - This scans the table linearly. It is meant for rendering and docs, not the scanning hot path.
///
/// ## Panics
/// - If the registry is missing an entry for `id`. The compile-time table check rules this out.
pub fn info_for(id: Keyword) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every Keyword has a KEYWORDS entry")
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(Keyword)` if the spelling is reserved.
/// - `None` otherwise; the caller should treat `s` as an ordinary identifier.
pub fn from_str(s: &str) -> Option<Keyword> {
    INDEX.get(s).copied()
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Returned when parsing a [`Keyword`] from a spelling that is not reserved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a reserved word")]
pub struct UnknownKeyword(pub String);

impl FromStr for Keyword {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s).ok_or_else(|| UnknownKeyword(s.to_string()))
    }
}

// --- helpers -----------------------------------------------------------------

const fn info(id: Keyword, canonical: &'static str, category: KeywordCategory, since: Since) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        since,
        stability: Stability::Stable,
    }
}

const fn reserved(id: Keyword, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category: KeywordCategory::Reserved,
        since: Since(0, 1),
        stability: Stability::Reserved,
    }
}

const fn table_is_bijective() -> bool {
    if KEYWORDS.len() != Keyword::COUNT {
        return false;
    }
    let mut i = 0;
    while i < KEYWORDS.len() {
        let mut j = i + 1;
        while j < KEYWORDS.len() {
            if KEYWORDS[i].id as usize == KEYWORDS[j].id as usize
                || registry::str_eq(KEYWORDS[i].canonical, KEYWORDS[j].canonical)
            {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_matches_enum_cardinality() {
        assert_eq!(KEYWORDS.len(), 35);
        assert_eq!(Keyword::COUNT, 35);
        assert_eq!(Keyword::iter().count(), KEYWORDS.len());
    }

    #[test]
    fn test_every_variant_round_trips() {
        for id in Keyword::iter() {
            assert_eq!(from_str(as_str(id)), Some(id), "round trip failed for {id:?}");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive_and_whole_string() {
        assert_eq!(from_str("return"), Some(Keyword::Return));
        assert_eq!(from_str("Return"), None);
        assert_eq!(from_str("returns"), None);
        assert_eq!(from_str(" return"), None);
        assert_eq!(from_str(""), None);
        assert_eq!(from_str("notakeyword"), None);
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved(Keyword::Unsafe));
        assert!(is_reserved(Keyword::Macro));
        assert!(!is_reserved(Keyword::Let));
        assert_eq!(category(Keyword::Private), KeywordCategory::Reserved);
        assert_eq!(from_str("impl"), Some(Keyword::Impl));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Keyword::Interface.to_string(), "interface");
        assert_eq!("while".parse::<Keyword>(), Ok(Keyword::While));
        let err = "whilst".parse::<Keyword>().unwrap_err();
        assert_eq!(err, UnknownKeyword("whilst".to_string()));
        assert_eq!(err.to_string(), "`whilst` is not a reserved word");
    }
}
