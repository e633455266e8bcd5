//! Shareable metadata for `ruka_core::lang` registries.
//!
//! The `ruka_core::lang` module is a set of **registry-first** vocabularies. This submodule provides the small
//! metadata types reused across registries, plus the `const fn` building blocks for the compile-time table checks.
//!
//! ## Notes
//! - Metadata types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs; enforcement of syntax rules lives with the scanner and parser.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::modes`]

use std::fmt;

use rustc_hash::FxHashMap;

/// Identify the language version a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use ruka_core::lang::registry::Since;
///
/// assert_eq!(Since(0, 1).to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Since(pub u8, pub u8);

impl fmt::Display for Since {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - `Reserved` spellings are recognized by the scanner but have no grammar yet. Keeping them reserved stops user code
///   from claiming them as identifiers before the feature lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Reserved,
}

impl Stability {
    pub fn as_str(self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Reserved => "reserved",
        }
    }
}

/// Byte-wise string equality usable in `const` contexts.
pub const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Spelling-keyed index over a registry, built once and shared read-only.
pub type SpellingIndex<Id> = FxHashMap<&'static str, Id>;

/// Build a [`SpellingIndex`] from `(spelling, id)` pairs.
///
/// ## Notes
/// - Duplicate spellings are rejected at compile time by each registry's table check, so insertion order does not
///   matter here.
pub fn build_index<Id, I>(entries: I) -> SpellingIndex<Id>
where
    I: IntoIterator<Item = (&'static str, Id)>,
{
    entries.into_iter().collect()
}
