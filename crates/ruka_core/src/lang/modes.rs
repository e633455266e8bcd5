//! Parameter-mode vocabulary.
//!
//! Modes annotate how an argument is passed (`comptime`, `loc`, `mov`, `mut`). They are resolved from identifier
//! candidates the same way keywords are, but live in their own closed table so the parser can treat them as
//! annotations rather than statements.
//!
//! ## Examples
//! ```rust
//! use ruka_core::lang::modes::{self, Mode};
//!
//! assert_eq!(modes::from_str("mov"), Some(Mode::Move));
//! assert_eq!(modes::as_str(Mode::Comptime), "comptime");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use strum::{EnumCount, EnumIter};
use thiserror::Error;

use super::registry::{self, Since, SpellingIndex, Stability};

/// Stable identifier for every parameter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCount, EnumIter)]
pub enum Mode {
    /// Argument must be known at compile time.
    Comptime,
    /// Argument is passed by location (a borrowed place).
    Location,
    /// Argument is moved into the callee.
    Move,
    /// Argument may be mutated by the callee.
    Mutable,
}

/// Metadata for a parameter mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeInfo {
    pub id: Mode,
    pub canonical: &'static str,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all parameter modes.
pub const MODES: &[ModeInfo] = &[
    info(Mode::Comptime, "comptime", "value is evaluated at compile time"),
    info(Mode::Location, "loc", "argument is passed by location"),
    info(Mode::Move, "mov", "argument is moved into the callee"),
    info(Mode::Mutable, "mut", "argument may be mutated by the callee"),
];

const _: () = assert!(
    table_is_bijective(),
    "MODES must hold exactly one entry per Mode variant, with distinct spellings"
);

static INDEX: LazyLock<SpellingIndex<Mode>> =
    LazyLock::new(|| registry::build_index(MODES.iter().map(|m| (m.canonical, m.id))));

/// Return the canonical spelling for a mode.
pub fn as_str(id: Mode) -> &'static str {
    info_for(id).canonical
}

/// Return the one-line description for a mode.
pub fn description(id: Mode) -> &'static str {
    info_for(id).description
}

/// Return the full metadata entry for a mode.
///
/// ## Panics
/// - If the registry is missing an entry for `id`. The compile-time table check rules this out.
pub fn info_for(id: Mode) -> &'static ModeInfo {
    MODES
        .iter()
        .find(|m| m.id == id)
        .expect("INVARIANT: every Mode has a MODES entry")
}

/// Resolve a mode spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive** and whole-string. `None` means the candidate is not a mode.
pub fn from_str(s: &str) -> Option<Mode> {
    INDEX.get(s).copied()
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Returned when parsing a [`Mode`] from a spelling that is not a parameter mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a parameter mode")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s).ok_or_else(|| UnknownMode(s.to_string()))
    }
}

const fn info(id: Mode, canonical: &'static str, description: &'static str) -> ModeInfo {
    ModeInfo {
        id,
        canonical,
        description,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}

const fn table_is_bijective() -> bool {
    if MODES.len() != Mode::COUNT {
        return false;
    }
    let mut i = 0;
    while i < MODES.len() {
        let mut j = i + 1;
        while j < MODES.len() {
            if MODES[i].id as usize == MODES[j].id as usize || registry::str_eq(MODES[i].canonical, MODES[j].canonical)
            {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
