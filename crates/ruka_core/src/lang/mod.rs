//! Ruka language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords and parameter modes.
//!
//! Callers work with **stable ids** ([`keywords::Keyword`], [`modes::Mode`]) and look up spellings and metadata via
//! the registry tables instead of matching on strings.
//!
//! ## Notes
//! - Registries are **pure**: no token types, no IO, no side effects.
//! - Every table is checked against its enumeration at compile time (see [`registry`]).
//!
//! ## Examples
//! ```rust
//! use ruka_core::lang::keywords::{self, Keyword};
//! use ruka_core::lang::modes::{self, Mode};
//!
//! assert_eq!(keywords::from_str("match"), Some(Keyword::Match));
//! assert_eq!(keywords::as_str(Keyword::Match), "match");
//! assert_eq!(modes::from_str("mut"), Some(Mode::Mutable));
//! ```

pub mod keywords;
pub mod modes;
pub mod registry;
