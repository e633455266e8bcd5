#![forbid(unsafe_code)]
//! Canonical language vocabulary for the Ruka compiler front-end.
//!
//! This crate is intentionally small and dependency-light. It holds the closed tables that map reserved words and
//! parameter-mode annotations to stable ids, and the compile-time checks that keep each table in lockstep with its
//! enumeration.
//!
//! ## Notes
//!
//! - This is a pure vocabulary crate: **no IO**, no logging, no mutable global state.
//! - The token model that embeds these ids lives in `ruka_syntax`.

pub mod lang;

pub use lang::keywords::{Keyword, UnknownKeyword};
pub use lang::modes::{Mode, UnknownMode};
