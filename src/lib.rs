#![forbid(unsafe_code)]
//! Ruka lexical token model.
//!
//! This crate ties together the vocabulary registries (`ruka_core`) and the token model (`ruka_syntax`), and adds
//! tooling on top: a Markdown vocabulary reference and the `ruka` CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: Registry lookups that the compile-time table checks guarantee use
//!   `.expect("INVARIANT: reason")`.

pub mod cli;
pub mod reference;

pub use ruka_core::lang;
pub use ruka_syntax::lexer;
pub use ruka_syntax::lexer::{Kind, Position, Token};
