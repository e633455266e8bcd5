//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use ruka_syntax::lexer::{self, Kind, KindTag};

use super::{CliError, CliResult, ExitCode};
use crate::reference;

/// Print the vocabulary reference, or write it to `output`.
pub fn vocab(output: Option<&Path>) -> CliResult<ExitCode> {
    let markdown = reference::render_markdown();

    let Some(path) = output else {
        print!("{markdown}");
        return Ok(ExitCode::SUCCESS);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::failure(format!("Error creating {}: {}", parent.display(), e)))?;
    }
    fs::write(path, markdown).map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), "wrote vocabulary reference");

    Ok(ExitCode::SUCCESS)
}

/// Print one classification line per spelling.
pub fn classify(spellings: &[String]) -> CliResult<ExitCode> {
    for spelling in spellings {
        println!("{}", describe(spelling));
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the canonical spelling for a fixed-spelling kind, named by its tag.
pub fn render_tag(name: &str) -> CliResult<ExitCode> {
    let tag: KindTag = name
        .parse()
        .map_err(|_| CliError::failure(format!("Error: unknown token kind `{name}`")))?;
    let kind = Kind::from_tag(tag).ok_or_else(|| {
        CliError::failure(format!(
            "Error: `{name}` carries a payload and has no fixed spelling"
        ))
    })?;
    println!("{}", kind.render().escape_debug());
    Ok(ExitCode::SUCCESS)
}

/// Describe how the token model classifies `spelling`.
///
/// Vocabulary spellings (keywords, modes, symbols) resolve as a whole. Anything shaped like an identifier is an
/// identifier. Everything else is reported byte by byte, the way a scanner would fall back to `classify_byte`.
pub fn describe(spelling: &str) -> String {
    let kind = if let Some(kind) = Kind::from_spelling(spelling) {
        kind
    } else if is_identifier(spelling) {
        Kind::Identifier(spelling.to_string())
    } else {
        let bytes: Vec<&str> = spelling
            .bytes()
            .map(|b| lexer::classify_byte(b).tag().name())
            .collect();
        tracing::debug!(spelling, "no whole-string match; classified per byte");
        return format!("{spelling:?} => bytes [{}]", bytes.join(", "));
    };
    tracing::debug!(spelling, tag = kind.tag().name(), "classified");
    format!("{spelling:?} => {kind:?}")
}

fn is_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => false,
    }
}
