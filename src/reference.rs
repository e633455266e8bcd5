//! Generate a Markdown vocabulary reference from the registries.
//!
//! Renders the keyword table, the mode table, and the fixed-symbol table into one Markdown document. The output is
//! meant to be checked in as a derived artifact; update the registries rather than editing the Markdown.
//!
//! ## Examples
//! ```bash
//! ruka vocab --output docs/language/reference/vocabulary.md
//! ```

use ruka_core::lang::{keywords, modes};
use ruka_syntax::lexer::{Kind, SYMBOLS};

/// Render the full vocabulary reference.
pub fn render_markdown() -> String {
    let mut out = String::new();
    out.push_str("# Ruka vocabulary reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    Regenerate with: `ruka vocab --output <path>`\n\n");

    out.push_str("## Contents\n\n");
    out.push_str("- [Keywords](#keywords)\n");
    out.push_str("- [Parameter modes](#parameter-modes)\n");
    out.push_str("- [Symbols](#symbols)\n");
    out.push_str("- [Structural tokens](#structural-tokens)\n\n");

    render_keywords_section(&mut out);
    render_modes_section(&mut out);
    render_symbols_section(&mut out);
    render_structural_section(&mut out);

    trim_trailing_newlines_to_at_most_two(&mut out);
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn render_keywords_section(out: &mut String) {
    start_section(out, "## Keywords");

    out.push_str("| Spelling | Variant | Category | Since | Stability |\n");
    out.push_str("|---|---|---|---|---|\n");

    for k in keywords::KEYWORDS {
        out.push_str(&format!(
            "| {} | {:?} | {} | {} | {} |\n",
            code_cell(k.canonical),
            k.id,
            k.category.as_str(),
            k.since,
            k.stability.as_str()
        ));
    }
}

fn render_modes_section(out: &mut String) {
    start_section(out, "## Parameter modes");

    out.push_str("| Spelling | Variant | Description | Since |\n");
    out.push_str("|---|---|---|---|\n");

    for m in modes::MODES {
        out.push_str(&format!(
            "| {} | {:?} | {} | {} |\n",
            code_cell(m.canonical),
            m.id,
            m.description,
            m.since
        ));
    }
}

fn render_symbols_section(out: &mut String) {
    start_section(out, "## Symbols");

    out.push_str("Multi-byte symbols are matched longest-first; single-byte symbols are what `classify_byte` returns.\n\n");
    out.push_str("| Spelling | Variant | Category | Bytes |\n");
    out.push_str("|---|---|---|---|\n");

    for s in SYMBOLS {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            code_cell(s.spelling),
            s.kind.tag().name(),
            s.category.as_str(),
            s.spelling.len()
        ));
    }
}

fn render_structural_section(out: &mut String) {
    start_section(out, "## Structural tokens");

    out.push_str("| Variant | Rendering |\n");
    out.push_str("|---|---|\n");

    for kind in [Kind::Newline, Kind::Eof, Kind::Illegal] {
        out.push_str(&format!(
            "| {} | {} |\n",
            kind.tag().name(),
            code_cell(&kind.render().escape_debug().to_string())
        ));
    }
}

/// Wrap a spelling in backticks, escaping `|` so it does not split the table cell.
fn code_cell(spelling: &str) -> String {
    format!("`{}`", spelling.replace('|', "\\|"))
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let count = out.chars().rev().take_while(|&ch| ch == '\n').count();
    for _ in 2..count {
        out.pop();
    }
}

fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}
