//! Input handling and output rendering.

use std::fmt::Write as _;
use std::io::Read as _;
use std::path::Path;

use clap::ValueEnum;
use ossql_core::lexer::Span;
use ossql_core::{Batch, Root, Token};

use crate::error::{CliError, Result};

/// How parsed statements are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Rust debug representation of the tree.
    #[default]
    Debug,
    /// The tree serialized as pretty-printed JSON.
    Json,
    /// Canonical SQL rendered from the tree.
    Sql,
}

/// Returns the SQL text from the inline argument, the file, or standard input,
/// in that order of preference.
///
/// # Errors
///
/// Returns an error if the file or standard input cannot be read.
pub fn read_input(sql: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(sql) = sql {
        return Ok(sql);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        });
    }
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

/// Renders a single parsed statement.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_root(root: &Root, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Debug => format!("{root:#?}"),
        OutputFormat::Json => serde_json::to_string_pretty(root)?,
        OutputFormat::Sql => root.to_string(),
    })
}

/// Renders the statements of a batch. Errors are reported separately by the
/// caller, except in JSON output where they are part of the document.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_batch(batch: &Batch, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Debug => format!("{:#?}", batch.statements),
        OutputFormat::Json => serde_json::to_string_pretty(batch)?,
        OutputFormat::Sql => batch
            .statements
            .iter()
            .map(|statement| format!("{statement};"))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

/// One line per token: `line:column`, the token kind and its source text.
#[must_use]
pub fn render_tokens(tokens: &[Token], source: &str) -> String {
    let mut out = String::new();
    for token in tokens {
        let (line, column) = token.span.location(source);
        let _ = writeln!(
            out,
            "{line}:{column}\t{:?}\t{}",
            token.kind,
            token_text(source, token.span)
        );
    }
    out
}

fn token_text(source: &str, span: Span) -> &str {
    source.get(span.start..span.end).unwrap_or("")
}
