//! Command-line front end for the OpenSearch SQL parser.
//!
//! The `ossql` binary parses SQL from an argument, a file or standard input
//! and prints the tree, the canonical SQL or the token stream.
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the tree as JSON
//! ossql parse --format json "SELECT a FROM logs WHERE match(msg, 'x')"
//!
//! # Canonical SQL for every statement of a file
//! ossql parse --batch --format sql --file queries.sql
//!
//! # Exit non-zero if any statement fails to parse
//! ossql check --file queries.sql
//!
//! # Dump tokens
//! ossql tokens "SELECT 1"
//! ```

pub mod error;
pub mod render;

pub use error::{CliError, Result};
pub use render::{read_input, render_batch, render_root, render_tokens, OutputFormat};
