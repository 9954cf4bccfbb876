//! ossql CLI
//!
//! Command-line tool for parsing OpenSearch SQL.

use std::path::PathBuf;

use anyhow::Context;

use clap::{Args, Parser as ClapParser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use ossql_cli::{read_input, render_batch, render_root, render_tokens, CliError, OutputFormat};
use ossql_core::{Lexer, Parser, ParserOptions, DEFAULT_MAX_DEPTH};

/// Parse OpenSearch SQL and print the result.
#[derive(ClapParser)]
#[command(name = "ossql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum grammar nesting depth.
    #[arg(long, env = "OSSQL_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    max_depth: usize,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the SQL comes from: the argument, `--file`, or standard input.
#[derive(Args)]
struct Input {
    /// SQL text. Read from `--file` or standard input when omitted.
    sql: Option<String>,

    /// Read SQL from a file.
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,
}

impl Input {
    fn load(self) -> anyhow::Result<String> {
        let source = self
            .file
            .as_ref()
            .map_or_else(|| String::from("standard input"), |p| p.display().to_string());
        read_input(self.sql, self.file.as_deref())
            .with_context(|| format!("failed to read SQL from {source}"))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse SQL and print the tree.
    Parse {
        #[command(flatten)]
        input: Input,

        /// Output format.
        #[arg(long, value_enum, env = "OSSQL_FORMAT", default_value_t = OutputFormat::Debug)]
        format: OutputFormat,

        /// Treat the input as `;`-separated statements and skip the ones that
        /// fail to parse.
        #[arg(short, long)]
        batch: bool,
    },

    /// Print the token stream.
    Tokens {
        #[command(flatten)]
        input: Input,
    },

    /// Parse every statement and report failures.
    Check {
        #[command(flatten)]
        input: Input,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the log subscriber")?;

    let options = ParserOptions::new().with_max_depth(cli.max_depth);
    debug!(max_depth = options.max_depth, "parser options");

    match cli.command {
        Commands::Parse {
            input,
            format,
            batch,
        } => {
            let sql = input.load()?;
            let mut parser = Parser::with_options(&sql, options);
            if batch {
                let parsed = parser.parse_batch();
                let rendered = render_batch(&parsed, format).context("failed to render batch")?;
                println!("{rendered}");
                if !parsed.is_ok() {
                    return Err(CliError::Batch {
                        failed: parsed.errors.len(),
                        total: parsed.statements.len() + parsed.errors.len(),
                    }
                    .into());
                }
            } else {
                let root = parser
                    .parse_root()
                    .map_err(CliError::from)
                    .context("failed to parse statement")?;
                let rendered = render_root(&root, format).context("failed to render tree")?;
                println!("{rendered}");
            }
            let stats = parser.stats();
            debug!(
                decisions = stats.decisions_recorded,
                cache_hits = stats.cache_hits,
                "decision cache"
            );
        }

        Commands::Tokens { input } => {
            let sql = input.load()?;
            let tokens = Lexer::new(&sql).tokenize();
            print!("{}", render_tokens(&tokens, &sql));
        }

        Commands::Check { input } => {
            let sql = input.load()?;
            let batch = Parser::with_options(&sql, options).parse_batch();
            for err in &batch.errors {
                eprintln!("error: {err}");
            }
            if !batch.is_ok() {
                return Err(CliError::Batch {
                    failed: batch.errors.len(),
                    total: batch.statements.len() + batch.errors.len(),
                }
                .into());
            }
            info!("{} statements OK", batch.statements.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_depth() {
        let cli = Cli::try_parse_from(["ossql", "check", "SELECT 1"]).unwrap();
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_missing_file_has_context() {
        let input = Input {
            sql: None,
            file: Some(PathBuf::from("no/such/queries.sql")),
        };
        let err = input.load().unwrap_err();
        assert!(err.to_string().contains("failed to read SQL from no/such/queries.sql"));
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Read { .. })
        ));
    }
}
