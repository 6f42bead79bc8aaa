//! lab: interactive tour of the Singleton, Iterator and Builder patterns.
//!
//! Run with:  `RUST_LOG=info lab all`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lab_app::{ColorChoice, RunOptions};
use lab_core::{Message, SequenceRequest, StyleRequest};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lab", version, about = "Design patterns lab in the terminal")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/patterns-lab/lab.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When to colour output: auto, always or never.
    #[arg(long, global = true)]
    color: Option<ColorChoice>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Request the shared instance twice and compare.
    Singleton,
    /// Request the shared instance once per configured check.
    Check,
    /// Generate an arithmetic sequence.
    Sequence {
        #[arg(long, allow_hyphen_values = true)]
        start: Option<i64>,
        /// Inclusive bound.
        #[arg(long, allow_hyphen_values = true)]
        end: Option<i64>,
        /// Non-zero increment; negative counts down.
        #[arg(long, allow_hyphen_values = true)]
        step: Option<i64>,
        /// Stop after this many values.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Build a style and display a message with it.
    Style {
        #[arg(long)]
        text_size: Option<String>,
        #[arg(long)]
        text_color: Option<String>,
        #[arg(long)]
        bg_color: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Run every panel in order (the default).
    All,
}

impl Command {
    fn into_messages(self) -> Vec<Message> {
        match self {
            Command::Singleton => vec![Message::CreateInstance],
            Command::Check     => vec![Message::CheckInstance],
            Command::Sequence { start, end, step, limit } => {
                vec![Message::GenerateSequence(SequenceRequest { start, end, step, limit })]
            }
            Command::Style { text_size, text_color, bg_color, message } => {
                vec![Message::ApplyStyle(StyleRequest {
                    text_size,
                    text_color,
                    bg_color,
                    message,
                })]
            }
            Command::All => Message::all(),
        }
    }
}

fn main() -> Result<()> {
    // Structured logging on stderr. RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!("lab v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.unwrap_or_else(lab_app::default_config_path);
    let messages = cli.command.unwrap_or(Command::All).into_messages();

    lab_app::run(RunOptions {
        config_path,
        color: cli.color,
        messages,
    })
    .context("lab run failed")
}
