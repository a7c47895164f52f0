//! Linkdeck CLI — the main entry point.
//!
//! Commands:
//! - `links`   — Run the pipeline and print grouped links for a member
//! - `doctor`  — Diagnose configuration problems
//! - `init`    — Write a default linkdeck.toml

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "linkdeck",
    about = "Linkdeck — pluggable action links for member profile pages",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a linkdeck.toml (defaults to ./linkdeck.toml or $LINKDECK_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render grouped links for a member profile
    Links {
        /// The viewed member's id
        #[arg(short, long)]
        member: u64,

        /// The viewed member's display name
        #[arg(long, default_value = "Member")]
        name: String,

        /// Grant the viewer a permission (repeatable)
        #[arg(short, long = "permission", value_name = "PERMISSION")]
        permissions: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Diagnose configuration problems
    Doctor,

    /// Write a default linkdeck.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Links {
            member,
            name,
            permissions,
            format,
        } => commands::links::run(cli.config.as_deref(), member, &name, permissions, format)?,
        Commands::Doctor => commands::doctor::run(cli.config.as_deref())?,
        Commands::Init { force } => commands::init::run(cli.config.as_deref(), force)?,
    }

    Ok(())
}
