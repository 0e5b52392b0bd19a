//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Portal site manifest resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to the project root
    #[arg(short = 'C', long, default_value = "portal.toml")]
    pub config: PathBuf,

    /// Deployment target declared under `[targets.<name>]`
    ///
    /// Without a target the descriptor is used as written.
    #[arg(short, long)]
    pub target: Option<String>,

    /// `.env` file layered beneath the process environment
    #[arg(short, long)]
    pub env_file: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the descriptor; exits non-zero listing every violation
    Check,

    /// Print the resolved manifest as JSON
    Resolve {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the shared `<head>` tags
    Head {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Filter sitemap candidates and write the sitemap
    Sitemap {
        /// JSON array of `{ "url": .., "lastmod": .. }` records
        #[arg(short, long)]
        items: PathBuf,

        /// Output path (default: `[sitemap].filename` under the project root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the declared deployment targets
    Targets,
}
