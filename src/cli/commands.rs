//! CLI command definitions.
//!
//! This module defines all CLI commands and their arguments using clap.
//! The format flag stays a plain string so alias resolution and
//! unsupported-format errors come from the formatter engine, not clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tfsum - Terraform plan summarizer.
#[derive(Parser, Debug)]
#[command(name = "tfsum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, env = "TFSUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a Terraform plan JSON file and print a summary.
    Parse {
        /// Path to the plan JSON file, or `-` for stdin.
        plan_file: PathBuf,

        /// Show detailed resource changes.
        #[arg(short, long)]
        detailed: bool,

        /// Output format (text, natural, narrative, human, json, table, rich).
        #[arg(short, long)]
        format: Option<String>,

        /// Save output to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output.
        #[arg(long)]
        no_color: bool,
    },

    /// Generate a plan JSON file by running terraform, optionally parse it.
    Generate {
        /// Terraform working directory.
        #[arg(short = 'd', long, default_value = ".")]
        terraform_dir: PathBuf,

        /// Output plan file name.
        #[arg(short, long, default_value = "plan.json")]
        plan_file: PathBuf,

        /// Parse the plan immediately after generating it.
        #[arg(long)]
        auto_parse: bool,

        /// Show detailed output when auto-parsing.
        #[arg(long)]
        detailed: bool,
    },
}
