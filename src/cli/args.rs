//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// forepath - Give a package manager's binaries precedence on PATH.
#[derive(Debug, Parser)]
#[command(name = "forepath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides discovery of .forepath.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Put the manager's bin directory first on PATH (default if no command specified)
    Activate(ActivateArgs),

    /// Print shell statements for `eval "$(forepath env)"`
    Env(EnvArgs),

    /// Run a command with the prepended PATH
    Run(RunArgs),

    /// Show where the manager's bin directory sits on PATH
    Status(StatusArgs),

    /// Write a starter .forepath.yml
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `activate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ActivateArgs {
    /// Package manager whose bin directory goes first
    #[arg(short, long)]
    pub manager: Option<String>,

    /// Explicit bin directory (not validated)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    /// Package manager whose bin directory goes first
    #[arg(short, long)]
    pub manager: Option<String>,

    /// Explicit bin directory (not validated)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Shell syntax to emit (bash, zsh, fish, powershell, cmd)
    #[arg(short, long)]
    pub shell: Option<String>,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Package manager whose bin directory goes first
    #[arg(short, long)]
    pub manager: Option<String>,

    /// Explicit bin directory (not validated)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Command (and arguments) to run with the prepended PATH
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub command: Vec<String>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Package manager to report on
    #[arg(short, long)]
    pub manager: Option<String>,

    /// Explicit bin directory to report on
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
