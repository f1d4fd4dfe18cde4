//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{ActivateArgs, Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Writer for human-facing output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, config_override: Option<PathBuf>) -> Self {
        Self {
            project_root,
            config_override,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Loads the effective configuration once, then routes the CLI
    /// subcommand to the appropriate command implementation.
    pub fn dispatch(&self, cli: &Cli, out: &mut Output) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;

        match &cli.command {
            Some(Commands::Activate(args)) => {
                let cmd = super::activate::ActivateCommand::new(config, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Env(args)) => {
                let cmd = super::env::EnvCommand::new(config, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(config, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(config, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(&self.project_root, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
            None => {
                // Default to activate with default args
                let cmd = super::activate::ActivateCommand::new(config, ActivateArgs::default());
                cmd.execute(out)
            }
        }
    }
}
