//! Child process execution with an environment overlay.

use crate::error::{ForepathError, Result};
use std::collections::HashMap;
use std::process::Command;
use std::time::{Duration, Instant};

/// Result of running a child command.
#[derive(Debug, Clone)]
pub struct CommandStatus {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,

    /// Execution duration.
    pub duration: Duration,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<std::path::PathBuf>,

    /// Environment variables layered over the inherited environment.
    pub env: HashMap<String, String>,
}

/// Run `program` with `args`, stdio inherited from the parent.
///
/// Overlay variables in `options.env` shadow inherited ones, which is how
/// the child observes the prepended search path.
pub fn execute(program: &str, args: &[String], options: &CommandOptions) -> Result<CommandStatus> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    let status = cmd
        .status()
        .map_err(|e| ForepathError::CommandSpawnFailed {
            command: program.to_string(),
            message: e.to_string(),
        })?;

    Ok(CommandStatus {
        exit_code: status.code(),
        success: status.success(),
        duration: start.elapsed(),
    })
}
