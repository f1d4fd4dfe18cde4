//! Scoped execution.
//!
//! `forepath run -- CMD ARGS...` runs one command with the prepended PATH,
//! without touching the calling session at all. The child's exit code is
//! propagated.

use std::collections::HashMap;

use crate::cli::args::RunArgs;
use crate::config::ForepathConfig;
use crate::environment::EnvDelta;
use crate::error::{ForepathError, Result};
use crate::path::prepend;
use crate::shell::{execute, CommandOptions};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::target::resolve_target;

/// The run command implementation.
pub struct RunCommand {
    config: ForepathConfig,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(config: ForepathConfig, args: RunArgs) -> Self {
        Self { config, args }
    }
}

impl Command for RunCommand {
    fn execute(&self, _out: &mut Output) -> Result<CommandResult> {
        let target = resolve_target(&self.config, self.args.manager.as_deref(), self.args.dir.as_deref())?;

        let current = std::env::var("PATH").unwrap_or_default();
        let mut delta = EnvDelta::new();
        delta.set("PATH", prepend(&target.dir_string(), &current));

        let env: HashMap<String, String> = delta
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        // clap enforces a non-empty command; this guards programmatic use.
        let (program, rest) = match self.args.command.split_first() {
            Some(parts) => parts,
            None => {
                return Err(ForepathError::CommandSpawnFailed {
                    command: String::new(),
                    message: "no command specified".to_string(),
                })
            }
        };

        tracing::debug!("Running {} with {} first on PATH", program, target.dir_string());
        let status = execute(
            program,
            rest,
            &CommandOptions {
                cwd: None,
                env,
            },
        )?;
        tracing::debug!("{} finished in {:?}", program, status.duration);

        if status.success {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(status.exit_code.unwrap_or(1)))
        }
    }
}
