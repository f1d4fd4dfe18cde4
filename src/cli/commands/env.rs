//! Sourced-mode output.
//!
//! `forepath env` prints the export statements a shell evaluates to give the
//! path change a lasting effect: `eval "$(forepath env)"`. Only shell code
//! goes to stdout so the output stays eval-safe.

use crate::cli::args::EnvArgs;
use crate::config::ForepathConfig;
use crate::environment::EnvDelta;
use crate::error::{ForepathError, Result};
use crate::path::prepend;
use crate::shell::{detect_shell, render_exports, ShellType};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::target::resolve_target;

/// The env command implementation.
pub struct EnvCommand {
    config: ForepathConfig,
    args: EnvArgs,
}

impl EnvCommand {
    /// Create a new env command.
    pub fn new(config: ForepathConfig, args: EnvArgs) -> Self {
        Self { config, args }
    }

    /// The shell to render for: flag, then config, then detection.
    fn shell(&self) -> Result<ShellType> {
        let named = self.args.shell.as_deref().or(self.config.shell.as_deref());
        match named {
            Some(name) => name
                .parse()
                .map_err(|_| ForepathError::UnknownShell {
                    name: name.to_string(),
                }),
            None => Ok(detect_shell()),
        }
    }
}

impl Command for EnvCommand {
    fn execute(&self, _out: &mut Output) -> Result<CommandResult> {
        let target = resolve_target(&self.config, self.args.manager.as_deref(), self.args.dir.as_deref())?;
        let shell = self.shell()?;

        let current = std::env::var("PATH").unwrap_or_default();
        let mut delta = EnvDelta::new();
        delta.set("PATH", prepend(&target.dir_string(), &current));

        tracing::debug!("Rendering {} export for {}", target.label(), shell);
        println!("{}", render_exports(shell, &delta));

        Ok(CommandResult::success())
    }
}
