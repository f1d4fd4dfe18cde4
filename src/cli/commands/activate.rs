//! Path activation.
//!
//! `forepath activate` prepends the target bin directory to this process's
//! PATH and reports what it did in two status lines. The change lives as
//! long as the process; `forepath env` is the way to make it stick in the
//! calling shell.

use crate::cli::args::ActivateArgs;
use crate::config::ForepathConfig;
use crate::environment::EnvDelta;
use crate::error::Result;
use crate::path::{prepend, SearchPath};
use crate::shell::{detect_shell, eval_hint};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::target::resolve_target;

/// The activate command implementation.
pub struct ActivateCommand {
    config: ForepathConfig,
    args: ActivateArgs,
}

impl ActivateCommand {
    /// Create a new activate command.
    pub fn new(config: ForepathConfig, args: ActivateArgs) -> Self {
        Self { config, args }
    }
}

impl Command for ActivateCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let target = resolve_target(&self.config, self.args.manager.as_deref(), self.args.dir.as_deref())?;
        let dir = target.dir_string();

        let current = std::env::var("PATH").unwrap_or_default();
        let occurrences = SearchPath::parse(&current).occurrences(&dir);
        if occurrences > 0 {
            // Repeated activation duplicates the entry on purpose.
            tracing::debug!(
                "{} already on PATH ({} occurrence(s)); prepending another copy",
                dir,
                occurrences
            );
        }

        let mut delta = EnvDelta::new();
        delta.set("PATH", prepend(&dir, &current));
        delta.apply_to_process();

        // The two status lines are the command's contract; they print in
        // every output mode.
        out.status(&format!("Prepended {} to PATH", dir));
        match target.manager {
            Some(manager) => out.status(&format!(
                "{} binaries now take precedence for this session",
                manager
            )),
            None => out.status(&format!(
                "Binaries in {} now take precedence for this session",
                dir
            )),
        }

        tracing::debug!(
            "Effect is scoped to this process; for the current shell run: {}",
            eval_hint(detect_shell())
        );

        Ok(CommandResult::success())
    }
}
