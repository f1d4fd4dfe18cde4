//! Config scaffolding.
//!
//! `forepath init` writes a starter `.forepath.yml` into the project root.
//! It never touches shell rc files; the config only pre-selects what the
//! other commands would otherwise take from flags or detection.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::PROJECT_CONFIG_FILE;
use crate::error::{ForepathError, Result};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

const STARTER_CONFIG: &str = "\
# forepath configuration
#
# manager: which package manager's bin directory to put first.
manager: homebrew

# bin_dir: explicit directory override; skips manager resolution and is
# never validated.
# bin_dir: /opt/homebrew/bin

# shell: force export syntax for `forepath env` (bash, zsh, fish,
# powershell, cmd). Default is detection from the environment.
# shell: zsh
";

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let path = self.project_root.join(PROJECT_CONFIG_FILE);

        if path.exists() && !self.args.force {
            return Err(ForepathError::ConfigAlreadyExists { path });
        }

        fs::write(&path, STARTER_CONFIG)?;
        out.success(&format!("Created {}", PROJECT_CONFIG_FILE));

        Ok(CommandResult::success())
    }
}
