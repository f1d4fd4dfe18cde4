//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-facing configuration, from `.forepath.yml` or the user config file.
///
/// Every field is optional; CLI flags override whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForepathConfig {
    /// Package manager whose bin directory goes first (e.g. `homebrew`).
    pub manager: Option<String>,

    /// Explicit bin directory, bypassing manager resolution. Not validated.
    pub bin_dir: Option<PathBuf>,

    /// Shell to render export syntax for (`bash`, `zsh`, `fish`,
    /// `powershell`, `cmd`). Default is detection from the environment.
    pub shell: Option<String>,
}

impl ForepathConfig {
    /// Merge two configs; fields set in `overlay` win.
    pub fn merge(base: Self, overlay: Self) -> Self {
        Self {
            manager: overlay.manager.or(base.manager),
            bin_dir: overlay.bin_dir.or(base.bin_dir),
            shell: overlay.shell.or(base.shell),
        }
    }
}
