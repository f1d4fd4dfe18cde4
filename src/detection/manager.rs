//! Package manager bin directory resolution.
//!
//! The directory that gets prepended belongs to one package manager. Each
//! known manager maps to candidate bin directories: an environment variable
//! override first, then the conventional home locations. Resolution picks a
//! candidate; it never validates what ends up on the path.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ForepathError, Result};

/// Package managers whose bin directory forepath can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Homebrew,
    Cargo,
    Npm,
    Pnpm,
    Yarn,
    Bun,
    Deno,
    Pipx,
    Go,
    Composer,
}

impl PackageManager {
    /// All known managers, in auto-detection order.
    pub const ALL: [PackageManager; 10] = [
        PackageManager::Homebrew,
        PackageManager::Cargo,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
        PackageManager::Deno,
        PackageManager::Npm,
        PackageManager::Pipx,
        PackageManager::Go,
        PackageManager::Composer,
    ];

    /// Candidate bin directories, highest priority first.
    ///
    /// Environment variable overrides come before conventional locations.
    /// Candidates that require an unresolvable home directory are omitted.
    pub fn candidate_bin_dirs(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        let home = home::home_dir();

        let mut from_env = |var: &str, suffix: Option<&str>| {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    let mut path = PathBuf::from(value);
                    if let Some(suffix) = suffix {
                        path.push(suffix);
                    }
                    candidates.push(path);
                }
            }
        };

        match self {
            PackageManager::Homebrew => {
                from_env("HOMEBREW_PREFIX", Some("bin"));
                candidates.push(PathBuf::from("/opt/homebrew/bin"));
                candidates.push(PathBuf::from("/usr/local/bin"));
                candidates.push(PathBuf::from("/home/linuxbrew/.linuxbrew/bin"));
            }
            PackageManager::Cargo => {
                from_env("CARGO_HOME", Some("bin"));
                if let Some(home) = &home {
                    candidates.push(home.join(".cargo").join("bin"));
                }
            }
            PackageManager::Npm => {
                from_env("NPM_CONFIG_PREFIX", Some("bin"));
                if let Some(home) = &home {
                    candidates.push(home.join(".npm-global").join("bin"));
                }
            }
            PackageManager::Pnpm => {
                from_env("PNPM_HOME", None);
                if let Some(home) = &home {
                    candidates.push(home.join(".local").join("share").join("pnpm"));
                }
            }
            PackageManager::Yarn => {
                if let Some(home) = &home {
                    candidates.push(home.join(".yarn").join("bin"));
                }
            }
            PackageManager::Bun => {
                from_env("BUN_INSTALL", Some("bin"));
                if let Some(home) = &home {
                    candidates.push(home.join(".bun").join("bin"));
                }
            }
            PackageManager::Deno => {
                from_env("DENO_INSTALL", Some("bin"));
                if let Some(home) = &home {
                    candidates.push(home.join(".deno").join("bin"));
                }
            }
            PackageManager::Pipx => {
                from_env("PIPX_BIN_DIR", None);
                if let Some(home) = &home {
                    candidates.push(home.join(".local").join("bin"));
                }
            }
            PackageManager::Go => {
                from_env("GOBIN", None);
                from_env("GOPATH", Some("bin"));
                if let Some(home) = &home {
                    candidates.push(home.join("go").join("bin"));
                }
            }
            PackageManager::Composer => {
                if let Some(home) = &home {
                    candidates.push(home.join(".config").join("composer").join("vendor").join("bin"));
                    candidates.push(home.join(".composer").join("vendor").join("bin"));
                }
            }
        }

        candidates
    }

    /// Resolve the bin directory to prepend.
    ///
    /// Prefers the first candidate that exists on disk; if none does, the
    /// first conventional candidate is used as-is. Existence only steers the
    /// choice between candidates, the chosen directory is never validated.
    pub fn resolve_bin_dir(&self) -> Result<PathBuf> {
        let candidates = self.candidate_bin_dirs();
        if candidates.is_empty() {
            return Err(ForepathError::HomeDirUnavailable {
                manager: self.to_string(),
            });
        }

        Ok(candidates
            .iter()
            .find(|c| c.is_dir())
            .cloned()
            .unwrap_or_else(|| candidates[0].clone()))
    }

    /// Auto-detect: the first manager with an existing bin directory.
    pub fn detect() -> Option<PackageManager> {
        Self::ALL
            .into_iter()
            .find(|m| m.candidate_bin_dirs().iter().any(|c| c.is_dir()))
    }
}

impl FromStr for PackageManager {
    type Err = ForepathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "homebrew" | "brew" => Ok(PackageManager::Homebrew),
            "cargo" => Ok(PackageManager::Cargo),
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "bun" => Ok(PackageManager::Bun),
            "deno" => Ok(PackageManager::Deno),
            "pipx" => Ok(PackageManager::Pipx),
            "go" => Ok(PackageManager::Go),
            "composer" => Ok(PackageManager::Composer),
            _ => Err(ForepathError::UnknownManager {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PackageManager::Homebrew => "homebrew",
            PackageManager::Cargo => "cargo",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
            PackageManager::Pipx => "pipx",
            PackageManager::Go => "go",
            PackageManager::Composer => "composer",
        };
        write!(f, "{}", name)
    }
}
