//! Shared target resolution for activate/env/run/status.
//!
//! A "target" is the directory that gets prepended, plus the manager it
//! belongs to when one is known. Precedence: `--dir`, then `--manager`,
//! then config `bin_dir`, then config `manager`, then auto-detection.

use std::path::{Path, PathBuf};

use crate::config::ForepathConfig;
use crate::detection::PackageManager;
use crate::error::{ForepathError, Result};

/// The directory to put first, and whose it is.
#[derive(Debug, Clone)]
pub struct Target {
    /// Manager the directory belongs to, when known.
    pub manager: Option<PackageManager>,

    /// Directory to prepend. Never validated.
    pub bin_dir: PathBuf,
}

impl Target {
    /// Human label for status lines: the manager name, or `custom` for an
    /// explicit directory.
    pub fn label(&self) -> String {
        match self.manager {
            Some(manager) => manager.to_string(),
            None => "custom".to_string(),
        }
    }

    /// The bin directory as a path string.
    pub fn dir_string(&self) -> String {
        self.bin_dir.to_string_lossy().into_owned()
    }
}

/// Resolve the target from flags and config.
pub fn resolve_target(
    config: &ForepathConfig,
    manager_flag: Option<&str>,
    dir_flag: Option<&Path>,
) -> Result<Target> {
    // A named manager is parsed even when a dir override wins, so typos
    // surface instead of silently labeling the target.
    let named = manager_flag.or(config.manager.as_deref());

    if let Some(dir) = dir_flag {
        let manager = named.map(|n| n.parse::<PackageManager>()).transpose()?;
        return Ok(Target {
            manager,
            bin_dir: dir.to_path_buf(),
        });
    }

    if let Some(name) = manager_flag {
        let manager: PackageManager = name.parse()?;
        let bin_dir = manager.resolve_bin_dir()?;
        return Ok(Target {
            manager: Some(manager),
            bin_dir,
        });
    }

    if let Some(dir) = &config.bin_dir {
        let manager = named.map(|n| n.parse::<PackageManager>()).transpose()?;
        return Ok(Target {
            manager,
            bin_dir: dir.clone(),
        });
    }

    if let Some(name) = &config.manager {
        let manager: PackageManager = name.parse()?;
        let bin_dir = manager.resolve_bin_dir()?;
        return Ok(Target {
            manager: Some(manager),
            bin_dir,
        });
    }

    let manager = PackageManager::detect().ok_or(ForepathError::ManagerNotDetected)?;
    tracing::debug!("Auto-detected package manager: {}", manager);
    let bin_dir = manager.resolve_bin_dir()?;
    Ok(Target {
        manager: Some(manager),
        bin_dir,
    })
}
