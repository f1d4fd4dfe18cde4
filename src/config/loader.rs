//! Configuration file discovery and loading.

use crate::config::schema::ForepathConfig;
use crate::error::{ForepathError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".forepath.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User config (`$XDG_CONFIG_HOME/forepath/config.yml` or
///    `~/.config/forepath/config.yml`)
/// 2. Project config (`./.forepath.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's config file, if present.
    pub user_global: Option<PathBuf>,

    /// Project config, if present.
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Self::find_project_config(project_root),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        let base = match std::env::var_os("XDG_CONFIG_HOME") {
            Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
            _ => home::home_dir()?.join(".config"),
        };
        let path = base.join("forepath").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        let mut paths = Vec::new();
        if let Some(p) = &self.user_global {
            paths.push(p);
        }
        if let Some(p) = &self.project {
            paths.push(p);
        }
        paths
    }
}

/// Load the effective configuration.
///
/// With `explicit` set (the `--config` flag), exactly that file is loaded
/// and a missing file is an error. Otherwise discovered configs merge in
/// priority order; none existing yields the default config.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ForepathConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    let paths = ConfigPaths::discover(project_root);
    let mut config = ForepathConfig::default();
    for path in paths.all_existing() {
        tracing::debug!("Merging config from {}", path.display());
        config = ForepathConfig::merge(config, load_config_file(path)?);
    }
    Ok(config)
}

/// Load a single config file and parse it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ForepathConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ForepathError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ForepathError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`ForepathConfig`].
///
/// An empty (or comment-only) document parses to the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ForepathConfig> {
    let as_error = |e: serde_yaml::Error| ForepathError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    };

    // An empty or comment-only document deserializes as null, not a mapping.
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(as_error)?;
    if value.is_null() {
        return Ok(ForepathConfig::default());
    }

    serde_yaml::from_value(value).map_err(as_error)
}
