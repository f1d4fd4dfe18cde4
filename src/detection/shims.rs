//! Environment-manager shim directories.
//!
//! Version managers interpose shim directories on the search path; these are
//! the entries a prepended bin directory jumps ahead of. Used by `status`
//! reporting only — forepath never touches them.

use std::path::PathBuf;

/// A known environment manager and its shim directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimDir {
    /// Manager name (mise, asdf, ...).
    pub name: &'static str,
    /// Resolved shim directory.
    pub dir: PathBuf,
}

/// Resolve the shim directories of known environment managers.
///
/// Each manager's override variable wins over its conventional home
/// location. Directories are returned whether or not they exist; callers
/// check them against the live search path, not the disk.
pub fn known_shim_dirs() -> Vec<ShimDir> {
    let home = home::home_dir();

    let resolve = |var: &str, suffix: &str, fallback: &[&str]| -> Option<PathBuf> {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return Some(PathBuf::from(value).join(suffix));
            }
        }
        let mut path = home.clone()?;
        for part in fallback {
            path.push(part);
        }
        Some(path)
    };

    let specs: [(&'static str, &str, &str, &[&str]); 6] = [
        ("mise", "MISE_DATA_DIR", "shims", &[".local", "share", "mise", "shims"]),
        ("asdf", "ASDF_DATA_DIR", "shims", &[".asdf", "shims"]),
        ("volta", "VOLTA_HOME", "bin", &[".volta", "bin"]),
        ("pyenv", "PYENV_ROOT", "shims", &[".pyenv", "shims"]),
        ("rbenv", "RBENV_ROOT", "shims", &[".rbenv", "shims"]),
        ("nodenv", "NODENV_ROOT", "shims", &[".nodenv", "shims"]),
    ];

    specs
        .into_iter()
        .filter_map(|(name, var, suffix, fallback)| {
            resolve(var, suffix, fallback).map(|dir| ShimDir { name, dir })
        })
        .collect()
}
