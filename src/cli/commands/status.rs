//! Precedence reporting.
//!
//! `forepath status` shows where the target bin directory sits on the live
//! PATH: whether it is first, how many copies repeated activation has left
//! behind, and which environment-manager shim directories it precedes.

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::config::ForepathConfig;
use crate::detection::known_shim_dirs;
use crate::error::Result;
use crate::path::SearchPath;
use crate::shell::{detect_shell, eval_hint};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::target::{resolve_target, Target};

/// Machine-readable status report.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Manager the directory belongs to, when known.
    pub manager: Option<String>,
    /// The directory being reported on.
    pub bin_dir: String,
    /// Whether the directory is the first PATH entry.
    pub active: bool,
    /// 1-based position of the first occurrence, if on PATH.
    pub position: Option<usize>,
    /// How many times the directory appears.
    pub occurrences: usize,
    /// Total PATH entries.
    pub path_entries: usize,
    /// Shim directories of known environment managers found on PATH.
    pub shims: Vec<ShimReport>,
}

/// One environment manager's shim directory as seen on PATH.
#[derive(Debug, Serialize)]
pub struct ShimReport {
    /// Environment manager name.
    pub name: String,
    /// Shim directory.
    pub dir: String,
    /// 1-based PATH position.
    pub position: usize,
    /// Whether the target bin directory comes before it.
    pub preceded: bool,
}

/// Build a report for `target` against `search`.
pub fn build_report(target: &Target, search: &SearchPath) -> StatusReport {
    let dir = target.dir_string();
    let position = search.position(&dir);

    let shims = known_shim_dirs()
        .into_iter()
        .filter_map(|shim| {
            let shim_dir = shim.dir.to_string_lossy().into_owned();
            search.position(&shim_dir).map(|shim_pos| ShimReport {
                name: shim.name.to_string(),
                dir: shim_dir,
                position: shim_pos + 1,
                preceded: position.map(|p| p < shim_pos).unwrap_or(false),
            })
        })
        .collect();

    StatusReport {
        manager: target.manager.map(|m| m.to_string()),
        bin_dir: dir.clone(),
        active: search.starts_with(&dir),
        position: position.map(|p| p + 1),
        occurrences: search.occurrences(&dir),
        path_entries: search.len(),
        shims,
    }
}

/// The status command implementation.
pub struct StatusCommand {
    config: ForepathConfig,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(config: ForepathConfig, args: StatusArgs) -> Self {
        Self { config, args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let target = resolve_target(&self.config, self.args.manager.as_deref(), self.args.dir.as_deref())?;
        let search = SearchPath::from_env();
        let report = build_report(&target, &search);

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        out.keyval("Manager", report.manager.as_deref().unwrap_or("custom"));
        out.keyval("Bin dir", &report.bin_dir);
        match report.position {
            Some(1) => out.keyval(
                "Active",
                &format!("yes (position 1 of {})", report.path_entries),
            ),
            Some(pos) => out.keyval(
                "Active",
                &format!("no (position {} of {})", pos, report.path_entries),
            ),
            None => out.keyval("Active", "no (not on PATH)"),
        }
        out.keyval("Occurrences", &report.occurrences.to_string());

        if !report.shims.is_empty() {
            out.message("Shims on PATH:");
            for shim in &report.shims {
                let relation = if shim.preceded { "preceded" } else { "ahead" };
                out.message(&format!(
                    "  {} {} (position {}, {})",
                    shim.name, shim.dir, shim.position, relation
                ));
            }
        }

        if !report.active {
            out.hint(&format!("Activate for this shell with: {}", eval_hint(detect_shell())));
        }

        Ok(CommandResult::success())
    }
}
