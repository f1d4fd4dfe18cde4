//! Per-shell export syntax.
//!
//! Renders an [`EnvDelta`] as statements the target shell can evaluate, so
//! `eval "$(forepath env)"` gives the path change a lasting effect in the
//! calling session.

use crate::environment::EnvDelta;
use crate::shell::platform::ShellType;

/// Render a single assignment in the target shell's syntax.
pub fn export_line(shell: ShellType, key: &str, value: &str) -> String {
    match shell {
        ShellType::Bash | ShellType::Zsh | ShellType::Unknown => {
            format!("export {}=\"{}\"", key, quote_posix(value))
        }
        // fish splits colon-delimited strings assigned to PATH itself.
        ShellType::Fish => format!("set -gx {} \"{}\"", key, quote_fish(value)),
        ShellType::PowerShell => format!("$env:{} = \"{}\"", key, quote_powershell(value)),
        ShellType::Cmd => format!("set \"{}={}\"", key, value),
    }
}

/// Render all staged assignments, one statement per line.
pub fn render_exports(shell: ShellType, delta: &EnvDelta) -> String {
    delta
        .iter()
        .map(|(key, value)| export_line(shell, key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The command a user evaluates to pull `forepath env` output into the
/// current session.
pub fn eval_hint(shell: ShellType) -> &'static str {
    match shell {
        ShellType::Bash | ShellType::Zsh | ShellType::Unknown => "eval \"$(forepath env)\"",
        ShellType::Fish => "forepath env | source",
        ShellType::PowerShell => "forepath env | Out-String | Invoke-Expression",
        ShellType::Cmd => "forepath env > \"%TEMP%\\forepath.cmd\" && call \"%TEMP%\\forepath.cmd\"",
    }
}

fn quote_posix(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('`', "\\`")
}

fn quote_fish(value: &str) -> String {
    // Inside fish double quotes only \, " and $ are special.
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
}

fn quote_powershell(value: &str) -> String {
    value
        .replace('`', "``")
        .replace('"', "`\"")
        .replace('$', "`$")
}
