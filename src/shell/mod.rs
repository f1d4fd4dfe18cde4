//! Shell detection, export syntax, and command execution.

pub mod command;
pub mod platform;
pub mod syntax;

pub use command::{execute, CommandOptions, CommandStatus};
pub use platform::{detect_shell, ShellType};
pub use syntax::{eval_hint, export_line, render_exports};
