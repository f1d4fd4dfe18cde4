//! Output mode and writer.

use std::str::FromStr;

use super::theme::{should_use_colors, ForepathTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including diagnostic detail.
    Verbose,
    /// Show status and messages.
    #[default]
    Normal,
    /// Show only what is contractually printed (status lines, errors).
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows ordinary messages and hints.
    pub fn shows_messages(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows verbose detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Mode- and theme-aware writer for human-facing output.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: ForepathTheme,
}

impl Output {
    /// Create an output writer, picking colors from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ForepathTheme::new()
        } else {
            ForepathTheme::plain()
        };
        Self { mode, theme }
    }

    /// Create an output writer with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: ForepathTheme) -> Self {
        Self { mode, theme }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a line the command is contractually required to print,
    /// regardless of mode.
    pub fn status(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Write an ordinary message (suppressed in quiet mode).
    pub fn message(&self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    /// Write verbose detail (verbose mode only).
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", msg);
        }
    }

    /// Write a success message.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    /// Write a warning message.
    pub fn warning(&self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    /// Write an error message to stderr (all modes).
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Write a contextual hint (suppressed in quiet mode).
    pub fn hint(&self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", self.theme.format_hint(msg));
        }
    }

    /// Write a key-value line (suppressed in quiet mode).
    pub fn keyval(&self, key: &str, value: &str) {
        if self.mode.shows_messages() {
            println!("{}", self.theme.format_keyval(key, value));
        }
    }
}
