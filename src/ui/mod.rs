//! Terminal output.
//!
//! This module provides:
//! - [`OutputMode`] for verbosity selection
//! - [`Output`] for mode- and theme-aware writing
//! - [`ForepathTheme`] console styles
//!
//! Machine-readable output (`env` exports, `status --json`, completions)
//! bypasses this module and goes straight to stdout.

pub mod output;
pub mod theme;

pub use output::{Output, OutputMode};
pub use theme::{should_use_colors, ForepathTheme};
