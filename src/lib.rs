//! forepath - Give a package manager's binaries precedence on PATH.
//!
//! forepath prepends one package manager's bin directory to the search path
//! so its tools resolve ahead of version-manager shims, and makes the two
//! ways of invoking that change explicit: `activate` for the current
//! process, `env` for the calling shell via `eval "$(forepath env)"`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and schema
//! - [`detection`] - Package manager and shim directory resolution
//! - [`environment`] - Explicit environment mutation scope
//! - [`error`] - Error types and result aliases
//! - [`path`] - Search path construction and inspection
//! - [`shell`] - Shell detection, export syntax, and command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use forepath::path::{prepend, SearchPath};
//!
//! let updated = prepend("/x/bin", "/usr/bin:/bin");
//! assert_eq!(updated, "/x/bin:/usr/bin:/bin");
//! assert!(SearchPath::parse(&updated).starts_with("/x/bin"));
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod environment;
pub mod error;
pub mod path;
pub mod shell;
pub mod ui;

pub use error::{ForepathError, Result};
