//! Scaffolding error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

/// Startup-level errors that abort the run before any manifest item is
/// processed.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// No rule template directory could be located
    #[error("No rule template directory found.\n\nSearched the --templates-dir override, the user config directory\n(rulekit/templates), and a 'templates' directory next to the executable.\n\nPoint rulekit at your templates with:\n  rulekit init --templates-dir <dir>")]
    MissingTemplateRoot,
}

/// Per-item filesystem errors. These never abort the run: the installer
/// records the item as failed and continues with the remaining items.
#[derive(Error, Debug)]
pub enum InstallError {
    /// Failed to create an ancestor directory of the destination
    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the template source for a reason other than absence
    #[error("Failed to read template {path}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the destination file
    #[error("Failed to write {path}")]
    WriteDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
