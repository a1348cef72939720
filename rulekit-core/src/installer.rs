//! Idempotent application of an install manifest to a project tree.
//!
//! The installer never overwrites a pre-existing destination file, even when
//! the template content has changed since an earlier run. Re-running a
//! manifest against an already scaffolded project is therefore always safe
//! and reports `SkippedExists` for every previously installed item.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::InstallError;
use crate::manifest::{InstallItem, InstallManifest};
use crate::report::{InstallReport, InstallResult, InstallStatus};

/// Applies install items beneath a fixed project root.
#[derive(Debug)]
pub struct Installer {
    project_root: PathBuf,
}

impl Installer {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Install a single item. Exactly one transition:
    /// pending -> installed | skipped (exists) | skipped (missing template).
    ///
    /// Hard filesystem errors (permissions, disk full) surface as
    /// `InstallError`; `install_all` records them per item and keeps going.
    pub fn install(&self, item: &InstallItem) -> Result<InstallStatus, InstallError> {
        let destination = self.project_root.join(&item.destination);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|source| InstallError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // Any pre-existing file wins, whatever its content.
        if destination.exists() {
            debug!("Skipping {}: destination exists", item.destination.display());
            return Ok(InstallStatus::SkippedExists);
        }

        let content = match fs::read(&item.source) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Template missing for {}: {}",
                    item.destination.display(),
                    item.source.display()
                );
                return Ok(InstallStatus::SkippedMissingSource);
            }
            Err(source) => {
                return Err(InstallError::ReadTemplate {
                    path: item.source.clone(),
                    source,
                })
            }
        };

        match write_new(&destination, &content) {
            Ok(()) => {
                debug!("Installed {}", item.destination.display());
                Ok(InstallStatus::Installed)
            }
            // Exclusive creation is the atomic skip signal; a file that
            // appeared between the existence check and the write is treated
            // exactly like one that was there all along.
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(InstallStatus::SkippedExists),
            Err(source) => Err(InstallError::WriteDestination {
                path: destination,
                source,
            }),
        }
    }

    /// Apply every item in manifest order. Non-fatal outcomes never
    /// short-circuit, and a hard error on one item is recorded as `Failed`
    /// while the remaining items still run.
    pub fn install_all(&self, manifest: &InstallManifest) -> InstallReport {
        let mut report = InstallReport::default();
        for item in manifest.items() {
            let result = match self.install(item) {
                Ok(status) => InstallResult {
                    destination: item.destination.clone(),
                    status,
                    error: None,
                },
                Err(e) => {
                    warn!("Install failed for {}: {e}", item.destination.display());
                    InstallResult {
                        destination: item.destination.clone(),
                        status: InstallStatus::Failed,
                        error: Some(e.to_string()),
                    }
                }
            };
            report.push(result);
        }
        report
    }
}

/// Create `path` exclusively and write `content` to it.
/// `ErrorKind::AlreadyExists` is the caller's skip signal, not a defect.
fn write_new(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content)
}

/// Write `content` to `path` unless the file already exists. Returns whether
/// a write happened. Used for generated artifacts (the AGENTS.md index) so
/// they follow the same never-overwrite contract as installed templates.
pub fn write_if_absent(path: &Path, content: &[u8]) -> std::io::Result<bool> {
    match write_new(path, content) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}
