//! Template root discovery
//!
//! Locates the directory holding the shipped rule templates. Resolution
//! order:
//! 1. CLI override (if provided)
//! 2. Platform user config directory (`<config>/rulekit/templates`)
//! 3. `templates/` next to the executable
//! 4. `templates/` in the current directory
//!
//! Absence is reported as `None`; callers turn that into the fatal
//! `ScaffoldError::MissingTemplateRoot` before any manifest item runs.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Root directory of the rule template tree.
#[derive(Debug, Clone)]
pub struct TemplateRoot {
    pub path: PathBuf,
}

impl TemplateRoot {
    pub fn discover() -> Result<Option<Self>> {
        Self::discover_with_override(None)
    }

    /// Discover the template root, honoring an explicit CLI override first.
    /// An override that does not name an existing directory is an error; the
    /// fallback candidates are probed silently.
    pub fn discover_with_override(cli_override: Option<PathBuf>) -> Result<Option<Self>> {
        trace!("Discovering rule template root");

        if let Some(override_path) = cli_override {
            if !override_path.exists() {
                anyhow::bail!(
                    "Template directory does not exist: {}",
                    override_path.display()
                );
            }

            let canonical = override_path.canonicalize().with_context(|| {
                format!(
                    "Failed to resolve template directory: {}",
                    override_path.display()
                )
            })?;

            if !canonical.is_dir() {
                anyhow::bail!(
                    "Template path must be a directory: {}",
                    canonical.display()
                );
            }

            debug!(
                "Using --templates-dir override: {} (resolved to {})",
                override_path.display(),
                canonical.display()
            );
            return Ok(Some(Self { path: canonical }));
        }

        for candidate in Self::default_candidates() {
            if candidate.is_dir() {
                debug!("Found rule templates at {:?}", candidate);
                return Ok(Some(Self { path: candidate }));
            }
        }

        debug!("No rule template directory found");
        Ok(None)
    }

    fn default_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("rulekit").join("templates"));
        }

        // Installed layouts ship the templates next to the binary.
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join("templates"));
            }
        }

        candidates.push(PathBuf::from("templates"));
        candidates
    }
}
