//! Explicit run configuration.
//!
//! Built once at process start and passed down by reference; the installer
//! and its collaborators never read ambient state (current directory,
//! environment) themselves.

use std::path::PathBuf;

use crate::manifest::{self, InstallManifest};
use crate::templates::TemplateRoot;

/// Everything a scaffolding run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Root of the target project.
    pub project_root: PathBuf,
    /// Base package directory, relative to the project root, used verbatim
    /// for every `{base}` destination. Fixed once the manifest is built.
    pub base_package_dir: String,
    /// Resolved rule template root.
    pub template_root: TemplateRoot,
}

impl ScaffoldConfig {
    /// Resolve the compiled-in manifest against this configuration.
    pub fn manifest(&self) -> InstallManifest {
        InstallManifest::resolve(
            manifest::DEFAULT_MANIFEST,
            &self.template_root.path,
            &self.base_package_dir,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn manifest_uses_the_configured_base_dir() {
        let config = ScaffoldConfig {
            project_root: PathBuf::from("/project"),
            base_package_dir: "src/main/java/com/acme/app".to_string(),
            template_root: TemplateRoot {
                path: PathBuf::from("/tpl"),
            },
        };

        let manifest = config.manifest();
        assert!(manifest
            .items()
            .iter()
            .any(|i| i.destination
                == Path::new("src/main/java/com/acme/app/web/AGENTS-API.md")));
        assert!(manifest
            .items()
            .iter()
            .all(|i| i.source.starts_with("/tpl")));
    }
}
