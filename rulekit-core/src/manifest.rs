//! The compiled-in manifest of rule templates and their destinations.
//!
//! Destinations may contain the `{base}` placeholder for the caller-resolved
//! base package directory. Resolution happens exactly once, when the
//! manifest is built; the installer only ever sees fully resolved paths.

use std::path::{Path, PathBuf};

/// Placeholder in destination paths for the base package directory.
pub const BASE_PLACEHOLDER: &str = "{base}";

/// One compiled-in (template, destination) pair. Paths are relative: the
/// template against the template root, the destination against the project
/// root.
#[derive(Debug, Clone, Copy)]
pub struct ManifestEntry {
    pub template: &'static str,
    pub destination: &'static str,
}

/// The fixed set of rule files rulekit installs. Layer rules land under the
/// base package directory; testing, resources and skill rules under fixed
/// directories; the git guidelines at the project root.
pub const DEFAULT_MANIFEST: &[ManifestEntry] = &[
    ManifestEntry {
        template: "rules/AGENTS-API.md",
        destination: "{base}/web/AGENTS-API.md",
    },
    ManifestEntry {
        template: "rules/AGENTS-DOMAIN.md",
        destination: "{base}/domain/AGENTS-DOMAIN.md",
    },
    ManifestEntry {
        template: "rules/AGENTS-APPLICATION.md",
        destination: "{base}/application/AGENTS-APPLICATION.md",
    },
    ManifestEntry {
        template: "rules/AGENTS-PERSISTENCE.md",
        destination: "{base}/persistence/AGENTS-PERSISTENCE.md",
    },
    ManifestEntry {
        template: "rules/AGENTS-TESTING.md",
        destination: "src/test/java/AGENTS-TESTING.md",
    },
    ManifestEntry {
        template: "rules/AGENTS-CONFIG.md",
        destination: "src/main/resources/AGENTS-CONFIG.md",
    },
    ManifestEntry {
        template: "skills/code-review.md",
        destination: ".agents/skills/code-review.md",
    },
    ManifestEntry {
        template: "skills/refactoring.md",
        destination: ".agents/skills/refactoring.md",
    },
    ManifestEntry {
        template: "skills/test-writing.md",
        destination: ".agents/skills/test-writing.md",
    },
    ManifestEntry {
        template: "GIT-GUIDELINES.md",
        destination: "GIT-GUIDELINES.md",
    },
];

/// A fully resolved (source, destination) pair. The source may be absent on
/// disk; the installer reports that per item instead of failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallItem {
    /// Absolute path to the template file under the template root.
    pub source: PathBuf,
    /// Destination path relative to the project root. No unresolved
    /// placeholder segments remain.
    pub destination: PathBuf,
}

/// Ordered sequence of install items. Order matters only for deterministic
/// reporting; items are independent of each other.
#[derive(Debug, Clone)]
pub struct InstallManifest {
    items: Vec<InstallItem>,
}

impl InstallManifest {
    /// Resolve compiled-in entries against a template root and the base
    /// package directory. The base directory is substituted verbatim: no
    /// normalization, no validation of package naming conventions.
    pub fn resolve(
        entries: &[ManifestEntry],
        template_root: &Path,
        base_package_dir: &str,
    ) -> Self {
        let items = entries
            .iter()
            .map(|entry| InstallItem {
                source: template_root.join(entry.template),
                destination: PathBuf::from(
                    entry.destination.replace(BASE_PLACEHOLDER, base_package_dir),
                ),
            })
            .collect();
        Self { items }
    }

    /// Build a manifest from already resolved items.
    pub fn from_items(items: Vec<InstallItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InstallItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn base_placeholder_is_substituted_verbatim() {
        let entries = [ManifestEntry {
            template: "rules/AGENTS-API.md",
            destination: "{base}/web/AGENTS-API.md",
        }];

        let manifest =
            InstallManifest::resolve(&entries, Path::new("/tpl"), "src/main/java/com/acme");
        assert_eq!(
            manifest.items()[0].destination,
            PathBuf::from("src/main/java/com/acme/web/AGENTS-API.md")
        );
        assert_eq!(
            manifest.items()[0].source,
            PathBuf::from("/tpl/rules/AGENTS-API.md")
        );
    }

    #[test]
    fn destinations_without_placeholder_are_untouched() {
        let entries = [ManifestEntry {
            template: "GIT-GUIDELINES.md",
            destination: "GIT-GUIDELINES.md",
        }];

        let manifest = InstallManifest::resolve(&entries, Path::new("/tpl"), "anything");
        assert_eq!(
            manifest.items()[0].destination,
            PathBuf::from("GIT-GUIDELINES.md")
        );
    }

    #[test]
    fn resolution_preserves_entry_order() {
        let manifest =
            InstallManifest::resolve(DEFAULT_MANIFEST, Path::new("/tpl"), "pkg");
        let sources: Vec<_> = manifest.items().iter().map(|i| i.source.clone()).collect();
        let expected: Vec<_> = DEFAULT_MANIFEST
            .iter()
            .map(|e| Path::new("/tpl").join(e.template))
            .collect();
        assert_eq!(sources, expected);
    }

    #[test]
    fn default_manifest_destinations_are_pairwise_distinct() {
        let manifest =
            InstallManifest::resolve(DEFAULT_MANIFEST, Path::new("/tpl"), "src/main/java/x");
        let unique: HashSet<_> = manifest.items().iter().map(|i| &i.destination).collect();
        assert_eq!(unique.len(), manifest.len());
    }
}
