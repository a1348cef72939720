//! AGENTS.md index rendering.
//!
//! A pure function of the install report and the detected environment
//! facts. Writing the rendered document (and the decision not to clobber an
//! existing one) is the caller's concern.

use crate::detect::BuildSystem;
use crate::report::{InstallResult, InstallStatus};

/// Sentinel for environment facts that could not be detected.
pub const UNKNOWN: &str = "Unknown";

/// Everything the index needs, gathered once by the caller.
#[derive(Debug)]
pub struct IndexContext<'a> {
    pub base_package_dir: &'a str,
    pub java_version: Option<&'a str>,
    pub build_system: Option<BuildSystem>,
    /// Human-readable date, e.g. "2026-08-30".
    pub generated_at: &'a str,
    pub results: &'a [InstallResult],
}

impl IndexContext<'_> {
    /// Render the aggregate rule index document.
    pub fn render(&self) -> String {
        let mut doc = String::new();

        doc.push_str("# AGENTS.md\n\n");
        doc.push_str(
            "Index of the agent rule files installed in this project. Each rule file\n\
             carries the conventions a coding agent must follow when working in the\n\
             directory it lives in.\n\n",
        );
        doc.push_str(&format!("Generated by rulekit on {}.\n\n", self.generated_at));

        doc.push_str("## Project facts\n\n");
        doc.push_str(&format!(
            "- Java version: {}\n",
            self.java_version.unwrap_or(UNKNOWN)
        ));
        doc.push_str(&format!(
            "- Build system: {}\n",
            self.build_system
                .map(|b| b.to_string())
                .unwrap_or_else(|| UNKNOWN.to_string())
        ));
        doc.push_str(&format!(
            "- Base package directory: `{}`\n\n",
            self.base_package_dir
        ));

        doc.push_str("## Rule files\n\n");
        for result in self.results {
            if matches!(
                result.status,
                InstallStatus::Installed | InstallStatus::SkippedExists
            ) {
                doc.push_str(&format!("- `{}`\n", result.destination.display()));
            }
        }

        let missing: Vec<_> = self
            .results
            .iter()
            .filter(|r| r.status == InstallStatus::SkippedMissingSource)
            .collect();
        if !missing.is_empty() {
            doc.push_str("\n## Not installed (template missing)\n\n");
            for result in missing {
                doc.push_str(&format!("- `{}`\n", result.destination.display()));
            }
        }

        doc.push('\n');
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result(dest: &str, status: InstallStatus) -> InstallResult {
        InstallResult {
            destination: PathBuf::from(dest),
            status,
            error: None,
        }
    }

    #[test]
    fn lists_installed_and_preexisting_rule_files() {
        let results = vec![
            result("pkg/web/AGENTS-API.md", InstallStatus::Installed),
            result("GIT-GUIDELINES.md", InstallStatus::SkippedExists),
            result("pkg/gone.md", InstallStatus::SkippedMissingSource),
            result("pkg/bad.md", InstallStatus::Failed),
        ];
        let context = IndexContext {
            base_package_dir: "pkg",
            java_version: Some("21"),
            build_system: Some(BuildSystem::Maven),
            generated_at: "2026-08-30",
            results: &results,
        };

        let doc = context.render();
        assert!(doc.contains("- `pkg/web/AGENTS-API.md`"));
        assert!(doc.contains("- `GIT-GUIDELINES.md`"));
        assert!(doc.contains("## Not installed (template missing)"));
        assert!(doc.contains("- `pkg/gone.md`"));
        // Failed items are reported by the CLI summary, not the index.
        assert!(!doc.contains("pkg/bad.md"));
    }

    #[test]
    fn renders_detected_environment_facts() {
        let context = IndexContext {
            base_package_dir: "src/main/java/com/acme",
            java_version: Some("17"),
            build_system: Some(BuildSystem::GradleKotlin),
            generated_at: "2026-08-30",
            results: &[],
        };

        let doc = context.render();
        assert!(doc.contains("- Java version: 17"));
        assert!(doc.contains("- Build system: Gradle (Kotlin DSL)"));
        assert!(doc.contains("- Base package directory: `src/main/java/com/acme`"));
        assert!(doc.contains("Generated by rulekit on 2026-08-30."));
    }

    #[test]
    fn undetected_facts_use_the_unknown_sentinel() {
        let context = IndexContext {
            base_package_dir: "pkg",
            java_version: None,
            build_system: None,
            generated_at: "2026-08-30",
            results: &[],
        };

        let doc = context.render();
        assert!(doc.contains("- Java version: Unknown"));
        assert!(doc.contains("- Build system: Unknown"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let results = vec![result("a.md", InstallStatus::Installed)];
        let context = IndexContext {
            base_package_dir: "pkg",
            java_version: None,
            build_system: None,
            generated_at: "2026-08-30",
            results: &results,
        };

        assert_eq!(context.render(), context.render());
    }
}
