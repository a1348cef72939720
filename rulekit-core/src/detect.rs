//! Build system and JVM version detection.
//!
//! Both facts are free-form strings feeding the generated index; anything
//! undetectable renders as the `Unknown` sentinel there. Detection is best
//! effort by marker files and never fails the run.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build system recognized by its marker file at the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildSystem {
    Maven,
    Gradle,
    GradleKotlin,
}

impl BuildSystem {
    /// Maven wins when both a pom and Gradle files are present, matching
    /// the common multi-tool checkout where the pom is authoritative.
    pub fn detect(project_root: &Path) -> Option<Self> {
        let detected = if project_root.join("pom.xml").is_file() {
            Some(Self::Maven)
        } else if project_root.join("build.gradle.kts").is_file() {
            Some(Self::GradleKotlin)
        } else if project_root.join("build.gradle").is_file() {
            Some(Self::Gradle)
        } else {
            None
        };
        debug!("Detected build system: {:?}", detected);
        detected
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildSystem::Maven => "Maven",
            BuildSystem::Gradle => "Gradle",
            BuildSystem::GradleKotlin => "Gradle (Kotlin DSL)",
        };
        f.write_str(name)
    }
}

/// Detect the project's Java version.
///
/// Sources, in order: a `.java-version` file, an `.sdkmanrc` `java=` entry,
/// `<java.version>` or `<maven.compiler.release>` in `pom.xml`, then a
/// Gradle toolchain `languageVersion` declaration.
pub fn detect_java_version(project_root: &Path) -> Option<String> {
    if let Some(version) = read_version_file(&project_root.join(".java-version")) {
        return Some(version);
    }

    if let Some(version) = read_sdkmanrc(&project_root.join(".sdkmanrc")) {
        return Some(version);
    }

    if let Some(version) = read_pom_version(&project_root.join("pom.xml")) {
        return Some(version);
    }

    for gradle_file in ["build.gradle.kts", "build.gradle"] {
        if let Some(version) = read_gradle_toolchain(&project_root.join(gradle_file)) {
            return Some(version);
        }
    }

    debug!("Could not detect a Java version");
    None
}

fn read_version_file(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let version = content.lines().next()?.trim();
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}

fn read_sdkmanrc(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    content.lines().find_map(|line| {
        let line = line.trim();
        line.strip_prefix("java=").map(|v| v.trim().to_string())
    })
}

fn read_pom_version(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let re =
        Regex::new(r"<(?:java\.version|maven\.compiler\.release)>\s*([^<\s]+)\s*</").ok()?;
    re.captures(&content)
        .map(|caps| caps[1].to_string())
}

fn read_gradle_toolchain(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let re = Regex::new(r"JavaLanguageVersion\.of\(\s*(\d+)\s*\)").ok()?;
    re.captures(&content)
        .map(|caps| caps[1].to_string())
}
