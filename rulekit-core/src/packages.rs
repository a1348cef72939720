//! Base package directory discovery for JVM source trees.
//!
//! The base package directory is the caller-resolved root under which the
//! layer rule files are nested. rulekit only proposes candidates; the chosen
//! string is used verbatim when the manifest is resolved, with no validation
//! of package naming conventions.

use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Conventional JVM source roots scanned for package directories.
const SOURCE_ROOTS: &[&str] = &["src/main/java", "src/main/kotlin"];

/// Leaf directories under the conventional source roots, as slash-separated
/// paths relative to the project root, sorted for deterministic prompting.
/// A leaf (a package directory with no sub-packages) is the most likely
/// base for layer subdirectories in a fresh project.
pub fn find_base_package_candidates(project_root: &Path) -> Vec<String> {
    let mut candidates = Vec::new();

    for source_root in SOURCE_ROOTS {
        let root = project_root.join(source_root);
        if !root.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&root)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_dir() || !is_leaf_dir(entry.path()) {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(project_root) {
                candidates.push(to_slash_path(relative));
            }
        }
    }

    candidates.sort();
    debug!("Found {} base package candidate(s)", candidates.len());
    candidates
}

fn is_leaf_dir(path: &Path) -> bool {
    match std::fs::read_dir(path) {
        Ok(mut entries) => {
            !entries.any(|e| e.map(|e| e.path().is_dir()).unwrap_or(false))
        }
        Err(_) => false,
    }
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_leaf_package_directories() {
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("src/main/java/com/acme/app")).unwrap();
        fs::create_dir_all(project.path().join("src/main/java/com/acme/shared")).unwrap();

        let candidates = find_base_package_candidates(project.path());
        assert_eq!(
            candidates,
            vec![
                "src/main/java/com/acme/app".to_string(),
                "src/main/java/com/acme/shared".to_string(),
            ]
        );
    }

    #[test]
    fn intermediate_package_directories_are_not_candidates() {
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("src/main/java/com/acme/app")).unwrap();

        let candidates = find_base_package_candidates(project.path());
        assert!(!candidates.iter().any(|c| c == "src/main/java/com"));
        assert!(!candidates.iter().any(|c| c == "src/main/java/com/acme"));
    }

    #[test]
    fn scans_kotlin_source_root_too() {
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("src/main/kotlin/io/acme")).unwrap();

        let candidates = find_base_package_candidates(project.path());
        assert_eq!(candidates, vec!["src/main/kotlin/io/acme".to_string()]);
    }

    #[test]
    fn project_without_source_roots_yields_nothing() {
        let project = TempDir::new().unwrap();
        assert!(find_base_package_candidates(project.path()).is_empty());
    }

    #[test]
    fn files_are_ignored() {
        let project = TempDir::new().unwrap();
        let pkg = project.path().join("src/main/java/com/acme");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("Main.java"), "class Main {}").unwrap();

        let candidates = find_base_package_candidates(project.path());
        assert_eq!(candidates, vec!["src/main/java/com/acme".to_string()]);
    }
}
