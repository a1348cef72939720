//! Version-control ignore file maintenance.
//!
//! Appends patterns to an ignore file at most once each, checked by exact
//! line match against the existing content. Existing content is preserved
//! untouched apart from a missing trailing newline before the appended
//! block.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Patterns rulekit maintains in the project's `.gitignore`: the generated
/// artifacts and the agent scratch area.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[".agents/workspace/", "*.agents.log"];

/// Append each pattern whose exact line is not already present, creating
/// the file when absent. Duplicates within `patterns` are appended once.
/// Returns the patterns actually added, in input order.
pub fn append_ignore_patterns(
    ignore_file: &Path,
    patterns: &[&str],
) -> std::io::Result<Vec<String>> {
    let existing = match fs::read_to_string(ignore_file) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    let present: HashSet<&str> = existing.lines().collect();
    let mut added: Vec<String> = Vec::new();
    for pattern in patterns {
        if present.contains(pattern) || added.iter().any(|a| a == pattern) {
            continue;
        }
        added.push((*pattern).to_string());
    }

    if added.is_empty() {
        debug!("All ignore patterns already present in {:?}", ignore_file);
        return Ok(added);
    }

    let mut output = existing;
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    for pattern in &added {
        output.push_str(pattern);
        output.push('\n');
    }

    fs::write(ignore_file, output)?;
    debug!("Added {} pattern(s) to {:?}", added.len(), ignore_file);
    Ok(added)
}
