//! File discovery: depth-bounded traversal with ignore-rule pruning and a
//! hard wall-clock budget.
//!
//! Rules are applied during the walk, not as a post-filter: excluded
//! subtrees (dependency caches above all) are never descended into, which
//! is where the real traversal cost hides on large repositories.

use crate::ignore_rules::IgnoreRules;
use crate::languages;
use scout_core::error::ScanError;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

/// Enumerate candidate files under `root`.
///
/// Returns absolute paths of files at or within `max_depth` whose extension
/// is in the allow-list and which no ignore rule excludes. Exceeding
/// `budget` aborts with [`ScanError::TraversalTimeout`] — never a silently
/// partial list.
pub fn collect_files(
    root: &Path,
    max_depth: usize,
    rules: &IgnoreRules,
    budget: Duration,
) -> Result<Vec<PathBuf>, ScanError> {
    let deadline = Instant::now() + budget;
    let limit_ms = budget.as_millis() as u64;

    let walker = WalkDir::new(root)
        .max_depth(max_depth)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
            !rules.prune_dir(rel)
        });

    let mut files = Vec::new();
    for entry in walker {
        if Instant::now() >= deadline {
            return Err(ScanError::TraversalTimeout { limit_ms });
        }
        // Unreadable entries are skipped, not fatal
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !languages::is_supported(ext) {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        if rules.is_excluded(rel) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}
