//! The scan aggregator: root resolution, discovery, per-file extraction,
//! and result merging.

use crate::collect::collect_files;
use crate::extract::extract;
use crate::ignore_rules::IgnoreRules;
use crate::languages;
use scout_core::config::ScoutConfig;
use scout_core::decl::{DeclKind, Declaration};
use scout_core::error::ScanError;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Default traversal depth when the caller does not specify one.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// One end-to-end scan invocation.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Scan root. Resolved to an absolute path before any rule matching,
    /// since relative components would break rule anchoring.
    pub root: PathBuf,
    pub max_depth: usize,
    /// Restrict results to one declaration kind.
    pub kind_filter: Option<DeclKind>,
    /// Ignore file name read from the root (`.gitignore` by default).
    pub ignore_file: String,
    /// Wall-clock budget for file discovery alone.
    pub collect_timeout: Duration,
    /// Wall-clock budget for the whole scan, discovery included.
    pub scan_timeout: Duration,
}

impl ScanRequest {
    /// Request with core-contract defaults (depth 3, default budgets).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, &ScoutConfig::default())
    }

    /// Request taking depth, budgets, and ignore-file name from config.
    pub fn with_config(root: impl Into<PathBuf>, config: &ScoutConfig) -> Self {
        Self {
            root: root.into(),
            max_depth: config.scan.max_depth,
            kind_filter: None,
            ignore_file: config.scan.ignore_file.clone(),
            collect_timeout: Duration::from_millis(config.scan.collect_timeout_ms),
            scan_timeout: Duration::from_millis(config.scan.scan_timeout_ms),
        }
    }
}

/// Run one scan: collect files, extract declarations, merge.
///
/// A single file's read or extraction failure never aborts the scan — the
/// file is skipped and the rest proceed. An empty result is success, not an
/// error. Both timeout boundaries surface as distinct [`ScanError`]
/// variants.
pub fn scan(request: &ScanRequest) -> Result<Vec<Declaration>, ScanError> {
    if request.root.as_os_str().is_empty() {
        return Err(ScanError::InvalidRequest("root path is required".to_string()));
    }
    let root = request.root.canonicalize().map_err(|e| {
        ScanError::InvalidRequest(format!(
            "cannot resolve root path {}: {e}",
            request.root.display()
        ))
    })?;
    if !root.is_dir() {
        return Err(ScanError::InvalidRequest(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let deadline = Instant::now() + request.scan_timeout;
    let limit_ms = request.scan_timeout.as_millis() as u64;

    let rules = IgnoreRules::load(&root, &request.ignore_file);
    let files = collect_files(&root, request.max_depth, &rules, request.collect_timeout)?;
    tracing::debug!("collected {} candidate files under {}", files.len(), root.display());

    let mut decls = Vec::new();
    for file in &files {
        if Instant::now() >= deadline {
            return Err(ScanError::ScanTimeout { limit_ms });
        }
        let source = match std::fs::read_to_string(file) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!("skipping unreadable file {}: {}", file.display(), e);
                continue;
            }
        };
        let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("");
        let family = languages::family_for_extension(ext);
        let rel = file.strip_prefix(&root).unwrap_or(file);
        decls.extend(extract(&source, rel, family));
    }

    if let Some(kind) = request.kind_filter {
        decls.retain(|d| d.kind == kind);
    }
    Ok(decls)
}
