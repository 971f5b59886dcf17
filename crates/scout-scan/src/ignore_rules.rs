//! Translation of project ignore-file patterns into traversal exclusion
//! rules.
//!
//! All rules are anchored at the scan root — nested ignore files are never
//! consulted, so there is no inheritance to model. User rules keep their
//! file order and are evaluated last-match-wins, which is what lets a later
//! `!` negation re-include a path excluded by an earlier broader rule. A
//! fixed default set (version-control, build output, dependency caches,
//! coverage, editor metadata) applies after user rules and is never
//! negatable.

use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use std::path::Path;
use std::sync::OnceLock;

/// Directory names always excluded, at any depth, regardless of user rules.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "target",
    "build",
    "dist",
    "out",
    "vendor",
    "coverage",
    "__pycache__",
    ".idea",
    ".vscode",
];

/// One translated user rule: a root-anchored glob plus its subtree form.
struct Rule {
    /// Matches the pattern itself (e.g. `build`, `*.min.js`).
    base: GlobMatcher,
    /// Matches everything beneath it (e.g. `build/**`).
    subtree: GlobMatcher,
    negated: bool,
}

impl Rule {
    fn matches(&self, rel: &Path) -> bool {
        self.base.is_match(rel) || self.subtree.is_match(rel)
    }
}

/// The combined rule set for one scan: ordered user rules plus defaults.
pub struct IgnoreRules {
    rules: Vec<Rule>,
    has_negation: bool,
}

fn compile(pattern: &str) -> Option<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .ok()
        .map(|g| g.compile_matcher())
}

/// Default exclusions compiled once: `**/<dir>` and `**/<dir>/**`.
fn default_set() -> &'static GlobSet {
    static SET: OnceLock<GlobSet> = OnceLock::new();
    SET.get_or_init(|| {
        let mut builder = GlobSetBuilder::new();
        for dir in DEFAULT_EXCLUDED_DIRS {
            for pattern in [format!("**/{dir}"), format!("**/{dir}/**")] {
                if let Ok(glob) = GlobBuilder::new(&pattern).literal_separator(true).build() {
                    builder.add(glob);
                }
            }
        }
        builder.build().unwrap_or_else(|_| GlobSet::empty())
    })
}

/// Translate one ignore-file line into `(base_pattern, negated)`.
///
/// Returns `None` for blank lines, comments, and lines that reduce to
/// nothing after stripping.
fn translate(line: &str) -> Option<(String, bool)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (negated, rest) = match line.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, line),
    };
    // Anchoring to the root is implicit; a single leading slash is noise.
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    // Directory-scoped patterns lose the trailing slash; the subtree
    // matcher restores the recursive coverage.
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return None;
    }
    Some((rest.to_string(), negated))
}

impl IgnoreRules {
    /// Rule set with no user rules (defaults still apply).
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            has_negation: false,
        }
    }

    /// Read and translate the root-level ignore file.
    ///
    /// A missing or unreadable file is not an error: the scan proceeds with
    /// defaults only.
    pub fn load(root: &Path, ignore_file: &str) -> Self {
        let path = root.join(ignore_file);
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_lines(content.lines()),
            Err(e) => {
                tracing::debug!("no usable ignore file at {}: {}", path.display(), e);
                Self::empty()
            }
        }
    }

    /// Translate raw ignore-file lines, preserving their relative order.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut rules = Vec::new();
        let mut has_negation = false;
        for line in lines {
            let Some((pattern, negated)) = translate(line) else {
                continue;
            };
            let (Some(base), Some(subtree)) =
                (compile(&pattern), compile(&format!("{pattern}/**")))
            else {
                tracing::debug!("skipping unparseable ignore pattern: {}", line);
                continue;
            };
            has_negation |= negated;
            rules.push(Rule {
                base,
                subtree,
                negated,
            });
        }
        Self {
            rules,
            has_negation,
        }
    }

    /// Whether a root-relative file path is excluded.
    ///
    /// Defaults win outright; otherwise user rules apply in file order with
    /// the last matching rule deciding.
    pub fn is_excluded(&self, rel: &Path) -> bool {
        if default_set().is_match(rel) {
            return true;
        }
        let mut excluded = false;
        for rule in &self.rules {
            if rule.matches(rel) {
                excluded = !rule.negated;
            }
        }
        excluded
    }

    /// Whether a root-relative directory can be pruned without visiting it.
    ///
    /// Default-excluded directories always prune. User-excluded directories
    /// prune only when no negation rule exists, since a negation may
    /// re-include a path underneath.
    pub fn prune_dir(&self, rel: &Path) -> bool {
        if rel.as_os_str().is_empty() {
            return false;
        }
        if default_set().is_match(rel) {
            return true;
        }
        if self.has_negation {
            return false;
        }
        self.rules
            .iter()
            .any(|r| !r.negated && r.matches(rel))
    }
}
