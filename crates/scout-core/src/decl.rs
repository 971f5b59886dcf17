//! Declaration records produced by a scan.

use serde::{Deserialize, Serialize};

/// Kind of a discovered declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Function,
    Class,
}

impl DeclKind {
    /// Lowercase label used in table output and filters.
    pub fn label(self) -> &'static str {
        match self {
            DeclKind::Function => "function",
            DeclKind::Class => "class",
        }
    }

    /// Parse a filter string (case-insensitive). `None` for anything else.
    pub fn from_filter(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "function" | "functions" => Some(DeclKind::Function),
            "class" | "classes" => Some(DeclKind::Class),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One discovered function or class declaration.
///
/// Immutable once created. Within a single scan the set of
/// (name, kind, path) triples contains no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Identifier as it appears at the declaration site. Never empty.
    pub name: String,
    pub kind: DeclKind,
    /// 1-based line number of the declaration.
    pub line: usize,
    /// File name without directory component.
    pub file: String,
    /// Path relative to the scan root, forward slashes on every platform.
    pub path: String,
}
