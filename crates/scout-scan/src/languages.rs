//! Extension → language-family dispatch.
//!
//! The family set is closed and small, so this is a plain enum plus a total
//! mapping, not a plugin registry. Anything unmapped routes to the script
//! family — an accepted approximation, not an error.

/// Extraction heuristic family shared by syntactically similar languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Brace-delimited, function-first syntax (JavaScript, TypeScript).
    Script,
    /// Keyword-prefixed declarations, no braces (Python).
    Indentation,
    /// Keyword-prefixed functions only, no class concept modeled (Go).
    Minimal,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::Script => "script",
            Family::Indentation => "indentation",
            Family::Minimal => "minimal",
        }
    }
}

/// Extensions the collector admits, one entry per supported language.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "py", "go"];

/// Whether a file extension is in the collector allow-list.
pub fn is_supported(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&ext)
}

/// Map an extension to its extraction family. Total: unrecognized
/// extensions fall back to the script family.
pub fn family_for_extension(ext: &str) -> Family {
    match ext {
        "py" => Family::Indentation,
        "go" => Family::Minimal,
        _ => Family::Script,
    }
}
