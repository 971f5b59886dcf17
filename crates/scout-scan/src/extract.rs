//! Per-family declaration extraction from raw file text.
//!
//! Regex heuristics — not a parser. Each family applies a small set of
//! textual patterns, rejects candidates sitting in comments or string
//! literals by inspecting the matched line, and deduplicates per file so a
//! declaration caught by two overlapping patterns is reported once.

use crate::languages::Family;
use crate::linemap::LineIndex;
use regex::Regex;
use scout_core::decl::{DeclKind, Declaration};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Control-flow keywords that textually resemble a call before a brace.
///
/// A starting set, empirically sufficient — not a guarantee that every
/// control-flow construct is filtered.
const RESERVED: &[&str] = &[
    "if", "for", "while", "switch", "catch", "do", "else", "return", "function", "new", "typeof",
    "await",
];

/// Named function declarations: `function name(` (async included, since the
/// keyword pair still appears).
fn script_fn_decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bfunction\s+([A-Za-z_$][\w$]*)\s*\(").unwrap())
}

/// Variable-bound function expressions: `const name = function`,
/// `let name = async (a, b) =>`, `var name = x =>`.
fn script_fn_expr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\b(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s+)?(?:function\b|\([^)]*\)\s*=>|[A-Za-z_$][\w$]*\s*=>)",
        )
        .unwrap()
    })
}

/// Call-like constructs opening a brace: `name(args) {` — method bodies,
/// mostly. Reserved words are filtered after the match.
fn script_method_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([A-Za-z_$][\w$]*)\s*\([^)]*\)\s*\{").unwrap())
}

/// `class` as a whole word immediately followed by an identifier.
fn script_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bclass\s+([A-Za-z_$][\w$]*)").unwrap())
}

/// `def name(` at the start of a (possibly indented) line.
fn python_def_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*(?:async\s+)?def\s+([A-Za-z_]\w*)\s*\(").unwrap())
}

/// `class Name:` or `class Name(Bases):` at the start of a line.
fn python_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*class\s+([A-Za-z_]\w*)\s*(?:\([^)]*\))?\s*:").unwrap())
}

/// `func name(` or `func (recv) name(`.
fn go_func_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bfunc\s+(?:\([^)]*\)\s*)?([A-Za-z_]\w*)\s*\(").unwrap())
}

/// Extract declarations from one file's text.
///
/// `rel_path` is the path relative to the scan root; it supplies both the
/// reported relative path (forward slashes) and the file base name.
pub fn extract(source: &str, rel_path: &Path, family: Family) -> Vec<Declaration> {
    let index = LineIndex::new(source);
    let file = rel_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let path = rel_path.to_string_lossy().replace('\\', "/");

    let mut out = Vec::new();
    // Dedup key is the bare name: within one file a declaration is reported
    // at most once even when two patterns (or a function and a class of the
    // same name) both match. First match wins, in pattern order.
    let mut seen: HashSet<String> = HashSet::new();
    let mut emit = |name: &str, kind: DeclKind, offset: usize, out: &mut Vec<Declaration>| {
        if name.is_empty() {
            return;
        }
        if !seen.insert(name.to_string()) {
            return;
        }
        out.push(Declaration {
            name: name.to_string(),
            kind,
            line: index.line_of(offset),
            file: file.clone(),
            path: path.clone(),
        });
    };

    match family {
        Family::Script => {
            for caps in script_fn_decl_re().captures_iter(source) {
                let m = caps.get(0).unwrap();
                if rejected(source, &index, m.start(), "//") {
                    continue;
                }
                emit(&caps[1], DeclKind::Function, m.start(), &mut out);
            }
            for caps in script_fn_expr_re().captures_iter(source) {
                let m = caps.get(0).unwrap();
                if rejected(source, &index, m.start(), "//") {
                    continue;
                }
                emit(&caps[1], DeclKind::Function, m.start(), &mut out);
            }
            for caps in script_method_re().captures_iter(source) {
                let name = &caps[1];
                if RESERVED.contains(&name) {
                    continue;
                }
                let m = caps.get(0).unwrap();
                if rejected(source, &index, m.start(), "//") {
                    continue;
                }
                emit(name, DeclKind::Function, m.start(), &mut out);
            }
            for caps in script_class_re().captures_iter(source) {
                let m = caps.get(0).unwrap();
                if rejected(source, &index, m.start(), "//") {
                    continue;
                }
                emit(&caps[1], DeclKind::Class, m.start(), &mut out);
            }
        }
        Family::Indentation => {
            for caps in python_def_re().captures_iter(source) {
                let m = caps.get(1).unwrap();
                if rejected(source, &index, m.start(), "#") {
                    continue;
                }
                emit(&caps[1], DeclKind::Function, m.start(), &mut out);
            }
            for caps in python_class_re().captures_iter(source) {
                let m = caps.get(1).unwrap();
                if rejected(source, &index, m.start(), "#") {
                    continue;
                }
                emit(&caps[1], DeclKind::Class, m.start(), &mut out);
            }
        }
        Family::Minimal => {
            // Functions only; Go has no class concept this scanner models.
            for caps in go_func_re().captures_iter(source) {
                let m = caps.get(0).unwrap();
                if rejected(source, &index, m.start(), "//") {
                    continue;
                }
                emit(&caps[1], DeclKind::Function, m.start(), &mut out);
            }
        }
    }

    out
}

/// Whether a match at `offset` sits in a comment or a string literal,
/// judged from the literal text of the line it occurs on.
///
/// Walks the line up to the match column tracking quote state (with
/// backslash escapes) and looking for the family's comment marker outside
/// quotes. Single-line judgment only — multi-line strings and block
/// comments are beyond this heuristic's contract.
fn rejected(source: &str, index: &LineIndex, offset: usize, comment_marker: &str) -> bool {
    let line = index.line_of(offset);
    let text = index.line_text(source, line);
    let col = offset - index.start_of(line);

    let trimmed = text.trim_start();
    if trimmed.starts_with(comment_marker) {
        return true;
    }
    // Block-comment bodies in the script family: `/* ...` and the
    // conventional `* ...` continuation lines.
    if comment_marker == "//" && (trimmed.starts_with("/*") || trimmed.starts_with("* ")) {
        return true;
    }

    let mut in_quote: Option<char> = None;
    let mut escaped = false;
    for (idx, c) in text.char_indices() {
        if idx >= col {
            break;
        }
        if escaped {
            escaped = false;
            continue;
        }
        match in_quote {
            Some(q) => {
                if c == '\\' {
                    escaped = true;
                } else if c == q {
                    in_quote = None;
                }
            }
            None => {
                if text[idx..].starts_with(comment_marker) {
                    return true;
                }
                if matches!(c, '\'' | '"' | '`') {
                    in_quote = Some(c);
                }
            }
        }
    }
    in_quote.is_some()
}
