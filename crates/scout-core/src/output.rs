//! Rendering of scan results for CLI and MCP tool output.
//!
//! Two renderings: a plain-text table (kind-qualified name, line, file base
//! name, relative path) and a JSON array of declaration records.

use crate::decl::Declaration;
use anyhow::Result;

/// Format declarations as an aligned plain-text table.
///
/// Columns: kind-qualified name, line, file base name, relative path.
/// Returns a fixed message for an empty result so callers never render a
/// bare header.
pub fn format_table(decls: &[Declaration]) -> String {
    if decls.is_empty() {
        return "No declarations found.".to_string();
    }

    let rows: Vec<[String; 4]> = decls
        .iter()
        .map(|d| {
            [
                format!("{} {}", d.kind.label(), d.name),
                d.line.to_string(),
                d.file.clone(),
                d.path.clone(),
            ]
        })
        .collect();

    let headers = ["DECLARATION", "LINE", "FILE", "PATH"];
    let mut widths = [0usize; 4];
    for (i, h) in headers.iter().enumerate() {
        widths[i] = h.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // Pad every column but the last
        if i < 3 {
            for _ in cell.len()..widths[i] {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

/// Format declarations as a pretty-printed JSON array.
pub fn format_json(decls: &[Declaration]) -> Result<String> {
    Ok(serde_json::to_string_pretty(decls)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::DeclKind;

    fn sample() -> Vec<Declaration> {
        vec![
            Declaration {
                name: "calculateTotal".to_string(),
                kind: DeclKind::Function,
                line: 4,
                file: "cart.js".to_string(),
                path: "src/cart.js".to_string(),
            },
            Declaration {
                name: "ShoppingCart".to_string(),
                kind: DeclKind::Class,
                line: 13,
                file: "cart.js".to_string(),
                path: "src/cart.js".to_string(),
            },
        ]
    }

    #[test]
    fn table_contains_qualified_names_and_locations() {
        let table = format_table(&sample());
        assert!(table.contains("function calculateTotal"));
        assert!(table.contains("class ShoppingCart"));
        assert!(table.contains("13"));
        assert!(table.contains("src/cart.js"));
    }

    #[test]
    fn table_empty_result_has_message() {
        assert_eq!(format_table(&[]), "No declarations found.");
    }

    #[test]
    fn json_round_trips() {
        let json = format_json(&sample()).unwrap();
        let back: Vec<Declaration> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
