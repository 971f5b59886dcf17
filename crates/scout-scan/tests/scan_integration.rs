use std::fs;
use std::path::Path;
use std::time::Duration;

use scout_core::decl::DeclKind;
use scout_core::error::ScanError;
use scout_scan::scan::{DEFAULT_MAX_DEPTH, ScanRequest, scan};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

const JS_SAMPLE: &str = "function calculateTotal(items) {\n    return 0;\n}\nclass ShoppingCart {\n}\n";
const PY_SAMPLE: &str = "def calculate_total(items):\n    pass\n\nclass Order:\n    pass\n";
const GO_SAMPLE: &str = "package main\n\nfunc Run() {\n}\n";

#[test]
fn default_depth_is_three() {
    let req = ScanRequest::new("/tmp");
    assert_eq!(req.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(req.max_depth, 3);
}

#[test]
fn one_function_and_one_class_per_supported_file() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "app.js", JS_SAMPLE);

    let decls = scan(&ScanRequest::new(tmp.path())).unwrap();
    let functions: Vec<_> = decls.iter().filter(|d| d.kind == DeclKind::Function).collect();
    let classes: Vec<_> = decls.iter().filter(|d| d.kind == DeclKind::Class).collect();
    assert_eq!(functions.len(), 1);
    assert_eq!(functions[0].name, "calculateTotal");
    assert_eq!(functions[0].line, 1);
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].name, "ShoppingCart");
    assert_eq!(classes[0].line, 4);
    assert_eq!(classes[0].file, "app.js");
    assert_eq!(classes[0].path, "app.js");
}

#[test]
fn python_file_yields_both_kinds() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "orders.py", PY_SAMPLE);

    let decls = scan(&ScanRequest::new(tmp.path())).unwrap();
    assert!(decls.iter().any(|d| d.name == "calculate_total" && d.kind == DeclKind::Function && d.line == 1));
    assert!(decls.iter().any(|d| d.name == "Order" && d.kind == DeclKind::Class && d.line == 4));
}

#[test]
fn relative_paths_use_forward_slashes() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "src/core/cart.js", JS_SAMPLE);

    let decls = scan(&ScanRequest::new(tmp.path())).unwrap();
    assert!(!decls.is_empty());
    assert!(decls.iter().all(|d| d.path == "src/core/cart.js"));
    assert!(decls.iter().all(|d| d.file == "cart.js"));
}

#[test]
fn scan_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.js", JS_SAMPLE);
    write(tmp.path(), "b.py", PY_SAMPLE);
    write(tmp.path(), "c.go", GO_SAMPLE);

    let key = |d: &scout_core::decl::Declaration| (d.name.clone(), d.kind, d.path.clone());
    let mut first: Vec<_> = scan(&ScanRequest::new(tmp.path())).unwrap().iter().map(key).collect();
    let mut second: Vec<_> = scan(&ScanRequest::new(tmp.path())).unwrap().iter().map(key).collect();
    first.sort();
    second.sort();
    assert_eq!(first, second);
    first.dedup();
    assert_eq!(first.len(), second.len(), "no duplicate (name, kind, path) triples");
}

#[test]
fn depth_bound_excludes_deep_files() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "lib/deep/nested.js", JS_SAMPLE);

    let mut req = ScanRequest::new(tmp.path());
    req.max_depth = 1;
    assert!(scan(&req).unwrap().is_empty());

    req.max_depth = 3;
    let decls = scan(&req).unwrap();
    assert!(decls.iter().any(|d| d.name == "calculateTotal"));
}

#[test]
fn kind_filter_restricts_results() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "app.js", JS_SAMPLE);

    let mut req = ScanRequest::new(tmp.path());
    req.kind_filter = Some(DeclKind::Class);
    let decls = scan(&req).unwrap();
    assert!(!decls.is_empty());
    assert!(decls.iter().all(|d| d.kind == DeclKind::Class));

    req.kind_filter = Some(DeclKind::Function);
    let decls = scan(&req).unwrap();
    assert!(!decls.is_empty());
    assert!(decls.iter().all(|d| d.kind == DeclKind::Function));
}

#[test]
fn unsupported_extensions_are_not_collected() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "notes.md", "function fake() {}\n");
    write(tmp.path(), "data.json", "{}\n");

    assert!(scan(&ScanRequest::new(tmp.path())).unwrap().is_empty());
}

#[test]
fn empty_directory_is_success_not_error() {
    let tmp = TempDir::new().unwrap();
    let decls = scan(&ScanRequest::new(tmp.path())).unwrap();
    assert!(decls.is_empty());
}

#[test]
fn missing_root_is_invalid_request() {
    let err = scan(&ScanRequest::new("/definitely/not/a/real/path")).unwrap_err();
    assert!(matches!(err, ScanError::InvalidRequest(_)), "{err:?}");
}

#[test]
fn empty_root_is_invalid_request() {
    let err = scan(&ScanRequest::new("")).unwrap_err();
    assert!(matches!(err, ScanError::InvalidRequest(_)), "{err:?}");
}

#[test]
fn file_root_is_invalid_request() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "app.js", JS_SAMPLE);
    let err = scan(&ScanRequest::new(tmp.path().join("app.js"))).unwrap_err();
    assert!(matches!(err, ScanError::InvalidRequest(_)), "{err:?}");
}

#[test]
fn exhausted_collect_budget_is_traversal_timeout() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "app.js", JS_SAMPLE);

    let mut req = ScanRequest::new(tmp.path());
    req.collect_timeout = Duration::ZERO;
    let err = scan(&req).unwrap_err();
    assert!(matches!(err, ScanError::TraversalTimeout { .. }), "{err:?}");
}

#[test]
fn exhausted_scan_budget_is_scan_timeout() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "app.js", JS_SAMPLE);

    let mut req = ScanRequest::new(tmp.path());
    req.scan_timeout = Duration::ZERO;
    let err = scan(&req).unwrap_err();
    assert!(matches!(err, ScanError::ScanTimeout { .. }), "{err:?}");
}

#[test]
fn unreadable_file_is_skipped_not_fatal() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "good.js", JS_SAMPLE);
    // Invalid UTF-8 makes read_to_string fail for this candidate
    fs::write(tmp.path().join("bad.js"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let decls = scan(&ScanRequest::new(tmp.path())).unwrap();
    assert!(decls.iter().any(|d| d.name == "calculateTotal"));
    assert!(decls.iter().all(|d| d.file != "bad.js"));
}

#[test]
fn mixed_language_tree_merges_all_files() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "web/app.js", JS_SAMPLE);
    write(tmp.path(), "api/orders.py", PY_SAMPLE);
    write(tmp.path(), "cmd/run.go", GO_SAMPLE);

    let decls = scan(&ScanRequest::new(tmp.path())).unwrap();
    assert!(decls.iter().any(|d| d.path == "web/app.js"));
    assert!(decls.iter().any(|d| d.path == "api/orders.py"));
    assert!(decls.iter().any(|d| d.path == "cmd/run.go" && d.name == "Run"));
}
