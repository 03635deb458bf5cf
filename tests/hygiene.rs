//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the pure core of the crate (everything under `src/`
//! except the browser bindings in `src/dom/`) for antipatterns and for
//! browser APIs leaking out of the binding layer. Every budget is zero and
//! never grows.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding tests and `src/dom/`.
fn core_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().is_some_and(|n| n == "dom") {
                continue;
            }
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Lines containing `pattern`, reported as `path: count`.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize) {
    let files = core_files();
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn core_sources_are_found() {
    assert!(core_files().iter().any(|f| f.path.ends_with("panel.rs")));
}

// Panics: these abort the wasm instance.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0);
    assert_budget("unreachable!(", 0);
    assert_budget("todo!(", 0);
    assert_budget("unimplemented!(", 0);
}

// Silent loss: discards errors without inspecting. Only the DOM edge may.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0);
    assert_budget(".ok()", 0);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0);
}

// Layering: the core must build and test without a browser.

#[test]
fn core_does_not_touch_browser_apis() {
    assert_budget("web_sys", 0);
    assert_budget("wasm_bindgen", 0);
    assert_budget("gloo_", 0);
    assert_budget("js_sys", 0);
}
