//! Hygiene: source-level rules checked at test time.
//!
//! Production files under `src/` (everything except `*_test.rs`) are scanned
//! line by line. Budgets are zero; raising one needs a reason in review.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Patterns that panic, swallow errors without inspection, or hide dead code.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

/// The only file allowed to name browser bindings.
const BROWSER_HOST: &str = "browser.rs";

fn source_files() -> Vec<SourceFile> {
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, max) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            failures.push(format!("{pattern} budget exceeded: found {count}, max {max}\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn core_modules_stay_host_agnostic() {
    let files = source_files();
    let leaks: Vec<(String, usize)> = ["web_sys::", "js_sys::", "wasm_bindgen::"]
        .iter()
        .flat_map(|pattern| hits(&files, pattern))
        .filter(|(path, _)| !path.ends_with(BROWSER_HOST) && !path.ends_with("lib.rs"))
        .collect();
    assert!(leaks.is_empty(), "browser bindings outside {BROWSER_HOST}:\n{}", format_hits(&leaks));
}

#[test]
fn every_test_module_has_its_file() {
    let files = source_files();
    let mut missing = Vec::new();
    for file in &files {
        let dir = Path::new(&file.path).parent().unwrap_or(Path::new("src"));
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.split('"').next() else {
                continue;
            };
            if !dir.join(name).exists() {
                missing.push(format!("{} -> {name}", file.path));
            }
        }
    }
    assert!(missing.is_empty(), "missing test files:\n{}", missing.join("\n"));
}
