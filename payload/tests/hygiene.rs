//! Hygiene: source scan for antipatterns in the payload crate.
//!
//! Decoding runs on untrusted host input, so production code must never
//! panic and must never drop an error on the floor. Every budget is zero.

use std::fs;
use std::path::Path;

const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics on error"),
    (".expect(", "panics on error"),
    ("panic!(", "panics"),
    ("unreachable!(", "panics"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "silently discards a value"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `payload/src/`, excluding test files.
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, _)| format!("  {}:{}", file.path, n + 1))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn scans_at_least_one_file() {
    assert!(!source_files().is_empty(), "no sources found under src/");
}

#[test]
fn forbidden_patterns_are_absent() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, reason) in FORBIDDEN {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            report.push(format!("`{pattern}` ({reason}):\n{}", found.join("\n")));
        }
    }
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
