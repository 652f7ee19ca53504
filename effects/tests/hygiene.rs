//! Hygiene: source-level standards checked at test time.
//!
//! Scans the production files of `effects/src/` for patterns that crash the
//! page script or swallow errors. Each pattern has a budget of zero; page
//! behaviors degrade through `SiteError` and logging instead.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// `(pattern, why it is banned)`.
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics abort the whole page script"),
    (".expect(", "panics abort the whole page script"),
    ("panic!(", "panics abort the whole page script"),
    ("unreachable!(", "panics abort the whole page script"),
    ("todo!(", "stubs must not ship"),
    ("unimplemented!(", "stubs must not ship"),
    ("let _ =", "errors must be logged, not discarded"),
    (".ok()", "errors must be logged, not discarded"),
    ("#[allow(dead_code)]", "unused code should be deleted"),
];

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
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
                .filter(|(_, line)| !line.trim_start().starts_with("//") && line.contains(pattern))
                .map(|(n, line)| format!("  {}:{}: {}", file.path, n + 1, line.trim()))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("slideshow.rs")), "run from the crate root");
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn banned_patterns_stay_at_zero() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, why) in BANNED {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            report.push(format!("`{pattern}` ({why}):\n{}", found.join("\n")));
        }
    }
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
