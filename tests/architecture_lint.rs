//! Architecture enforcement lint - keeps browser side effects behind their seams.
//!
//! Everything that touches the page goes through one module so the gate,
//! dialog and client logic stay testable without a browser:
//! - navigation and scrolling only in `app/navigation.rs` (the `Navigator` impl)
//! - localStorage only in `auth/storage.rs` (the `SessionStorage` impl)
//! - `fetch` to the auth provider only in `auth/transport.rs`
//!
//! It also rejects `.unwrap()` / `.expect(` outside the in-file `mod tests`.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// (pattern, the only file allowed to contain it)
const CONFINED_PATTERNS: &[(&str, &str)] = &[
    ("set_href(", "app/navigation.rs"),
    ("scroll_into_view", "app/navigation.rs"),
    ("local_storage(", "auth/storage.rs"),
    ("fetch_with_request(", "auth/transport.rs"),
];

/// Files allowed to call `fetch` for our own server
const SERVER_FETCH_FILES: &[&str] = &["app/api.rs"];

const PANICKING_CALLS: &[&str] = &[".unwrap()", ".expect("];

/// Source before the in-file test module
fn non_test_source(content: &str) -> &str {
    match content.find("\nmod tests") {
        Some(pos) => &content[..pos + 1],
        None => content,
    }
}

fn relative(path: &Path, src_dir: &Path) -> String {
    path.strip_prefix(src_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn analyze_file(path: &Path, src_dir: &Path) -> Vec<String> {
    let rel = relative(path, src_dir);
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };
    let code = non_test_source(&content);

    let mut violations = Vec::new();
    for (line_idx, line) in code.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") {
            continue;
        }

        for (pattern, home) in CONFINED_PATTERNS {
            let allowed = rel == *home
                || (*pattern == "fetch_with_request(" && SERVER_FETCH_FILES.contains(&rel.as_str()));
            if line.contains(pattern) && !allowed {
                violations.push(format!(
                    "{}:{}: `{}` belongs in {}",
                    rel,
                    line_idx + 1,
                    pattern,
                    home
                ));
            }
        }

        for call in PANICKING_CALLS {
            if line.contains(call) {
                violations.push(format!(
                    "{}:{}: `{}` outside tests; propagate the error instead",
                    rel,
                    line_idx + 1,
                    call
                ));
            }
        }
    }
    violations
}

fn collect_violations() -> Vec<String> {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .flat_map(|e| analyze_file(e.path(), &src_dir))
        .collect()
}

#[test]
fn browser_side_effects_stay_behind_seams() {
    let violations = collect_violations();

    if !violations.is_empty() {
        let mut msg = String::from("\n\nARCHITECTURE VIOLATION\n\n");
        for v in &violations {
            msg.push_str("  ");
            msg.push_str(v);
            msg.push('\n');
        }
        panic!("{}", msg);
    }
}

#[test]
fn non_test_source_stops_at_test_module() {
    let src = "fn a() {}\n#[cfg(test)]\nfn helper() {}\n#[cfg(test)]\nmod tests { fn b() { x.unwrap(); } }\n";
    assert_eq!(non_test_source(src), "fn a() {}\n#[cfg(test)]\nfn helper() {}\n#[cfg(test)]\n");
    assert_eq!(non_test_source("fn a() {}"), "fn a() {}");
}
