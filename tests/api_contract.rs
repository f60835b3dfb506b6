#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! API Contract Tests
//!
//! The browser fetches `/api/auth/config` by path, so the server routes in
//! `src/api/mod.rs` are pinned to tests/fixtures/api_routes.txt. Update the
//! fixture only when a route change is intentional.

use std::collections::BTreeSet;
use std::fs;

const FIXTURE: &str = "tests/fixtures/api_routes.txt";

fn fixture_lines() -> Vec<String> {
    fs::read_to_string(FIXTURE)
        .expect("Failed to read api_routes.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// `METHOD /path` for every `.route("/path", method(handler))` line
fn source_routes() -> BTreeSet<String> {
    let source = fs::read_to_string("src/api/mod.rs").expect("Failed to read src/api/mod.rs");

    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("//"))
        .filter_map(|line| {
            let rest = &line[line.find(".route(\"")? + 8..];
            let path = &rest[..rest.find('"')?];
            let method = ["get", "post", "put", "delete"]
                .into_iter()
                .find(|m| rest.contains(&format!("{m}(")))?;
            Some(format!("{} {}", method.to_uppercase(), path))
        })
        .collect()
}

#[test]
fn api_routes_match_contract() {
    let pinned: BTreeSet<String> = fixture_lines().into_iter().collect();
    let actual = source_routes();

    let added: Vec<_> = actual.difference(&pinned).collect();
    let removed: Vec<_> = pinned.difference(&actual).collect();
    assert!(
        added.is_empty() && removed.is_empty(),
        "\nroutes not in {FIXTURE}: {added:?}\nroutes missing from src/api/mod.rs: {removed:?}\n"
    );
}

#[test]
fn auth_config_route_is_public_get() {
    let actual = source_routes();
    assert!(actual.contains("GET /api/auth/config"));
    assert!(!actual.iter().any(|r| r.starts_with("POST ")));
}

#[test]
fn fixture_is_sorted() {
    let lines = fixture_lines();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted, "api_routes.txt must stay sorted");
}
