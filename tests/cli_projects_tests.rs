//! End-to-end tests for `folio projects` and `folio tags`.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the folio binary
fn folio_bin() -> String {
    std::env::var("CARGO_BIN_EXE_folio").unwrap_or_else(|_| "target/release/folio".to_string())
}

/// Runs folio with `args` against a config file inside `dir`.
fn run(args: &[&str], dir: &TempDir) -> Output {
    let config = dir.path().join("config.toml");
    Command::new(folio_bin())
        .args(args)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute command")
}

fn titles(output: &Output) -> Vec<String> {
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    json.as_array()
        .expect("Output should be an array")
        .iter()
        .map(|p| p["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Projects Command Tests
// ============================================================================

#[test]
fn test_projects_lists_all_in_order() {
    let dir = TempDir::new().unwrap();
    let output = run(&["projects", "--json"], &dir);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        titles(&output),
        vec![
            "WPM Typetest",
            "Random Word Generator API",
            "Fastodo",
            "Biblequest"
        ]
    );
}

#[test]
fn test_projects_json_fields() {
    let dir = TempDir::new().unwrap();
    let output = run(&["projects", "--json"], &dir);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let first = &json[0];
    assert_eq!(first["id"], 1);
    assert!(first["description"].is_string());
    assert!(first["tags"].is_array());
    assert!(first["source_url"].is_string());
}

#[test]
fn test_projects_filter_by_shared_tag() {
    let dir = TempDir::new().unwrap();
    let output = run(&["projects", "--tag", "Supabase", "--json"], &dir);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(titles(&output).len(), 4);
}

#[test]
fn test_projects_filter_by_rare_tag() {
    let dir = TempDir::new().unwrap();
    let output = run(&["projects", "--tag", "SQL", "--json"], &dir);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(titles(&output), vec!["WPM Typetest"]);
}

#[test]
fn test_projects_filter_is_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let output = run(&["projects", "--tag", "sql", "--json"], &dir);

    assert_eq!(output.status.code(), Some(0), "No match is an empty list");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!([]));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SQL"), "Available tags should be noted");
}

#[test]
fn test_projects_without_match_print_empty_list() {
    let dir = TempDir::new().unwrap();
    let output = run(&["projects", "--tag", "Haskell"], &dir);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "No projects match this tag.");
}

#[test]
fn test_projects_human_readable() {
    let dir = TempDir::new().unwrap();
    let output = run(&["projects", "--tag", "HTML"], &dir);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Biblequest"));
    assert!(stdout.contains("Tags: React Native, TypeScript, HTML, CSS, Supabase"));
    assert!(stdout.contains("View Code: "));
    assert!(!stdout.contains("Fastodo"));
}

// ============================================================================
// Tags Command Tests
// ============================================================================

#[test]
fn test_tags_sorted_and_unique() {
    let dir = TempDir::new().unwrap();
    let output = run(&["tags", "--json"], &dir);

    assert_eq!(output.status.code(), Some(0));
    let tags: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        tags,
        vec!["CSS", "HTML", "React Native", "SQL", "Supabase", "TypeScript"]
    );
}

#[test]
fn test_tags_plain_one_per_line() {
    let dir = TempDir::new().unwrap();
    let output = run(&["tags"], &dir);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 6);
    assert_eq!(stdout.lines().next(), Some("CSS"));
}
