//! Integration tests for the query command.
//!
//! `query` never touches the network, so these run against the default endpoints.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::deliver_cmd_with_project;

fn query_json(args: &[&str]) -> Value {
    let output = deliver_cmd_with_project()
        .arg("query")
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_query_json_output() {
    let json = query_json(&["--where", "type=drinks", "--where", "id[gt]=42"]);

    assert_eq!(json["query_text"], "&system.type=drinks&system.id[gt]=42");
    assert_eq!(json["published"], true);
    assert_eq!(json["fragments"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["url"],
        "https://deliver.kenticocloud.com/123/items?&system.type=drinks&system.id[gt]=42"
    );
}

#[test]
fn test_query_encodes_free_text() {
    let json = query_json(&["--where", "sitemap[contains]=About Us", "--where", "name=Coffee & Tea"]);

    assert_eq!(
        json["query_text"],
        "&system.sitemap_locations[contains]=About%20Us&system.name=Coffee%20%26%20Tea"
    );
}

#[test]
fn test_query_last_modified_date() {
    let json = query_json(&["--where", "lastModified[gte]=2017-03-01"]);

    assert_eq!(
        json["query_text"],
        "&system.last_modified[gte]=2017-03-01T00:00:00.000Z"
    );
}

#[test]
fn test_query_unpublished_uses_preview_url() {
    let json = query_json(&["--unpublished", "--preview-key", "key", "--where", "codename=espresso"]);

    assert_eq!(json["published"], false);
    assert_eq!(
        json["url"],
        "https://preview-deliver.kenticocloud.com/123/items?&system.codename=espresso"
    );
}

#[test]
fn test_query_table_output() {
    deliver_cmd_with_project()
        .args(["query", "--where", "type=drinks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deliver Query"))
        .stdout(predicate::str::contains("Published"))
        .stdout(predicate::str::contains("&system.type=drinks"));
}

#[test]
fn test_query_without_filters() {
    deliver_cmd_with_project()
        .arg("query")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_query_unpublished_without_key_fails() {
    deliver_cmd_with_project()
        .args(["query", "--unpublished"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preview API Key"));
}

#[test]
fn test_query_invalid_date_fails() {
    deliver_cmd_with_project()
        .args(["query", "--where", "lastModified=yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid date"));
}
