use nest_proxy_lib::search::refine;
use nest_proxy_lib::server::ErrorBody;
use nest_proxy_lib::types::PagedListing;
use nest_proxy_lib::{LandingStats, SearchRequest, SearchSort, SearchTotal};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root().join("nest_api/tests/fixtures").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn assert_conforms(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = jsonschema::draft202012::new(&schema)
        .unwrap_or_else(|e| panic!("{} compiles: {}", schema_name, e));
    if let Err(e) = validator.validate(data) {
        panic!("{} rejected {}: {e}", schema_name, data);
    }
}

fn is_valid(schema_name: &str, data: &Value) -> bool {
    let schema = load_schema(schema_name);
    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    validator.is_valid(data)
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures and serialized types conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn listing_fixtures_conform_to_schema() {
    for name in [
        "chapters.json",
        "projects.json",
        "organizations.json",
        "listing_minimal.json",
    ] {
        assert_conforms("paged_listing.schema.json", &load_fixture(name));
    }
}

#[test]
fn filled_listing_conforms_to_schema() {
    let fixture = load_fixture("listing_minimal.json");
    let mut listing: PagedListing<Value> = serde_json::from_value(fixture).unwrap();
    listing.fill_paging(1, 20);
    assert_conforms(
        "paged_listing.schema.json",
        &serde_json::to_value(&listing).unwrap(),
    );
}

#[test]
fn search_results_conform_to_schema() {
    let fixture = load_fixture("projects.json");
    let listing: PagedListing<Value> = serde_json::from_value(fixture).unwrap();
    let request = SearchRequest {
        query: "owasp".to_string(),
        sort: SearchSort::Recent,
        limit: 2,
        ..SearchRequest::default()
    };
    let results = refine(listing.items, &request, SearchTotal::Filtered);
    assert_eq!(results.total, 3);
    assert_conforms(
        "search_results.schema.json",
        &serde_json::to_value(&results).unwrap(),
    );
}

#[test]
fn stats_conform_to_schema() {
    assert_conforms(
        "stats.schema.json",
        &serde_json::to_value(LandingStats::FALLBACK).unwrap(),
    );
}

#[test]
fn error_bodies_conform_to_schema() {
    for message in [
        "Failed to fetch chapters",
        "Failed to fetch project",
        "Failed to search projects",
    ] {
        let body = ErrorBody {
            error: message.to_string(),
        };
        assert_conforms("error.schema.json", &serde_json::to_value(&body).unwrap());
    }
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject invalid data
// ---------------------------------------------------------------------------

#[test]
fn listing_schema_rejects_missing_total_count() {
    let mut fixture = load_fixture("chapters.json");
    fixture.as_object_mut().unwrap().remove("total_count");
    assert!(!is_valid("paged_listing.schema.json", &fixture));
}

#[test]
fn listing_schema_rejects_zero_total_pages() {
    let mut fixture = load_fixture("chapters.json");
    fixture["total_pages"] = json!(0);
    assert!(!is_valid("paged_listing.schema.json", &fixture));
}

#[test]
fn listing_schema_rejects_detail_record() {
    assert!(!is_valid("paged_listing.schema.json", &load_fixture("chapter.json")));
}

#[test]
fn search_schema_rejects_extra_fields() {
    let data = json!({"data": [], "total": 0, "page": 1, "limit": 20, "next": null});
    assert!(!is_valid("search_results.schema.json", &data));
}

#[test]
fn error_schema_rejects_leaked_cause() {
    let data = json!({"error": "HTTP 404: Not found"});
    assert!(!is_valid("error.schema.json", &data));
}

#[test]
fn stats_schema_rejects_negative_counts() {
    let data = json!({"projects": -1, "members": 1000, "chapters": 200});
    assert!(!is_valid("stats.schema.json", &data));
}
