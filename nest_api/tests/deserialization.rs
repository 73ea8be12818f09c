use nest_api::types::PagedListing;
use serde_json::Value;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_chapters_full() {
    let json = load_fixture("chapters.json");
    let resp: PagedListing<Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.total_count, 25);
    assert_eq!(resp.current_page, Some(1));
    assert_eq!(resp.total_pages, Some(2));
    assert_eq!(resp.has_next, Some(true));
    assert_eq!(resp.has_previous, Some(false));
    assert!(resp.extra.is_empty());

    let chapter = &resp.items[1];
    assert_eq!(chapter["key"], "lima");
    assert_eq!(chapter["country"], "Peru");
}

#[test]
fn deserialize_listing_minimal() {
    let json = load_fixture("listing_minimal.json");
    let resp: PagedListing<Value> = serde_json::from_str(&json).unwrap();
    assert!(resp.items.is_empty());
    assert_eq!(resp.total_count, 0);
    assert_eq!(resp.current_page, None);
    assert_eq!(resp.total_pages, None);
}

#[test]
fn deserialize_projects_keeps_item_fields() {
    let json = load_fixture("projects.json");
    let resp: PagedListing<Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.items.len(), 3);
    assert_eq!(resp.items[0]["topics"][0], "dast");
    assert_eq!(resp.items[1]["stars"], 500);
    assert!(resp.items[2]["description"].is_null());
}

#[test]
fn reserialized_listing_matches_fixture() {
    let json = load_fixture("chapters.json");
    let original: Value = serde_json::from_str(&json).unwrap();
    let resp: PagedListing<Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_value(&resp).unwrap(), original);
}

#[test]
fn missing_total_count_is_rejected() {
    let result = serde_json::from_str::<PagedListing<Value>>(r#"{"items": []}"#);
    assert!(result.is_err());
}

#[test]
fn negative_total_count_is_rejected() {
    let result =
        serde_json::from_str::<PagedListing<Value>>(r#"{"items": [], "total_count": -1}"#);
    assert!(result.is_err());
}
