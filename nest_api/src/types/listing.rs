//! The Paged Listing envelope returned by every list endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of a homogeneous collection.
///
/// Items keep the order the API returned them in. The derived paging fields
/// are optional on the wire; [`PagedListing::fill_paging`] computes any the
/// API left out without touching the ones it sent. Unrecognized top-level
/// keys are kept in `extra` so a relayed listing loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedListing<T> {
    pub items: Vec<T>,
    /// Total across all pages, not just this one.
    pub total_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_previous: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Paging figures derived from a total, a page, and a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub current_page: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Paging {
    /// Derives paging for `page` (1-indexed) of `page_size` items.
    ///
    /// There is always at least one page, even for an empty collection.
    /// A zero page or page size is treated as 1.
    pub fn compute(total_count: u64, page: u64, page_size: u64) -> Self {
        let current_page = page.max(1);
        let total_pages = total_count.div_ceil(page_size.max(1)).max(1);
        Self {
            current_page,
            total_pages,
            has_next: current_page < total_pages,
            has_previous: current_page > 1,
        }
    }
}

impl<T> PagedListing<T> {
    /// Fills in whichever derived paging fields are missing.
    pub fn fill_paging(&mut self, page: u64, page_size: u64) {
        let paging = Paging::compute(self.total_count, page, page_size);
        self.current_page.get_or_insert(paging.current_page);
        self.total_pages.get_or_insert(paging.total_pages);
        self.has_next.get_or_insert(paging.has_next);
        self.has_previous.get_or_insert(paging.has_previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_page_of_twenty_five() {
        let paging = Paging::compute(25, 3, 10);
        assert_eq!(paging.total_pages, 3);
        assert!(!paging.has_next);
        assert!(paging.has_previous);
    }

    #[test]
    fn empty_collection_has_one_page() {
        let paging = Paging::compute(0, 1, 20);
        assert_eq!(paging.total_pages, 1);
        assert!(!paging.has_next);
        assert!(!paging.has_previous);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        assert_eq!(Paging::compute(40, 1, 20).total_pages, 2);
        assert_eq!(Paging::compute(41, 1, 20).total_pages, 3);
    }

    #[test]
    fn fill_paging_keeps_sent_fields() {
        let mut listing: PagedListing<Value> =
            serde_json::from_str(r#"{"items": [], "total_count": 25, "total_pages": 7}"#).unwrap();
        listing.fill_paging(3, 10);
        assert_eq!(listing.total_pages, Some(7));
        assert_eq!(listing.current_page, Some(3));
        assert_eq!(listing.has_previous, Some(true));
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let listing: PagedListing<Value> = serde_json::from_str(
            r#"{"items": [{"key": "a"}], "total_count": 1, "cursor": "abc"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["cursor"], "abc");
        assert_eq!(json["items"][0]["key"], "a");
        assert!(json.get("has_next").is_none());
    }
}
