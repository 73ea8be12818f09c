use url::Url;

use super::Query;

/// A `limit`/`offset` slice of a collection (0-indexed offset).
///
/// This is the only place a page number is turned into an offset, so every
/// windowed call maps pages the same way: `offset = (page - 1) * limit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub limit: u64,
    pub offset: u64,
}

impl Window {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Window covering 1-indexed `page` of `limit` items. Page 0 is treated as 1.
    pub fn for_page(page: u64, limit: u64) -> Self {
        Self {
            limit,
            offset: page.max(1).saturating_sub(1).saturating_mul(limit),
        }
    }

    /// Same offset, `extra` more items.
    pub fn widened(self, extra: u64) -> Self {
        Self {
            limit: self.limit.saturating_add(extra),
            offset: self.offset,
        }
    }
}

impl Query for Window {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string())
            .append_pair("offset", &self.offset.to_string());
        url
    }
}
