//! Shared query infrastructure: the [`Query`] and [`PagedQuery`] traits and [`QueryCommon`] fields.

use url::Url;

/// Page requested when the caller does not name one.
pub const DEFAULT_PAGE: &str = "1";
/// Page size requested when the caller does not name one.
pub const DEFAULT_PAGE_SIZE: &str = "20";

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// Parameters are always appended in the same order so the resulting URL
    /// is deterministic for a given query.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Query builders paginated with 1-indexed `page` / `page_size` parameters.
pub trait PagedQuery: Query {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Returns the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Sets the page, forwarded verbatim. Empty values keep the current page.
    fn with_page(mut self, page: &str) -> Self
    where
        Self: Sized,
    {
        if !page.is_empty() {
            self.get_common().page = page.to_string();
        }
        self
    }

    /// Sets the page size, forwarded verbatim. Empty values keep the current size.
    fn with_page_size(mut self, page_size: &str) -> Self
    where
        Self: Sized,
    {
        if !page_size.is_empty() {
            self.get_common().page_size = page_size.to_string();
        }
        self
    }
}

/// Pagination fields shared by every page-based query.
///
/// Values are kept as the strings the caller supplied so a proxy forwards
/// exactly what it received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to `"1"`.
    pub page: String,
    /// Results per page. Defaults to `"20"`.
    pub page_size: String,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: DEFAULT_PAGE.to_string(),
            page_size: DEFAULT_PAGE_SIZE.to_string(),
        }
    }
}

impl QueryCommon {
    /// Appends `page` and `page_size` to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page)
            .append_pair("page_size", &self.page_size);
        url
    }

    /// The page as a number, if it parses as a positive integer.
    pub fn page_number(&self) -> Option<u64> {
        self.page.parse::<u64>().ok().filter(|p| *p > 0)
    }

    /// The page size as a number, if it parses as a positive integer.
    pub fn page_size_number(&self) -> Option<u64> {
        self.page_size.parse::<u64>().ok().filter(|p| *p > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_page_of_twenty() {
        let common = QueryCommon::default();
        assert_eq!(common.page_number(), Some(1));
        assert_eq!(common.page_size_number(), Some(20));
    }

    #[test]
    fn non_numeric_values_have_no_number() {
        let common = QueryCommon {
            page: "abc".to_string(),
            page_size: "0".to_string(),
        };
        assert_eq!(common.page_number(), None);
        assert_eq!(common.page_size_number(), None);
    }
}
