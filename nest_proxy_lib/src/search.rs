//! Project search: over-fetch a window from the API, then filter, sort, and truncate locally.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use nest_api::Window;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{param, Params};
use crate::validation;

/// Extra items requested beyond `limit` so filtering still leaves a full page.
pub const OVERFETCH: u64 = 10;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 20;

/// Result ordering for project search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchSort {
    /// Keep the API's order.
    #[default]
    Relevance,
    /// Most stars first.
    Popularity,
    /// Newest first.
    Recent,
}

impl FromStr for SearchSort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SearchSort::Relevance),
            "popularity" => Ok(SearchSort::Popularity),
            "recent" => Ok(SearchSort::Recent),
            _ => Err(()),
        }
    }
}

/// What the `total` field of a search response counts.
///
/// `Filtered` counts every fetched item that passed the filters, even those
/// cut off by `limit`, and is bounded by the over-fetch window rather than
/// the real collection size. It is the default for compatibility with
/// existing clients. `Returned` counts only the items in `data`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTotal {
    #[default]
    Filtered,
    Returned,
}

impl FromStr for SearchTotal {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "filtered" => Ok(SearchTotal::Filtered),
            "returned" => Ok(SearchTotal::Returned),
            _ => Err(()),
        }
    }
}

/// A normalized project search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free text matched against name and description. Empty matches everything.
    pub query: String,
    /// Items must carry at least one of these topics. Empty matches everything.
    pub tags: Vec<String>,
    pub sort: SearchSort,
    /// 1-indexed page.
    pub page: u64,
    pub limit: u64,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            tags: Vec::new(),
            sort: SearchSort::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchRequest {
    /// Reads `q`, `tags`, `sort`, `page` and `limit`; bad values fall back to defaults.
    pub fn from_params(params: &Params) -> Self {
        Self {
            query: param(params, "q").unwrap_or_default().to_string(),
            tags: validation::parse_tags(param(params, "tags")),
            sort: param(params, "sort")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            page: validation::parse_positive(param(params, "page"), DEFAULT_PAGE),
            limit: validation::parse_positive(param(params, "limit"), DEFAULT_LIMIT),
        }
    }

    /// The upstream window: the requested page, widened by [`OVERFETCH`].
    pub fn window(&self) -> Window {
        Window::for_page(self.page, self.limit).widened(OVERFETCH)
    }
}

/// Body of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub data: Vec<Value>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// Filters, sorts and truncates fetched projects for `request`.
///
/// Items are never modified. The same input always yields the same output.
pub fn refine(items: Vec<Value>, request: &SearchRequest, total: SearchTotal) -> SearchResults {
    let needle = request.query.to_lowercase();

    let mut matched: Vec<Value> = items
        .into_iter()
        .filter(|item| {
            let project = ProjectView(item);
            (needle.is_empty() || project.mentions(&needle))
                && (request.tags.is_empty() || project.has_any_topic(&request.tags))
        })
        .collect();

    match request.sort {
        SearchSort::Popularity => matched.sort_by(|a, b| {
            ProjectView(b)
                .stars()
                .partial_cmp(&ProjectView(a).stars())
                .unwrap_or(Ordering::Equal)
        }),
        SearchSort::Recent => {
            matched.sort_by_key(|item| std::cmp::Reverse(ProjectView(item).created_at_millis()))
        }
        SearchSort::Relevance => {}
    }

    let filtered_count = matched.len() as u64;
    matched.truncate(usize::try_from(request.limit).unwrap_or(usize::MAX));

    SearchResults {
        total: match total {
            SearchTotal::Filtered => filtered_count,
            SearchTotal::Returned => matched.len() as u64,
        },
        data: matched,
        page: request.page,
        limit: request.limit,
    }
}

/// Read-only accessors over a project record as the API returns it.
struct ProjectView<'a>(&'a Value);

impl ProjectView<'_> {
    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn field(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|k| self.0.get(*k))
            .find(|v| !v.is_null())
    }

    /// Case-insensitive substring match on name or description.
    fn mentions(&self, needle: &str) -> bool {
        ["name", "description"]
            .iter()
            .filter_map(|k| self.text(k))
            .any(|text| text.to_lowercase().contains(needle))
    }

    fn has_any_topic(&self, tags: &[String]) -> bool {
        let Some(topics) = self.0.get("topics").and_then(Value::as_array) else {
            return false;
        };
        tags.iter()
            .any(|tag| topics.iter().any(|t| t.as_str() == Some(tag.as_str())))
    }

    /// Star count; missing or non-numeric counts as 0.
    fn stars(&self) -> f64 {
        self.field(&["stars", "stars_count"])
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Creation time in epoch milliseconds; missing or unparsable is the epoch.
    fn created_at_millis(&self) -> i64 {
        match self.field(&["createdAt", "created_at"]) {
            Some(Value::String(s)) => parse_timestamp_millis(s).unwrap_or(0),
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
            _ => 0,
        }
    }
}

fn parse_timestamp_millis(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
