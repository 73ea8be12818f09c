//! Proxy operations over the API client: normalize inbound parameters, call upstream, relay.

use std::collections::HashMap;

use nest_api::types::PagedListing;
use nest_api::{Client, ListQuery, PagedQuery, ProjectQuery, Resource, Window};
use serde_json::Value;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::search::{self, SearchRequest, SearchResults, SearchTotal};
use crate::validation;

/// Inbound query parameters, as decoded from the request's query string.
pub type Params = HashMap<String, String>;

const DEFAULT_ORGANIZATION_LIMIT: u64 = 50;
const DEFAULT_PROJECT_PAGE: u64 = 1;
const DEFAULT_PROJECT_PAGE_SIZE: u64 = 20;

/// Returns a parameter's value, treating an empty value as absent.
pub fn param<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// The proxy's view of the upstream API.
///
/// Holds no per-request state; one instance is shared by every handler.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    inner: Client,
    search_total: SearchTotal,
}

impl ProxyClient {
    pub fn new(inner: Client) -> Self {
        Self {
            inner,
            search_total: SearchTotal::default(),
        }
    }

    /// Builds the client described by `config`.
    pub fn from_config(config: &ProxyConfig) -> Result<Self, ProxyError> {
        Ok(Self::new(config.build_client()?).with_search_total(config.search_total))
    }

    pub fn with_search_total(mut self, search_total: SearchTotal) -> Self {
        self.search_total = search_total;
        self
    }

    /// Translates inbound parameters into the upstream list query for `resource`.
    ///
    /// `page`, `page_size` and `ordering` default when absent or empty; only
    /// the resource's declared filters are kept, and only when non-empty.
    pub fn list_query(resource: Resource, params: &Params) -> ListQuery {
        let mut query = ListQuery::new(resource);
        if let Some(page) = param(params, "page") {
            query = query.with_page(page);
        }
        if let Some(page_size) = param(params, "page_size") {
            query = query.with_page_size(page_size);
        }
        if let Some(ordering) = param(params, "ordering") {
            query = query.with_ordering(ordering);
        }
        for key in resource.filters() {
            if let Some(value) = param(params, key) {
                query = query.with_filter(key, value);
            }
        }
        query
    }

    /// Translates inbound parameters into a typed projects query.
    pub fn project_query(params: &Params) -> ProjectQuery {
        let page = validation::parse_positive(param(params, "page"), DEFAULT_PROJECT_PAGE);
        let page_size =
            validation::parse_positive(param(params, "page_size"), DEFAULT_PROJECT_PAGE_SIZE);
        let mut query = ProjectQuery::default()
            .with_page(&page.to_string())
            .with_page_size(&page_size.to_string())
            .with_ordering(validation::project_ordering(param(params, "ordering")));
        if let Some(level) = validation::project_level(param(params, "level")) {
            query = query.with_level(level);
        }
        query
    }

    /// Translates inbound `limit` / `offset` into an organizations window.
    pub fn organization_window(params: &Params) -> Window {
        Window::new(
            validation::parse_count(param(params, "limit"), DEFAULT_ORGANIZATION_LIMIT),
            validation::parse_count(param(params, "offset"), 0),
        )
    }

    /// List proxy: one page of `resource`, relayed as the API sent it.
    pub async fn list(
        &self,
        resource: Resource,
        params: &Params,
    ) -> Result<PagedListing<Value>, ProxyError> {
        let query = Self::list_query(resource, params);
        let mut listing = self.inner.list(&query).await?;
        fill_paging(&mut listing, &query);
        Ok(listing)
    }

    /// Detail proxy: a single record by opaque identifier.
    pub async fn detail(&self, resource: Resource, id: &str) -> Result<Value, ProxyError> {
        Ok(self.inner.get_record(resource, id).await?)
    }

    /// Projects listing with validated ordering and level.
    pub async fn projects(&self, params: &Params) -> Result<PagedListing<Value>, ProxyError> {
        let query = Self::project_query(params);
        let mut listing = self.inner.list_projects(&query).await?;
        fill_paging(&mut listing, &query);
        Ok(listing)
    }

    /// Organizations listing by `limit` / `offset`.
    pub async fn organizations(
        &self,
        params: &Params,
    ) -> Result<PagedListing<Value>, ProxyError> {
        let window = Self::organization_window(params);
        let mut listing = self.inner.list_organizations(&window).await?;
        if window.limit > 0 {
            listing.fill_paging(window.offset / window.limit + 1, window.limit);
        }
        Ok(listing)
    }

    /// Project search with local filtering and sorting.
    pub async fn search_projects(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResults, ProxyError> {
        let listing = self.inner.scan_projects(&request.window()).await?;
        Ok(search::refine(listing.items, request, self.search_total))
    }

    /// Total number of records of `resource`, from a one-item page.
    pub async fn count(&self, resource: Resource) -> Result<u64, ProxyError> {
        let query = ListQuery::new(resource).with_page_size("1");
        Ok(self.inner.list(&query).await?.total_count)
    }
}

fn fill_paging<Q: PagedQuery>(listing: &mut PagedListing<Value>, query: &Q) {
    let common = query.common();
    if let (Some(page), Some(page_size)) = (common.page_number(), common.page_size_number()) {
        listing.fill_paging(page, page_size);
    }
}
