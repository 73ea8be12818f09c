//! HTTP client for the OWASP Nest API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    query::{ListQuery, ProjectQuery, Query, Window},
    types::PagedListing,
    Error, Resource,
};

/// Versioned root of the production Nest API.
pub const DEFAULT_BASE_URL: &str = "https://nest.owasp.dev/api/v0";

/// Per-request timeout applied unless the caller picks another.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the OWASP Nest API.
///
/// Every request carries the API key in the `X-API-Key` header and asks for
/// an uncached response. One `reqwest::Client` is built up front and shared
/// by all requests.
#[derive(Clone)]
pub struct Client {
    /// Base URL for the API, without trailing slash.
    base_api_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client pointing at the production Nest API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    /// Creates a new client with a custom base URL and request timeout.
    pub fn with_timeout(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&dyn Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// URL of a single record: `<path><id>/`, with `id` as one path segment.
    ///
    /// `.` and `..` cannot be carried as a segment (URL parsing resolves them,
    /// even percent-encoded), so they are refused.
    fn get_record_url(&self, resource: Resource, id: &str) -> Result<Url, Error> {
        if id.is_empty() || id == "." || id == ".." {
            tracing::error!("Refusing record id {:?} for {}", id, resource.plural());
            return Err(Error::RequestFailed);
        }
        let mut url = self.get_url(resource.path(), None)?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .push(id)
            .push("");
        Ok(url)
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("x-api-key", &self.api_key)
            .header("accept", "application/json")
            .header("cache-control", "no-store")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::MalformedBody
        })?;

        Ok(parsed)
    }

    /// Fetches one page of the query's resource.
    pub async fn list(&self, query: &ListQuery) -> Result<PagedListing<Value>, Error> {
        let url = self.get_url(query.resource().path(), Some(query))?;
        self.get(url).await
    }

    /// Fetches a single record by its identifier.
    pub async fn get_record(&self, resource: Resource, id: &str) -> Result<Value, Error> {
        let url = self.get_record_url(resource, id)?;
        self.get(url).await
    }

    /// Fetches a page of projects with typed ordering and level.
    pub async fn list_projects(
        &self,
        query: &ProjectQuery,
    ) -> Result<PagedListing<Value>, Error> {
        let url = self.get_url(Resource::Projects.path(), Some(query))?;
        self.get(url).await
    }

    /// Fetches a `limit`/`offset` window of projects.
    pub async fn scan_projects(&self, window: &Window) -> Result<PagedListing<Value>, Error> {
        let url = self.get_url(Resource::Projects.path(), Some(window))?;
        self.get(url).await
    }

    /// Fetches a `limit`/`offset` window of organizations.
    pub async fn list_organizations(
        &self,
        window: &Window,
    ) -> Result<PagedListing<Value>, Error> {
        let url = self.get_url(Resource::Organizations.path(), Some(window))?;
        self.get(url).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_url_appends_id_segment() {
        let client = Client::with_base_url("https://example.com/api/v0/", "k").unwrap();
        let url = client.get_record_url(Resource::Chapters, "london").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v0/chapters/london/");
    }

    #[test]
    fn record_url_escapes_id_as_one_segment() {
        let client = Client::with_base_url("https://example.com/api/v0", "k").unwrap();
        let url = client.get_record_url(Resource::Projects, "a/b c").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v0/projects/a%2Fb%20c/");

        let url = client.get_record_url(Resource::Projects, "...").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v0/projects/.../");
    }

    #[test]
    fn record_url_refuses_dot_segments() {
        let client = Client::with_base_url("https://example.com/api/v0", "k").unwrap();
        for id in ["", ".", ".."] {
            assert!(matches!(
                client.get_record_url(Resource::Projects, id),
                Err(Error::RequestFailed)
            ));
        }
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }
}
