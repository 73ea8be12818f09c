//! Library layer for nest-proxy: the pass-through proxy contract over the OWASP Nest API.
//!
//! Wraps the `nest_api` client with request normalization, project
//! search-and-filter, landing statistics, configuration, and the axum router
//! that exposes all of it over HTTP.

pub mod client;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod stats;
pub mod validation;

pub use nest_api;
pub use nest_api::types;
pub use nest_api::{ListQuery, PagedQuery, ProjectQuery, Query, Resource, Window};

pub use client::{Params, ProxyClient};
pub use config::{ConfigError, ProxyConfig};
pub use error::ProxyError;
pub use search::{SearchRequest, SearchResults, SearchSort, SearchTotal};
pub use server::build_router;
pub use stats::LandingStats;
