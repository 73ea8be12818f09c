//! HTTP surface of the proxy.

mod handlers;
mod response;

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue};
use axum::routing::{get, MethodRouter};
use axum::Router;
use nest_api::Resource;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::client::{Params, ProxyClient};

pub use response::{ErrorBody, FetchFailed};

/// Shared, immutable handler state.
pub type AppState = Arc<ProxyClient>;

/// Builds the proxy router.
pub fn build_router(client: Arc<ProxyClient>) -> Router {
    Router::new()
        .route("/api/chapters", list_route(Resource::Chapters))
        .route("/api/chapters/{id}", detail_route(Resource::Chapters))
        .route("/api/members", list_route(Resource::Members))
        .route("/api/community/members", list_route(Resource::Members))
        .route("/api/events", list_route(Resource::Events))
        .route("/api/issues", list_route(Resource::Issues))
        .route("/api/releases", list_route(Resource::Releases))
        .route("/api/sponsors", list_route(Resource::Sponsors))
        .route("/api/repositories", list_route(Resource::Repositories))
        .route("/api/projects", get(handlers::projects))
        .route("/api/projects/{id}", detail_route(Resource::Projects))
        .route("/api/organizations", get(handlers::organizations))
        .route("/api/community/organizations", get(handlers::organizations))
        .route("/api/search/projects", get(handlers::search_projects))
        .route("/api/stats", get(handlers::stats))
        .route("/health", get(handlers::health))
        .with_state(client)
        // Responses are never cacheable, success or failure.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// One list-proxy route per resource, all sharing the same handler.
fn list_route(resource: Resource) -> MethodRouter<AppState> {
    get(move |state: State<AppState>, query: Query<Params>| {
        handlers::list(state, query, resource)
    })
}

fn detail_route(resource: Resource) -> MethodRouter<AppState> {
    get(move |state: State<AppState>, id: Path<String>| {
        handlers::detail(state, id, resource)
    })
}
