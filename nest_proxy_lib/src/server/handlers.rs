use axum::extract::{Path, Query, State};
use axum::Json;
use nest_api::types::PagedListing;
use nest_api::Resource;
use serde::Serialize;
use serde_json::Value;

use super::response::FetchFailed;
use super::AppState;
use crate::client::Params;
use crate::search::{SearchRequest, SearchResults};
use crate::stats::LandingStats;

type Listing = Json<PagedListing<Value>>;

pub(super) async fn list(
    State(client): State<AppState>,
    Query(params): Query<Params>,
    resource: Resource,
) -> Result<Listing, FetchFailed> {
    match client.list(resource, &params).await {
        Ok(listing) => Ok(Json(listing)),
        Err(e) => {
            tracing::error!("Failed to fetch {}: {}", resource.plural(), e);
            Err(FetchFailed::fetch(resource.plural()))
        }
    }
}

pub(super) async fn detail(
    State(client): State<AppState>,
    Path(id): Path<String>,
    resource: Resource,
) -> Result<Json<Value>, FetchFailed> {
    match client.detail(resource, &id).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            tracing::error!("Failed to fetch {} '{}': {}", resource.singular(), id, e);
            Err(FetchFailed::fetch(resource.singular()))
        }
    }
}

pub(super) async fn projects(
    State(client): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Listing, FetchFailed> {
    client.projects(&params).await.map(Json).map_err(|e| {
        tracing::error!("Failed to fetch projects: {}", e);
        FetchFailed::fetch("projects")
    })
}

pub(super) async fn organizations(
    State(client): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Listing, FetchFailed> {
    client.organizations(&params).await.map(Json).map_err(|e| {
        tracing::error!("Failed to fetch organizations: {}", e);
        FetchFailed::fetch("organizations")
    })
}

pub(super) async fn search_projects(
    State(client): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<SearchResults>, FetchFailed> {
    let request = SearchRequest::from_params(&params);
    client.search_projects(&request).await.map(Json).map_err(|e| {
        tracing::error!("Failed to search projects for {:?}: {}", request.query, e);
        FetchFailed("Failed to search projects".to_string())
    })
}

pub(super) async fn stats(State(client): State<AppState>) -> Json<LandingStats> {
    Json(LandingStats::fetch(&client).await)
}

#[derive(Debug, Serialize)]
pub(super) struct Health {
    status: &'static str,
    version: &'static str,
}

pub(super) async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
