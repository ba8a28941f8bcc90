use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use nexa_catalog::{
    Catalog, Dao, FilterOption, FilterSpec, FilteredDaos, Proposal, ProposalCounts,
    category_options, status_options,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use utils::errors::{BAD_QUERY_ERROR, DAO_NOT_FOUND_ERROR, PROPOSAL_NOT_FOUND_ERROR};

pub type SharedCatalog = Arc<Catalog>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}: {}", DAO_NOT_FOUND_ERROR, .0)]
    DaoNotFound(String),
    #[error("{}: {}", PROPOSAL_NOT_FOUND_ERROR, .0)]
    ProposalNotFound(String),
    #[error("{}: {}", BAD_QUERY_ERROR, .0)]
    BadRequest(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::DaoNotFound(_) | ApiError::ProposalNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct DaoQuery {
    pub category: Option<String>,
    /// Every `status` value in request order. Each may itself be comma separated.
    pub status: Vec<String>,
    pub q: Option<String>,
}

impl DaoQuery {
    /// Collects decoded query pairs. `status` may repeat; for `category` and
    /// `q` the last value wins. Unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "category" => query.category = Some(value),
                "status" => query.status.push(value),
                "q" => query.q = Some(value),
                _ => {}
            }
        }
        query
    }

    pub fn to_spec(&self) -> FilterSpec {
        let status = self.status.join(",");
        FilterSpec::from_params(self.category.as_deref(), Some(&status), self.q.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveProposalQuery {
    pub dao_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoDetail {
    #[serde(flatten)]
    pub dao: Dao,
    pub derived_counts: ProposalCounts,
}

#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<FilterOption>,
    pub statuses: Vec<FilterOption>,
}

pub fn router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/daos", get(list_daos))
        .route("/daos/{id}", get(get_dao))
        .route("/daos/{id}/proposals", get(list_dao_proposals))
        .route("/proposals/active", get(list_active_proposals))
        .route("/proposals/{id}", get(get_proposal))
        .route("/filters", get(filter_options))
        .with_state(catalog)
}

async fn list_daos(
    State(catalog): State<SharedCatalog>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<FilteredDaos>, ApiError> {
    let Query(pairs) = pairs?;
    let query = DaoQuery::from_pairs(pairs);
    let spec = query.to_spec();
    let result = catalog.filtered(&spec);
    debug!(
        category = ?query.category,
        status = ?query.status,
        q = ?query.q,
        matched = result.matched,
        total = result.total,
        "Listed DAOs"
    );
    Ok(Json(result))
}

async fn get_dao(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Result<Json<DaoDetail>, ApiError> {
    let dao = catalog
        .dao_by_id(&id)
        .cloned()
        .ok_or_else(|| ApiError::DaoNotFound(id.clone()))?;
    let derived_counts = catalog.proposal_counts(&id);
    debug!(dao_id = %id, "Fetched DAO");
    Ok(Json(DaoDetail {
        dao,
        derived_counts,
    }))
}

async fn list_dao_proposals(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Proposal>>, ApiError> {
    if catalog.dao_by_id(&id).is_none() {
        return Err(ApiError::DaoNotFound(id));
    }
    let proposals = catalog.proposals_by_dao(&id);
    debug!(dao_id = %id, proposals = proposals.len(), "Listed DAO proposals");
    Ok(Json(proposals))
}

async fn list_active_proposals(
    State(catalog): State<SharedCatalog>,
    query: Result<Query<ActiveProposalQuery>, QueryRejection>,
) -> Result<Json<Vec<Proposal>>, ApiError> {
    let Query(query) = query?;
    let proposals = catalog.active_proposals(query.dao_id.as_deref());
    debug!(dao_id = ?query.dao_id, proposals = proposals.len(), "Listed active proposals");
    Ok(Json(proposals))
}

async fn get_proposal(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Result<Json<Proposal>, ApiError> {
    catalog
        .proposal_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::ProposalNotFound(id))
}

async fn filter_options(State(catalog): State<SharedCatalog>) -> Json<FilterOptions> {
    Json(FilterOptions {
        categories: category_options(catalog.daos()),
        statuses: status_options(catalog.daos()),
    })
}
