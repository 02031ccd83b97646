//! Acronym CRUD handlers.
//!
//! ## Endpoints
//! ```text
//! GET    /api/acronym            lookup by id, or filtered listing
//! POST   /api/acronym            create, responds with the new id
//! PUT    /api/acronym/{id}       full replace, {"ok": true}
//! DELETE /api/acronym/{id}       delete, {"ok": true}
//! ```
//!
//! Reads go through the response cache; every successful write clears
//! the whole `acronyms` namespace so no stale page survives a mutation.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use acronyms_core::validation::{
    validate_body, validate_id, validate_limit, validate_offset,
};
use acronyms_core::{AcronymBody, AcronymQuery, SortColumn};

use crate::cache::{CachedResponse, ResponseCache, ACRONYMS_NAMESPACE};
use crate::error::ApiError;
use crate::state::AppState;

/// Raw query parameters for `GET /api/acronym`.
///
/// Everything arrives as text and is parsed by hand so that a
/// malformed number surfaces as a 422 with a field name, not a
/// framework-level rejection.
#[derive(Debug, Default, Deserialize)]
pub struct AcronymParams {
    pub id: Option<String>,
    pub abbreviation: Option<String>,
    pub phrase: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub order: Option<String>,
}

fn parse_i64(field: &str, value: &str) -> Result<i64, ApiError> {
    value
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidArgument(format!("{field} must be an integer")))
}

/// Parses the path identifier for `PUT` and `DELETE`.
///
/// Taken as text so a non-numeric id is a 422 like every other bad
/// parameter, not a routing-level 400.
fn path_id(raw: &str) -> Result<i64, ApiError> {
    let id = parse_i64("id", raw)?;
    validate_id(id)?;
    Ok(id)
}

/// `GET /api/acronym`
///
/// With `id` set, every other parameter is ignored and the response is
/// the single matching acronym. Otherwise the filter/sort/paginate
/// contract applies and the response carries an `X-Total-Count` header
/// with the pre-pagination total.
pub async fn get_acronyms(
    State(state): State<AppState>,
    Query(params): Query<AcronymParams>,
) -> Result<Response, ApiError> {
    // Lookup branch: id takes priority over filters
    if let Some(raw_id) = params.id.as_deref() {
        let id = parse_i64("id", raw_id)?;
        validate_id(id)?;

        let key = ResponseCache::key(ACRONYMS_NAMESPACE, &format!("id={id}"));
        if let Some(hit) = state.cache.get(&key).await {
            return Ok(Json(hit.body).into_response());
        }

        let acronym = state
            .db
            .acronyms()
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("No acronym with id {id}")))?;

        let body = serde_json::to_value(&acronym)?;
        state
            .cache
            .put(
                key,
                CachedResponse {
                    body: body.clone(),
                    total_count: None,
                },
                state.settings.cache_ttl,
            )
            .await;

        return Ok(Json(body).into_response());
    }

    // Listing branch
    let limit = match params.limit.as_deref() {
        Some(raw) => parse_i64("limit", raw)?,
        None => state.settings.page_size,
    };
    validate_limit(limit)?;

    let offset = match params.offset.as_deref() {
        Some(raw) => parse_i64("offset", raw)?,
        None => 0,
    };
    validate_offset(offset)?;

    let order = params
        .order
        .as_deref()
        .map(str::parse::<SortColumn>)
        .transpose()?;

    let mut query = AcronymQuery::new(limit).offset(offset);
    if let Some(abbreviation) = params.abbreviation.as_deref() {
        query = query.abbreviation(abbreviation);
    }
    if let Some(phrase) = params.phrase.as_deref() {
        query = query.phrase(phrase);
    }
    if let Some(order) = order {
        query = query.order(order);
    }

    let key = ResponseCache::key(
        ACRONYMS_NAMESPACE,
        &format!(
            "abbreviation={:?}&phrase={:?}&limit={limit}&offset={offset}&order={:?}",
            query.abbreviation, query.phrase, query.order
        ),
    );
    if let Some(hit) = state.cache.get(&key).await {
        let total = hit.total_count.unwrap_or_default();
        return Ok(listing_response(total, hit.body));
    }

    let (page, total) = state.db.acronyms().search(&query).await?;
    let body = serde_json::to_value(&page)?;

    state
        .cache
        .put(
            key,
            CachedResponse {
                body: body.clone(),
                total_count: Some(total),
            },
            state.settings.cache_ttl,
        )
        .await;

    Ok(listing_response(total, body))
}

fn listing_response(total: i64, body: serde_json::Value) -> Response {
    ([("x-total-count", total.to_string())], Json(body)).into_response()
}

/// `POST /api/acronym`
///
/// Responds with the new row's id as a bare JSON integer.
pub async fn post_acronym(
    State(state): State<AppState>,
    Json(body): Json<AcronymBody>,
) -> Result<Json<i64>, ApiError> {
    validate_body(&body)?;

    let id = state.db.acronyms().insert(&body).await?;
    state.cache.clear_namespace(ACRONYMS_NAMESPACE).await;

    info!(id, abbreviation = %body.abbreviation, "Created acronym");
    Ok(Json(id))
}

/// `PUT /api/acronym/{id}`
///
/// Full replace. Replacing an id that does not exist succeeds without
/// touching any row; only a uniqueness collision with another row
/// fails, as a 409.
pub async fn put_acronym(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<AcronymBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = path_id(&raw_id)?;
    validate_body(&body)?;

    state.db.acronyms().replace(id, &body).await?;
    state.cache.clear_namespace(ACRONYMS_NAMESPACE).await;

    info!(id, "Replaced acronym");
    Ok(Json(json!({ "ok": true })))
}

/// `DELETE /api/acronym/{id}`
///
/// Deleting an id that does not exist is a 404.
pub async fn delete_acronym(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = path_id(&raw_id)?;

    state.db.acronyms().delete(id).await?;
    state.cache.clear_namespace(ACRONYMS_NAMESPACE).await;

    info!(id, "Deleted acronym");
    Ok(Json(json!({ "ok": true })))
}
