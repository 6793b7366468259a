//! Quote handlers

use crate::error::ApiError;
use crate::extractors::Payload;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use quotes_types::{NewQuote, Quote, QuotePatch};
use serde_json::{Map, Value};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, ApiError> {
    Ok(Json(state.quotes.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Quote>, ApiError> {
    Ok(Json(state.quotes.get(id).await?))
}

pub async fn list_for_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    Ok(Json(state.quotes.list_for_author(author_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    Payload(req): Payload<NewQuote>,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let quote = state.quotes.create(author_id, req).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}

/// The body is taken as a raw field map so a rejected key can be named in
/// the response.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(fields): Payload<Map<String, Value>>,
) -> Result<Json<Quote>, ApiError> {
    let patch = QuotePatch::from_fields(fields)?;
    Ok(Json(state.quotes.edit(id, patch).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String, ApiError> {
    state.quotes.delete(id).await?;
    Ok(format!("Quote with id {} is deleted.", id))
}
