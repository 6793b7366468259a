//! Author handlers

use crate::error::ApiError;
use crate::extractors::Payload;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use quotes_types::{Author, NewAuthor};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Author>>, ApiError> {
    Ok(Json(state.authors.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(req): Payload<NewAuthor>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    let author = state.authors.create(req).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Author>, ApiError> {
    Ok(Json(state.authors.get(id).await?))
}
