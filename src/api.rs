use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{Movie, MovieInput, ValidationError},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.store.list().await.map_err(AppError::store("Failed to load movies"))?;
    Ok(Json(movies.into_iter().map(Movie::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let input = read_body(body)?;
    tracing::debug!(?input, "create movie");

    let new = input.validate()?.into_new()?;
    let created =
        state.store.create(new).await.map_err(AppError::store("Failed to create movie"))?;

    tracing::info!(id = %created.id, title = %created.title, "movie created");
    Ok(Json(created.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let input = read_body(body)?;
    tracing::debug!(%id, ?input, "update movie");

    let patch = input.validate()?;
    if patch.is_empty() {
        return Err(ValidationError::Empty.into());
    }

    let updated =
        state.store.update(&id, patch).await.map_err(AppError::store("Failed to update movie"))?;
    Ok(Json(updated.into()))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    state.store.delete(&id).await.map_err(AppError::store("Failed to delete movie"))?;

    tracing::info!(%id, "movie deleted");
    Ok(Json(json!({ "success": true })))
}

fn read_body(body: Result<Json<MovieInput>, JsonRejection>) -> AppResult<MovieInput> {
    body.map(|Json(input)| input).map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected request body");
        AppError::BadRequest("Invalid data: malformed JSON body".to_string())
    })
}
