use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};

use crate::{
    AppState,
    error::{AppError, PageResult},
    models::{Movie, MovieForm, MovieInput},
    templates,
};

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

pub async fn catalog(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let movies = state.store.list().await.map_err(AppError::store("Failed to load movies"))?;
    let movies: Vec<Movie> = movies.into_iter().map(Movie::from).collect();
    Ok(Html(templates::catalog_page(&movies)))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MovieForm>,
) -> PageResult<Redirect> {
    let new = MovieInput::from(form).validate()?.into_new()?;
    let created =
        state.store.create(new).await.map_err(AppError::store("Failed to create movie"))?;

    tracing::info!(id = %created.id, title = %created.title, "movie added from catalog");
    Ok(Redirect::to("/catalog"))
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let movie = state.store.get(&id).await.map_err(AppError::store("Failed to load movie"))?;
    Ok(Html(templates::edit_page(&Movie::from(movie))))
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<MovieForm>,
) -> PageResult<Redirect> {
    let patch = MovieInput::from(form).validate()?;
    state.store.update(&id, patch).await.map_err(AppError::store("Failed to update movie"))?;
    Ok(Redirect::to("/catalog"))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> PageResult<Redirect> {
    state.store.delete(&id).await.map_err(AppError::store("Failed to delete movie"))?;
    Ok(Redirect::to("/catalog"))
}
