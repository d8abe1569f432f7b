pub mod api;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
}

impl AppState {
    pub async fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        let db = db::connect_and_migrate(&config).await?;
        Ok(Arc::new(Self { store: MovieStore::new(db) }))
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/catalog", get(routes::catalog).post(routes::add))
        .route("/catalog/{id}", post(routes::save))
        .route("/catalog/{id}/edit", get(routes::edit))
        .route("/catalog/{id}/delete", post(routes::remove))
        .route("/movies", get(api::list).post(api::create))
        .route("/movies/{id}", axum::routing::put(api::update).delete(api::delete))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
