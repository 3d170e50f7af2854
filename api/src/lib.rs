pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

pub fn app(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(routes::foods::food_routes())
        .merge(routes::favorites::favorite_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
