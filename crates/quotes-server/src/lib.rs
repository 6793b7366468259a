//! Quotes Server
//!
//! HTTP service for authors and the quotes attributed to them, stored in
//! SQLite. The binary in `main.rs` wires configuration and logging around
//! [`create_router`].

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use services::{AuthorService, QuoteService};
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub authors: Arc<AuthorService>,
    pub quotes: Arc<QuoteService>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        let db = Arc::new(db);
        Self {
            authors: Arc::new(AuthorService::new(db.clone())),
            quotes: Arc::new(QuoteService::new(db.clone())),
            db,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .route(
            "/authors",
            get(handlers::authors::list).post(handlers::authors::create),
        )
        .route("/authors/:id", get(handlers::authors::get))
        .route(
            "/authors/:id/quotes",
            get(handlers::quotes::list_for_author).post(handlers::quotes::create),
        )
        .route("/quotes", get(handlers::quotes::list))
        .route(
            "/quotes/:id",
            get(handlers::quotes::get)
                .put(handlers::quotes::edit)
                .delete(handlers::quotes::delete),
        )
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
