//! Embedded HTTP server exposing the flashcard API
//!
//! Request handlers validate input, resolve the caller's device id and
//! delegate to the storage layer; the stores behind the shared state
//! are the only mutable resource. Concurrent writes to the same record
//! are last-write-wins.

mod auth;
mod billing;
mod device;
mod error;
mod goals;
mod items;
mod review;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::goals::GoalStorage;
use crate::items::ItemStorage;
use crate::storage::Result as StorageResult;

/// Server state shared across requests
#[derive(Clone)]
pub struct AppState {
    pub goals: Arc<Mutex<GoalStorage>>,
    pub items: Arc<Mutex<ItemStorage>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> StorageResult<Self> {
        Ok(Self {
            goals: Arc::new(Mutex::new(GoalStorage::new(data_dir.clone())?)),
            items: Arc::new(Mutex::new(ItemStorage::new(data_dir)?)),
        })
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/anon/login", post(auth::login))
        .route("/goals", get(goals::list_goals).post(goals::create_goal))
        .route(
            "/goals/{id}",
            get(goals::get_goal)
                .put(goals::update_goal)
                .delete(goals::delete_goal),
        )
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route("/review/{id}", post(review::review_item))
        .route("/session/today", get(review::today_session))
        .route("/session/stats", get(review::session_stats))
        .route("/billing/checkout", post(billing::create_checkout))
        .route("/billing/webhook", post(billing::webhook))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the API until interrupted
pub async fn serve(state: AppState, bind: &str) -> anyhow::Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(bind).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    log::info!("Shutting down");
}
