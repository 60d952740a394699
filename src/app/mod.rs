//! HTTP layer: router, shared state and handlers.

pub mod error;
pub mod handlers;

use crate::core::ActivityStore;
use crate::utils::error::{ActivityError, Result};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Handler 共用的狀態，store 透過這裡注入
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ActivityStore>,
}

impl AppState {
    pub fn new<S: ActivityStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Create the API router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/activities", get(handlers::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(handlers::signup_for_activity),
        )
        .route(
            "/activities/:activity_name/participants/:email",
            delete(handlers::remove_participant),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// 在已綁定的 listener 上提供服務，直到 `shutdown` 完成
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ActivityError::ServerError {
            message: e.to_string(),
        })
}
