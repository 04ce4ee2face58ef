//! Router assembly and the listening loop.

use std::sync::Arc;

use anyhow::Context;
use axum::extract::OriginalUri;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domain::Task;
use crate::error::ServiceError;
use crate::repository::{init_db, Repository, TaskRepository};
use crate::routes;
use crate::AppState;

/// Build the full router: task routes, JSON 404 fallback, CORS and tracing.
pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(routes::tasks::routes())
        .fallback(not_found)
        .layer(build_cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the database, bind the listener and serve until the process stops.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let conn = init_db(&config.database_path)
        .with_context(|| format!("failed to open {}", config.database_path.display()))?;
    tracing::info!(path = %config.database_path.display(), "Database connected");

    let task_repo: Arc<dyn Repository<Task>> = Arc::new(TaskRepository::new(conn));
    let state = AppState::new(task_repo).with_strict_titles(config.strict_titles);
    let router = build_router(state, &config.cors_allowed_origins);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, strict_titles = config.strict_titles, "Server is running");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    rolling_logger::info("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
}

async fn not_found(uri: OriginalUri) -> ServiceError {
    ServiceError::NotFound {
        message: format!("not found: {}", uri.0.path()),
    }
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}
