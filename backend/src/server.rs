use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{
    http::{header, HeaderValue, Method},
    Extension, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::quiz_service::QuizService;
use crate::routes;
use crate::types::{AppError, Environment};

/// Builds the application router with all layers and dependencies attached
#[must_use]
pub fn router(environment: Environment, quiz_service: Arc<QuizService>) -> Router {
    let mut openapi = OpenApi::default();
    let cors = cors_layer(&environment);

    routes::handler()
        .finish_api(&mut openapi)
        .fallback(route_not_found)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(quiz_service))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(environment: Environment, quiz_service: Arc<QuizService>) -> anyhow::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], environment.port()?));
    let router = router(environment, quiz_service);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 Quiz Backend started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

fn cors_layer(environment: &Environment) -> CorsLayer {
    let origins = environment
        .cors_allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("Ignoring invalid CORS origin {origin:?}: {err}");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[allow(clippy::unused_async)]
async fn route_not_found() -> AppError {
    AppError::not_found("route not found")
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down Quiz Backend...");
}
