//! API reference served from the generated OpenAPI document

use aide::{axum::ApiRouter, openapi::OpenApi, scalar::Scalar};
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json,
};

use crate::types::{AppError, Environment};

const DOCS_PATH: &str = "/docs";
const OPENAPI_PATH: &str = "/openapi.json";

/// Scalar UI and the raw OpenAPI document, only reachable where
/// [`Environment::show_api_docs`] allows it
pub fn handler() -> ApiRouter {
    let scalar = Scalar::new(OPENAPI_PATH).with_title("Quiz Backend API");

    ApiRouter::new()
        .route(DOCS_PATH, scalar.axum_route())
        .route(OPENAPI_PATH, get(openapi_schema))
        .route_layer(middleware::from_fn(require_docs_enabled))
}

async fn require_docs_enabled(
    Extension(environment): Extension<Environment>,
    request: Request,
    next: Next,
) -> Response {
    if !environment.show_api_docs() {
        return AppError::not_found("route not found").into_response();
    }

    next.run(request).await
}

#[allow(clippy::unused_async)]
async fn openapi_schema(Extension(openapi): Extension<OpenApi>) -> Json<OpenApi> {
    Json(openapi)
}
