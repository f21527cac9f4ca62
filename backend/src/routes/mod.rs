mod categories;
mod docs;
mod health;
mod quizzes;

use aide::axum::{routing::get, ApiRouter};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/api/health", get(health::handler))
        .api_route("/api/categories", get(categories::list_categories))
        .api_route("/api/quiz", get(quizzes::list_quizzes))
        .api_route("/api/quiz/{id}", get(quizzes::get_quiz))
        .route("/api/quiz/", axum::routing::get(quizzes::get_quiz_without_id))
}
