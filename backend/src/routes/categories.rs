use std::sync::Arc;

use axum::{Extension, Json};
use quiz_storage::category::Category;

use crate::quiz_service::QuizService;

/// List quiz categories
///
/// Returns every category served by this deployment, in display order.
#[allow(clippy::unused_async)]
pub async fn list_categories(
    Extension(quiz_service): Extension<Arc<QuizService>>,
) -> Json<Vec<Category>> {
    Json(quiz_service.categories().to_vec())
}
