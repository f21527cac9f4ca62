use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use backend::{quiz_service::QuizService, server, types::Environment};
use quiz_storage::{
    category::CategoryCatalog,
    quiz::{Quiz, QuizRepository},
    store::MemoryQuizStore,
};
use tower::ServiceExt;

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Router wired to an in-memory quiz store
pub struct TestSetup {
    pub router: Router,
    pub environment: Environment,
    pub store: Arc<MemoryQuizStore>,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with_environment(Environment::Development)
    }

    pub fn with_environment(environment: Environment) -> Self {
        setup_test_env();

        let store = Arc::new(MemoryQuizStore::new());
        let catalog = Arc::new(CategoryCatalog::default());
        let repository = QuizRepository::new(store.clone(), catalog.clone());
        let quiz_service = Arc::new(QuizService::new(repository, catalog));

        let router = server::router(environment.clone(), quiz_service);

        Self {
            router,
            environment,
            store,
        }
    }

    /// Stores `count` quizzes in `category` and returns them
    pub fn seed_quizzes(&self, category: &str, count: usize) -> Vec<Quiz> {
        (0..count)
            .map(|i| {
                let quiz = create_quiz(&format!("{category}-{i}"), category);
                self.store.insert(&quiz).expect("Failed to insert quiz");
                quiz
            })
            .collect()
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_request(
        &self,
        request: Request<Body>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

/// Creates a quiz with predictable content derived from its id
pub fn create_quiz(id: &str, category: &str) -> Quiz {
    Quiz::new(
        id,
        format!("https://cdn.example.com/{category}/{id}.png"),
        format!("https://cdn.example.com/audio/{id}.mp3"),
        format!("answer-{id}"),
        vec![
            format!("answer-{id}"),
            "wrong-1".to_string(),
            "wrong-2".to_string(),
            "wrong-3".to_string(),
        ],
        category,
        format!("Explanation for {id}"),
    )
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
