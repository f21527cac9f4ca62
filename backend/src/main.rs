use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use backend::{quiz_service::QuizService, server, types::Environment};
use quiz_storage::{category::CategoryCatalog, quiz::QuizRepository, store::DynamoQuizStore};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    let env_filter = EnvFilter::builder()
        .with_default_directive(environment.tracing_level().into())
        .from_env_lossy();

    // Use JSON format for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt().json().with_env_filter(env_filter).init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter).init();
        }
    }

    tracing::info!("Starting Quiz Backend in {:?} environment", environment);

    let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
    let table_name = environment.quiz_table_name();
    let store = Arc::new(DynamoQuizStore::new(dynamodb_client, table_name.clone()));

    tracing::info!(
        endpoint = environment.dynamodb_endpoint().as_deref().unwrap_or("aws"),
        region = %environment.aws_region(),
        table = %table_name,
        "✅ Initialized DynamoDB quiz store"
    );

    let catalog = Arc::new(CategoryCatalog::default());
    let repository = QuizRepository::new(store, catalog.clone());
    let quiz_service = Arc::new(QuizService::new(repository, catalog));

    server::start(environment, quiz_service).await
}
