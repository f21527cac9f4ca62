//! Environment configuration for different deployment stages

use std::env;
use std::num::ParseIntError;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use tracing::Level;

const DEFAULT_AWS_REGION: &str = "ap-northeast-1";
const DEFAULT_QUIZ_TABLE_NAME: &str = "Quiz";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:3000", "https://audio-slide-app.com"];

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Returns the endpoint URL to use for `DynamoDB`
    ///
    /// `DYNAMODB_ENDPOINT` wins when set. Otherwise production and staging use
    /// the regular AWS endpoints and development uses `LocalStack`.
    #[must_use]
    pub fn dynamodb_endpoint(&self) -> Option<String> {
        env::var("DYNAMODB_ENDPOINT")
            .ok()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .or_else(|| match self {
                Self::Production | Self::Staging => None,
                Self::Development => Some("http://localhost:4566".to_string()),
            })
    }

    /// Returns the AWS region, `AWS_REGION` or `ap-northeast-1`
    #[must_use]
    pub fn aws_region(&self) -> String {
        env::var("AWS_REGION")
            .ok()
            .filter(|region| !region.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string())
    }

    /// Returns the `DynamoDB` table holding quizzes
    #[must_use]
    pub fn quiz_table_name(&self) -> String {
        env::var("QUIZ_TABLE_NAME").unwrap_or_else(|_| DEFAULT_QUIZ_TABLE_NAME.to_string())
    }

    /// Returns the HTTP listen port, `PORT` or 8080
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number
    pub fn port(&self) -> Result<u16, ParseIntError> {
        env::var("PORT").map_or(Ok(DEFAULT_PORT), |port| port.trim().parse())
    }

    /// Browser origins allowed by CORS, from the comma-separated
    /// `CORS_ALLOWED_ORIGINS` variable
    #[must_use]
    pub fn cors_allowed_origins(&self) -> Vec<String> {
        let origins: Vec<String> = env::var("CORS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if origins.is_empty() {
            DEFAULT_CORS_ALLOWED_ORIGINS
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            origins
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .region(Region::new(self.aws_region()))
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.dynamodb_endpoint() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// Default log level when `RUST_LOG` is not set
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }
}
