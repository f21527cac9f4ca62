pub mod environment;
pub mod error;
mod extractors;

pub use environment::Environment;
pub use error::{AppError, ErrorCode};
pub use extractors::QueryParams;
