//! Quiz Backend service

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

/// Request validation and orchestration
pub mod quiz_service;

/// HTTP routes
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Configuration, errors and extractors
pub mod types;
