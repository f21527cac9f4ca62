//! Quiz storage for the quiz backend
//!
//! This crate owns the quiz and category records and the data path that reads
//! them from the partitioned `DynamoDB` table.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod category;
pub mod quiz;
pub mod store;
