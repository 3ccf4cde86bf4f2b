//! Infrastructure layer: configuration, SQLite store, repositories.

pub mod config;
pub mod db;
pub mod error;
pub mod repository;

pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use error::StoreError;

#[cfg(test)]
mod integration_tests;
