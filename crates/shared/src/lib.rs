//! Shared types, errors, and configuration for Finreport.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types with HTTP status mapping
//! - Configuration management
//! - Log sanitization helpers

pub mod config;
pub mod error;
pub mod log;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use log::sanitize_for_logging;
