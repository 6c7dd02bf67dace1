//! Common utilities shared across the marketplace services.
//!
//! This crate provides:
//! - Configuration loading (signing secret)
//! - Option helpers mapping absence to domain errors

pub mod config;
pub mod error;

pub use config::{AuthConfig, TOKEN_SECRET_VARS};
pub use error::{ConfigError, OptionExt};
