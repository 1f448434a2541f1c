//! adapter-http - Remote retention policy API over HTTP
//!
//! Provides the JSON:API client for the platform's `/api/v2` with:
//! - Organization and workspace scoped policy endpoints
//! - Bearer token authentication
//! - Automatic error mapping to AppError

pub mod client;
pub mod config;
pub mod error;
pub mod jsonapi;

pub use client::TfeHttpClient;
pub use config::{HttpApiConfig, HttpApiConfigBuilder};
pub use error::{map_http_error, map_transport_error};
