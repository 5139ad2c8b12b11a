//! Axum HTTP server for the event photo gallery.
//!
//! This crate provides:
//! - The JSON API for the upload / gallery / bulk export flows
//! - The optional shared-PIN access gate
//! - Security headers, request IDs and request logging
//! - Static serving of the two-view frontend

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
