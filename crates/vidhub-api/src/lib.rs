//! # vidhub-api
//!
//! HTTP layer for VidHub: routing, request extractors, handlers, and the
//! mapping from domain errors to HTTP responses.
//!
//! Handlers stay thin. They validate input, call into repositories and the
//! thumbnail store held in [`AppState`], and hand back DTOs or raw bodies;
//! everything else lives in the lower crates.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
