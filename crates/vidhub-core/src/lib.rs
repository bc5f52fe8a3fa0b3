//! # vidhub-core
//!
//! Core crate for VidHub. Contains configuration schemas, domain types,
//! the thumbnail storage trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other VidHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
