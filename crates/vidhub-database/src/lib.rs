//! # vidhub-database
//!
//! SQLite database connection management and concrete repository
//! implementations for VidHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
