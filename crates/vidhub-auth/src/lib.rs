//! # vidhub-auth
//!
//! JWT access token creation and validation for the VidHub platform.
//!
//! Tokens are opaque bearer credentials issued elsewhere on the platform;
//! this crate validates them and extracts the authenticated user ID.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
