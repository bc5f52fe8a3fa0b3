//! # vidhub-storage
//!
//! Thumbnail store implementations for VidHub: an in-memory map and a
//! local filesystem store backing the public assets directory.

pub mod media_type;
pub mod providers;

pub use providers::{LocalThumbnailStore, MemoryThumbnailStore, from_config};
