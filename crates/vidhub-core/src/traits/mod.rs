//! Core traits defined in `vidhub-core` and implemented by other crates.

pub mod thumbnails;

pub use thumbnails::ThumbnailStore;
