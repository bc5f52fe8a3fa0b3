//! Core type definitions used across the VidHub workspace.

pub mod thumbnail;
pub mod video;

pub use thumbnail::Thumbnail;
pub use video::{CreateVideo, Video};
