//! Repository implementations for VidHub entities.

pub mod video;

pub use video::VideoRepository;
