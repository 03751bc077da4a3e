//! S3-compatible object storage for uploaded media.

pub mod media;
pub mod store;

pub use media::{MediaKind, MAX_IMAGE_BYTES, MAX_VIDEO_BYTES};
pub use store::ObjectStore;
