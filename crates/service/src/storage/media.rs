//! Upload validation: media kind detection, size limits and object keys.

use uuid::Uuid;

use crate::errors::ServiceError;

/// Images up to 10 MiB.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
/// Videos up to 50 MiB (slider uploads only).
pub const MAX_VIDEO_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    pub fn max_bytes(&self) -> usize {
        match self {
            MediaKind::Image => MAX_IMAGE_BYTES,
            MediaKind::Video => MAX_VIDEO_BYTES,
        }
    }
}

/// Classify an upload by content type. `allow_video` is set only for slider
/// uploads; room image uploads reject videos outright.
pub fn classify(content_type: &str, allow_video: bool) -> Result<MediaKind, ServiceError> {
    let ct = content_type.to_ascii_lowercase();
    match ct.as_str() {
        "image/jpeg" | "image/jpg" | "image/png" | "image/webp" | "image/gif" => {
            Ok(MediaKind::Image)
        }
        "video/mp4" | "video/webm" | "video/ogg" if allow_video => Ok(MediaKind::Video),
        "video/mp4" | "video/webm" | "video/ogg" => Err(ServiceError::Validation(
            "video uploads are not allowed here".into(),
        )),
        _ => Err(ServiceError::Validation(format!(
            "unsupported content type: {}",
            content_type
        ))),
    }
}

pub fn check_size(kind: MediaKind, len: usize) -> Result<(), ServiceError> {
    if len == 0 {
        return Err(ServiceError::Validation("empty file".into()));
    }
    if len > kind.max_bytes() {
        return Err(ServiceError::Validation(format!(
            "{} exceeds the {} MiB limit",
            kind.as_str(),
            kind.max_bytes() / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Extension derived from the original filename, falling back to the content
/// type's subtype.
pub fn extension(filename: &str, content_type: &str) -> String {
    let from_name = filename.rsplit('.').next().filter(|ext| {
        !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric())
    });
    match from_name {
        Some(ext) if !filename.starts_with('.') && filename.contains('.') => {
            ext.to_ascii_lowercase()
        }
        _ => content_type
            .rsplit('/')
            .next()
            .unwrap_or("bin")
            .to_ascii_lowercase(),
    }
}

/// Object key: `{prefix}/{uuid}.{ext}`. The prefix is the caller's folder
/// path, e.g. `rooms/{room_id}` or `slider/{folder}`.
pub fn object_key(prefix: &str, filename: &str, content_type: &str) -> String {
    format!(
        "{}/{}.{}",
        prefix.trim_matches('/'),
        Uuid::new_v4(),
        extension(filename, content_type)
    )
}

/// Folder names come from user input; keep them to a safe charset so they
/// cannot escape the upload prefix.
pub fn sanitize_folder(folder: &str) -> String {
    let cleaned: String = folder
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if cleaned.is_empty() {
        "default".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_images_and_videos() {
        assert_eq!(classify("image/png", false).unwrap(), MediaKind::Image);
        assert_eq!(classify("image/JPEG", true).unwrap(), MediaKind::Image);
        assert_eq!(classify("video/mp4", true).unwrap(), MediaKind::Video);
        assert!(classify("video/mp4", false).is_err());
        assert!(classify("application/pdf", true).is_err());
    }

    #[test]
    fn size_limits_enforced() {
        assert!(check_size(MediaKind::Image, 1).is_ok());
        assert!(check_size(MediaKind::Image, MAX_IMAGE_BYTES).is_ok());
        assert!(check_size(MediaKind::Image, MAX_IMAGE_BYTES + 1).is_err());
        assert!(check_size(MediaKind::Video, MAX_VIDEO_BYTES).is_ok());
        assert!(check_size(MediaKind::Video, MAX_VIDEO_BYTES + 1).is_err());
        assert!(check_size(MediaKind::Image, 0).is_err());
    }

    #[test]
    fn extension_prefers_filename() {
        assert_eq!(extension("photo.JPG", "image/jpeg"), "jpg");
        assert_eq!(extension("archive.tar.gz", "application/gzip"), "gz");
        assert_eq!(extension("noext", "image/png"), "png");
        assert_eq!(extension(".hidden", "image/webp"), "webp");
    }

    #[test]
    fn object_keys_are_prefixed() {
        let key = object_key("rooms/abc", "a.png", "image/png");
        assert!(key.starts_with("rooms/abc/"));
        assert!(key.ends_with(".png"));
    }

    #[test]
    fn folder_names_sanitized() {
        assert_eq!(sanitize_folder("hero-images"), "hero-images");
        assert_eq!(sanitize_folder("../../etc"), "etc");
        assert_eq!(sanitize_folder("///"), "default");
        assert_eq!(sanitize_folder(""), "default");
    }
}
