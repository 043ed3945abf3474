//! Local media storage for uploaded face videos.
//!
//! Videos land under `{media_root}/{event_code}/{file_name}`. File names
//! from the multipart upload are sanitized before they touch the
//! filesystem.

use std::path::Path;

/// Video container extensions accepted for face recordings (the mobile
/// recorder produces mp4 on Android, mov on iOS).
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov"];

/// Reduce an uploaded file name to a safe single path component.
///
/// Path separators and anything outside `[A-Za-z0-9._-]` collapse to `_`;
/// leading dots are stripped so the result can never be a dotfile or a
/// traversal component.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

/// Extract the lowercase extension of a file name, if any.
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Write an uploaded video under the event's media directory.
///
/// Returns the path relative to `media_root` that was written, for storage
/// on the guest row.
pub async fn store_video(
    media_root: &Path,
    event_code: &str,
    file_name: &str,
    data: &[u8],
) -> Result<String, std::io::Error> {
    let dir = media_root.join(event_code);
    tokio::fs::create_dir_all(&dir).await?;

    let path = dir.join(file_name);
    tokio::fs::write(&path, data).await?;

    Ok(format!("{event_code}/{file_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_file_name("Alice_video.mp4"), "Alice_video.mp4");
        assert_eq!(sanitize_file_name("clip-2.mov"), "clip-2.mov");
    }

    #[test]
    fn sanitize_collapses_separators_and_specials() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "_.._etc_passwd");
        assert_eq!(sanitize_file_name("a b?c.mp4"), "a_b_c.mp4");
        assert_eq!(sanitize_file_name("vidéo.mp4"), "vid_o.mp4");
    }

    #[test]
    fn sanitize_strips_leading_dots() {
        assert_eq!(sanitize_file_name(".hidden.mp4"), "hidden.mp4");
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension("clip.MP4").as_deref(), Some("mp4"));
        assert_eq!(file_extension("clip.mov").as_deref(), Some("mov"));
    }

    #[test]
    fn extension_absent_for_bare_names() {
        assert_eq!(file_extension("clip"), None);
        assert_eq!(file_extension(".mp4"), None);
        assert_eq!(file_extension("clip."), None);
    }

    #[tokio::test]
    async fn store_video_writes_under_event_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let relative = store_video(tmp.path(), "amber-brook-cedar-delta", "Alice_video.mp4", b"bytes")
            .await
            .unwrap();
        assert_eq!(relative, "amber-brook-cedar-delta/Alice_video.mp4");

        let written = std::fs::read(tmp.path().join(&relative)).unwrap();
        assert_eq!(written, b"bytes");
    }
}
