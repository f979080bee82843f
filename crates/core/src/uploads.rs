//! Acceptance rules for uploaded images (profile pictures, product media).

use image::ImageFormat;

use crate::error::CoreError;

/// Per-file size cap (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Maximum gallery images attached to one product.
pub const MAX_GALLERY_IMAGES: usize = 5;

/// Accepted file extensions / MIME subtypes.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["jpeg", "jpg", "png", "gif"];

/// Lower-cased extension of `filename`, if it has one.
pub fn extension_of(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check an uploaded file and return the extension it should be stored under.
///
/// The extension and the declared MIME type must both name an allowed type,
/// and the leading bytes must sniff as PNG, JPEG or GIF.
pub fn check_image(
    field: &str,
    filename: &str,
    content_type: Option<&str>,
    data: &[u8],
) -> Result<String, CoreError> {
    let rejected = || {
        CoreError::Validation(format!(
            "{field}: Only image files are allowed! ({})",
            ALLOWED_IMAGE_TYPES.join(", ")
        ))
    };

    let ext = extension_of(filename)
        .filter(|ext| ALLOWED_IMAGE_TYPES.contains(&ext.as_str()))
        .ok_or_else(rejected)?;

    let mime_ok = content_type
        .and_then(|ct| ct.split(';').next())
        .and_then(|ct| ct.trim().strip_prefix("image/"))
        .is_some_and(|subtype| ALLOWED_IMAGE_TYPES.contains(&subtype.to_ascii_lowercase().as_str()));
    if !mime_ok {
        return Err(rejected());
    }

    if data.len() > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation(format!(
            "{field}: file exceeds the {} MB limit",
            MAX_IMAGE_BYTES / (1024 * 1024)
        )));
    }

    match image::guess_format(data) {
        Ok(ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif) => Ok(ext),
        _ => Err(rejected()),
    }
}

/// Name under which an accepted upload is written to disk.
pub fn stored_file_name(ext: &str, unix_millis: i64, unique: &str) -> String {
    format!("{unix_millis}-{unique}.{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const GIF_MAGIC: &[u8] = b"GIF89a\x01\0\x01\0";

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension_of("Photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("noext"), None);
        assert_eq!(extension_of(".png"), None);
    }

    #[test]
    fn accepts_matching_png() {
        let ext = check_image("thumbnail", "a.png", Some("image/png"), PNG_MAGIC).unwrap();
        assert_eq!(ext, "png");
    }

    #[test]
    fn accepts_gif_with_charset_suffix() {
        assert!(check_image("images", "b.gif", Some("image/gif; charset=binary"), GIF_MAGIC).is_ok());
    }

    #[test]
    fn rejects_wrong_extension_or_mime() {
        assert!(check_image("f", "a.exe", Some("image/png"), PNG_MAGIC).is_err());
        assert!(check_image("f", "a.png", Some("application/pdf"), PNG_MAGIC).is_err());
        assert!(check_image("f", "a.png", None, PNG_MAGIC).is_err());
    }

    #[test]
    fn rejects_content_that_is_not_an_image() {
        assert!(check_image("f", "a.png", Some("image/png"), b"<?php echo 1; ?>").is_err());
    }

    #[test]
    fn rejects_oversized_files() {
        let mut data = PNG_MAGIC.to_vec();
        data.resize(MAX_IMAGE_BYTES + 1, 0);
        let err = check_image("f", "a.png", Some("image/png"), &data).unwrap_err();
        assert!(err.to_string().contains("5 MB"));
    }

    #[test]
    fn stored_name_keeps_extension() {
        assert_eq!(stored_file_name("png", 1700000000000, "abc"), "1700000000000-abc.png");
    }
}
