//! Multipart form reception and image storage.
//!
//! Forms are read fully into memory (text fields plus image parts, each capped
//! at [`MAX_IMAGE_BYTES`]) so that every field can be validated before anything
//! is written to disk. Accepted images are stored under the configured upload
//! directory and referenced by their public `/images/...` path.

use std::collections::HashMap;
use std::path::Path;

use axum::body::Bytes;
use axum::extract::multipart::{Field, Multipart};
use shopshare_core::error::CoreError;
use shopshare_core::uploads::{check_image, stored_file_name, MAX_IMAGE_BYTES};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// URL prefix uploaded files are served under.
pub const PUBLIC_PREFIX: &str = "/images";

/// A file part received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// An uploaded file that passed [`check_image`], with its storage extension.
#[derive(Debug, Clone)]
pub struct AcceptedImage {
    pub file: UploadedFile,
    pub ext: String,
}

/// A parsed multipart form.
#[derive(Debug, Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub files: Vec<UploadedFile>,
}

impl FormData {
    /// Files received under `field`, in arrival order.
    pub fn files_named<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a UploadedFile> {
        self.files.iter().filter(move |f| f.field == field)
    }

    /// Take a text field out of the form.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }
}

/// Read a whole multipart body.
///
/// Parts named in `file_fields` that carry a filename are collected as files;
/// everything else is read as text. Unknown file parts are rejected.
pub async fn read_form(multipart: &mut Multipart, file_fields: &[&str]) -> AppResult<FormData> {
    let mut form = FormData::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name.is_empty() {
            continue;
        }

        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                if !file_fields.contains(&name.as_str()) {
                    return Err(AppError::Core(CoreError::Validation(format!(
                        "Unexpected file field '{name}'"
                    ))));
                }
                let content_type = field.content_type().map(str::to_string);
                let data = read_capped(field, &name).await?;
                form.files.push(UploadedFile {
                    field: name,
                    file_name,
                    content_type,
                    data,
                });
            }
            None => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                form.fields.insert(name, text);
            }
        }
    }

    Ok(form)
}

/// Buffer a file part, failing as soon as it exceeds the per-file cap.
async fn read_capped(mut field: Field<'_>, name: &str) -> AppResult<Bytes> {
    let mut buf = Vec::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if buf.len() + chunk.len() > MAX_IMAGE_BYTES {
            return Err(AppError::Core(CoreError::Validation(format!(
                "{name}: file exceeds the {} MB limit",
                MAX_IMAGE_BYTES / (1024 * 1024)
            ))));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(Bytes::from(buf))
}

/// Run the image acceptance rules over `file`.
pub fn accept_image(file: &UploadedFile) -> Result<AcceptedImage, CoreError> {
    let ext = check_image(
        &file.field,
        &file.file_name,
        file.content_type.as_deref(),
        &file.data,
    )?;
    Ok(AcceptedImage {
        file: file.clone(),
        ext,
    })
}

/// Write an accepted image into `dir` and return its public path.
pub async fn store_image(dir: &Path, image: &AcceptedImage) -> AppResult<String> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let name = stored_file_name(
        &image.ext,
        chrono::Utc::now().timestamp_millis(),
        &Uuid::new_v4().simple().to_string(),
    );
    tokio::fs::write(dir.join(&name), &image.file.data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(field = %image.file.field, stored = %name, bytes = image.file.data.len(), "Stored upload");
    Ok(format!("{PUBLIC_PREFIX}/{name}"))
}

/// Store every image in order, returning their public paths.
///
/// If one write fails, the files already written by this call are removed.
pub async fn store_images(dir: &Path, images: &[AcceptedImage]) -> AppResult<Vec<String>> {
    let mut stored = Vec::with_capacity(images.len());
    for image in images {
        match store_image(dir, image).await {
            Ok(path) => stored.push(path),
            Err(err) => {
                discard_uploads(dir, &stored).await;
                return Err(err);
            }
        }
    }
    Ok(stored)
}

/// Remove previously stored uploads by public path.
///
/// Used when a request fails after its images were written. Paths outside
/// [`PUBLIC_PREFIX`] are skipped. Failures are logged, not returned.
pub async fn discard_uploads(dir: &Path, public_paths: &[String]) {
    for public in public_paths {
        let Some(name) = public
            .strip_prefix(PUBLIC_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| !name.is_empty() && !name.contains(['/', '\\']))
        else {
            continue;
        };
        match tokio::fs::remove_file(dir.join(name)).await {
            Ok(()) => tracing::info!(stored = %name, "Discarded upload"),
            Err(e) => tracing::warn!(stored = %name, error = %e, "Failed to discard upload"),
        }
    }
}
