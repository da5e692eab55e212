use axum::extract::Multipart;

use crate::errors::AppError;
use crate::llm_client::InlineImage;

/// Multipart field carrying the photo.
pub const FILE_FIELD: &str = "file";

const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Reads the `file` field of an upload. Other fields are skipped.
pub async fn read_image_upload(mut multipart: Multipart) -> Result<InlineImage, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = resolve_content_type(field.content_type())?;
        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }

        return Ok(InlineImage { content_type, data });
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}

/// Missing content type is treated as JPEG; anything not `image/*` is rejected.
fn resolve_content_type(declared: Option<&str>) -> Result<String, AppError> {
    match declared.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_CONTENT_TYPE.to_string()),
        Some(ct) if ct.to_ascii_lowercase().starts_with("image/") => Ok(ct.to_ascii_lowercase()),
        Some(ct) => Err(AppError::Validation(format!(
            "expected an image upload, got '{ct}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_defaults_to_jpeg() {
        assert_eq!(resolve_content_type(None).unwrap(), "image/jpeg");
        assert_eq!(resolve_content_type(Some("  ")).unwrap(), "image/jpeg");
    }

    #[test]
    fn test_content_type_accepts_images() {
        assert_eq!(resolve_content_type(Some("Image/PNG")).unwrap(), "image/png");
    }

    #[test]
    fn test_content_type_rejects_non_images() {
        assert!(matches!(
            resolve_content_type(Some("application/pdf")),
            Err(AppError::Validation(_))
        ));
    }
}
