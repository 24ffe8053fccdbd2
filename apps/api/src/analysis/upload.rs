//! Resume file decoding for multipart uploads.

use bytes::Bytes;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

impl ResumeFormat {
    /// Resolves the format from the part's content type, falling back to the
    /// file extension when the client sent none (or a generic octet-stream).
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Result<Self, AppError> {
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

        match mime.as_deref() {
            Some("application/pdf") => return Ok(ResumeFormat::Pdf),
            Some("text/plain") => return Ok(ResumeFormat::PlainText),
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "Unsupported resume content type '{other}'. Upload a PDF or plain-text file."
                )))
            }
            None => {}
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(ResumeFormat::Pdf),
            Some("txt") => Ok(ResumeFormat::PlainText),
            _ => Err(AppError::Validation(
                "Could not determine resume file type. Upload a PDF or plain-text file.".to_string(),
            )),
        }
    }
}

/// Extracts resume text from an uploaded file. PDF parsing runs on the
/// blocking pool.
pub async fn extract_resume_text(format: ResumeFormat, data: Bytes) -> Result<String, AppError> {
    let text = match format {
        ResumeFormat::PlainText => String::from_utf8(data.to_vec())
            .map_err(|_| AppError::Validation("Resume text is not valid UTF-8".to_string()))?,
        ResumeFormat::Pdf => {
            let size = data.len();
            let parsed = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                .await
                .map_err(|e| {
                    if e.is_panic() {
                        // The PDF parser panics on some malformed documents.
                        tracing::warn!("PDF extraction panicked ({size} bytes)");
                        AppError::UnprocessableEntity("Could not read the uploaded PDF".to_string())
                    } else {
                        AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
                    }
                })?;
            let text = parsed.map_err(|e| {
                tracing::warn!("PDF extraction error ({size} bytes): {e:?}");
                AppError::UnprocessableEntity("Could not read the uploaded PDF".to_string())
            })?;
            tracing::debug!(bytes = size, chars = text.len(), "Extracted PDF text");
            text
        }
    };

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract text from the uploaded resume".to_string(),
        ));
    }

    Ok(text)
}
