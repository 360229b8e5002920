//! Document extraction: uploaded resume bytes → plain text.
//!
//! Only the request boundary sees bytes; the analysis pipeline receives the
//! `ExtractedText` produced here. Decoders are blocking and may panic on malformed
//! input, so callers run `extract_text` on the blocking pool (see `extract_blocking`).

mod docx;

use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::analysis::ExtractedText;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type '{0}'. Please upload a PDF, DOCX or TXT file.")]
    UnsupportedFormat(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("Document extraction timed out after {0:?}")]
    Timeout(Duration),

    #[error("Document decoder crashed: {0}")]
    Crashed(String),
}

/// Upload as received from the client.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub declared_media_type: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Detects the format from the file extension, falling back to the declared
    /// media type when the name has no recognized extension.
    pub fn detect(file_name: Option<&str>, media_type: Option<&str>) -> Result<Self, ExtractError> {
        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        if let Some(kind) = extension.as_deref().and_then(Self::from_extension) {
            return Ok(kind);
        }
        if let Some(kind) = media_type.and_then(Self::from_media_type) {
            return Ok(kind);
        }

        let label = file_name.or(media_type).unwrap_or("unknown").to_string();
        Err(ExtractError::UnsupportedFormat(label))
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" | "text" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "application/pdf" => Some(DocumentKind::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DocumentKind::Docx)
            }
            "text/plain" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// Decodes `doc` into resume text. Blocking.
pub fn extract_text(doc: &RawDocument) -> Result<ExtractedText, ExtractError> {
    let kind = DocumentKind::detect(doc.file_name.as_deref(), doc.declared_media_type.as_deref())?;

    let raw = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&doc.bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        DocumentKind::Docx => docx::extract_text(&doc.bytes)?,
        DocumentKind::PlainText => String::from_utf8_lossy(&doc.bytes).into_owned(),
    };

    let content = sanitize(&raw);
    debug!(?kind, bytes = doc.bytes.len(), chars = content.len(), "extracted resume text");
    Ok(ExtractedText::resume(content))
}

/// Runs `extract_text` on the blocking pool with a deadline.
pub async fn extract_blocking(
    doc: RawDocument,
    timeout: Duration,
) -> Result<ExtractedText, ExtractError> {
    let task = tokio::task::spawn_blocking(move || extract_text(&doc));
    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(ExtractError::Crashed(join_error.to_string())),
        Err(_) => Err(ExtractError::Timeout(timeout)),
    }
}

/// Drops control characters (keeping whitespace) and U+FFFD left behind by lossy
/// decoding, so the result is plain UTF-8 text.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\u{FFFD}')
        .map(|c| if c.is_control() && !c.is_whitespace() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(bytes: &'static [u8], name: Option<&str>, media: Option<&str>) -> RawDocument {
        RawDocument {
            bytes: Bytes::from_static(bytes),
            declared_media_type: media.map(str::to_string),
            file_name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(DocumentKind::detect(Some("cv.PDF"), None).unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect(Some("cv.docx"), None).unwrap(), DocumentKind::Docx);
        assert_eq!(
            DocumentKind::detect(Some("resume.final.txt"), None).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_extension_wins_over_media_type() {
        let kind = DocumentKind::detect(Some("cv.docx"), Some("application/octet-stream")).unwrap();
        assert_eq!(kind, DocumentKind::Docx);
    }

    #[test]
    fn test_detect_falls_back_to_media_type() {
        let kind = DocumentKind::detect(Some("resume"), Some("application/pdf")).unwrap();
        assert_eq!(kind, DocumentKind::Pdf);
        let kind = DocumentKind::detect(None, Some("text/plain; charset=utf-8")).unwrap();
        assert_eq!(kind, DocumentKind::PlainText);
    }

    #[test]
    fn test_unsupported_format() {
        let err = DocumentKind::detect(Some("resume.doc"), Some("application/msword")).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ref name) if name == "resume.doc"));
        assert!(DocumentKind::detect(None, None).is_err());
    }

    #[test]
    fn test_plain_text_is_sanitized() {
        let doc = raw(b"Rust\x00 developer\x07\nTokio \xff", Some("cv.txt"), None);
        let text = extract_text(&doc).unwrap();
        assert_eq!(text.content, "Rust  developer \nTokio ");
    }

    #[tokio::test]
    async fn test_garbage_pdf_fails_the_request_only() {
        let doc = raw(b"definitely not a pdf", Some("cv.pdf"), None);
        let result = extract_blocking(doc, Duration::from_secs(5)).await;
        assert!(matches!(
            result,
            Err(ExtractError::Pdf(_)) | Err(ExtractError::Crashed(_))
        ));
    }

    #[tokio::test]
    async fn test_extract_blocking_returns_text() {
        let doc = raw(b"Experienced Rust developer", Some("cv.txt"), None);
        let text = extract_blocking(doc, Duration::from_secs(5)).await.unwrap();
        assert_eq!(text.content, "Experienced Rust developer");
    }
}
