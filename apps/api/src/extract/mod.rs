//! Resume text extraction.
//!
//! Uploads arrive as raw bytes tagged with a declared [`DocumentKind`].
//! Extraction either yields plain text or an [`ExtractError`]; the ranking
//! handler converts errors into per-file warnings and an empty text, so a
//! bad file never fails the batch.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::path::Path;

use bytes::Bytes;
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Closed set of supported resume formats. Anything else is rejected at
/// upload time rather than being guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves the kind from the multipart part's declared content type,
    /// falling back to the filename extension when the client sent no usable
    /// type (browsers commonly declare `application/octet-stream`).
    /// Returns `None` for anything that is not PDF or DOCX.
    pub fn from_upload(content_type: Option<&str>, filename: &str) -> Option<DocumentKind> {
        match content_type.map(|ct| ct.to_ascii_lowercase()).as_deref() {
            Some(PDF_MIME) => Some(DocumentKind::Pdf),
            Some(DOCX_MIME) => Some(DocumentKind::Docx),
            Some("application/octet-stream") | None => Self::from_extension(filename),
            Some(_) => None,
        }
    }

    fn from_extension(filename: &str) -> Option<DocumentKind> {
        let ext = Path::new(filename).extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("pdf") {
            Some(DocumentKind::Pdf)
        } else if ext.eq_ignore_ascii_case("docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Docx => write!(f, "DOCX"),
        }
    }
}

/// One uploaded resume: filename, raw bytes, declared kind.
/// Lives only for the duration of a single ranking request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Bytes,
    pub kind: DocumentKind,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file was declared {0} but its signature does not match")]
    SignatureMismatch(DocumentKind),

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("DOCX parse error: {0}")]
    Docx(String),
}

/// Extracts plain text from a resume's raw bytes.
///
/// The declared kind is checked against the file signature first, so a
/// mislabelled upload fails cleanly instead of being fed to the wrong parser.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => {
            if !bytes.starts_with(b"%PDF-") {
                return Err(ExtractError::SignatureMismatch(kind));
            }
            pdf::extract_pdf(bytes)
        }
        DocumentKind::Docx => {
            // DOCX is a ZIP container; "PK" is the local file header magic.
            if !bytes.starts_with(b"PK") {
                return Err(ExtractError::SignatureMismatch(kind));
            }
            docx::extract_docx(bytes)
        }
    }
}
