//! Client-side upload validation
//!
//! Files are checked before any network I/O: a rejected file never
//! produces a request.

use crate::error::{GraphbookError, Result};
use std::path::Path;

/// Upload size ceiling (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// File types the backend can parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// MIME type sent with the multipart part
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Short label used in list output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            // The backend parses legacy .doc through the same path as .docx.
            "docx" | "doc" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Validate a candidate upload by file name and size.
///
/// Returns the detected [`FileKind`] or an [`GraphbookError::InvalidInput`]
/// with a user-facing message.
pub fn validate_upload(file_name: &str, size: u64) -> Result<FileKind> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let kind = FileKind::from_extension(ext).ok_or_else(|| {
        GraphbookError::InvalidInput(format!(
            "unsupported file type '.{}': only PDF and DOCX can be uploaded",
            ext
        ))
    })?;

    if size > MAX_UPLOAD_BYTES {
        return Err(GraphbookError::InvalidInput(format!(
            "file is {:.1} MiB, exceeding the 10 MiB upload limit",
            size as f64 / (1024.0 * 1024.0)
        )));
    }

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_and_docx() {
        assert_eq!(validate_upload("report.pdf", 1024).unwrap(), FileKind::Pdf);
        assert_eq!(validate_upload("notes.DOCX", 1024).unwrap(), FileKind::Docx);
        assert_eq!(validate_upload("legacy.doc", 1024).unwrap(), FileKind::Docx);
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = validate_upload("image.png", 1024).unwrap_err();
        assert!(matches!(err, GraphbookError::InvalidInput(_)));
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(validate_upload("README", 1024).is_err());
    }

    #[test]
    fn rejects_oversized_file() {
        let err = validate_upload("big.pdf", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(matches!(err, GraphbookError::InvalidInput(_)));
    }

    #[test]
    fn boundary_size_is_accepted() {
        assert!(validate_upload("exact.pdf", MAX_UPLOAD_BYTES).is_ok());
    }
}
