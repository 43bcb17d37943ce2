//! Document text extraction.
//!
//! `DocumentLoader` is the entry point: it checks that the file exists and is
//! within the size limit, reads it once, and hands the bytes to the backend
//! chosen by file extension. Backends implement `DocumentExtractor`.

pub mod pdf;
pub mod plain;
mod stdout_guard;

use std::path::Path;

use tracing::debug;

use crate::errors::MatchError;

pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

/// Extensions handled by `PlainTextExtractor`. Anything else is treated as PDF.
const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Turns a document into its text. Implement this to add a format.
pub trait DocumentExtractor: Send + Sync {
    /// Extracts text from the already-read document bytes.
    /// `path` is only used for error messages.
    fn extract(&self, path: &Path, bytes: &[u8]) -> Result<String, MatchError>;
}

/// Validates, reads and dispatches a document to its extractor.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    max_bytes: u64,
}

impl DocumentLoader {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    /// Returns the document's text. Fails if the file is missing, too large,
    /// unreadable, or contains no text.
    pub fn load_text(&self, path: &Path) -> Result<String, MatchError> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => MatchError::DocumentNotFound(path.to_path_buf()),
            _ => MatchError::DocumentUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;

        if !metadata.is_file() {
            return Err(MatchError::DocumentUnreadable {
                path: path.to_path_buf(),
                reason: "not a regular file".to_string(),
            });
        }
        if metadata.len() > self.max_bytes {
            return Err(MatchError::DocumentTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: self.max_bytes,
            });
        }

        let bytes = std::fs::read(path).map_err(|e| MatchError::DocumentUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let text = extractor_for(path).extract(path, &bytes)?;
        if text.trim().is_empty() {
            return Err(MatchError::DocumentEmptyText(path.to_path_buf()));
        }

        debug!("Extracted {} chars from {}", text.len(), path.display());
        Ok(text)
    }
}

fn extractor_for(path: &Path) -> &'static dyn DocumentExtractor {
    let is_plain = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PLAIN_TEXT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false);

    if is_plain {
        &PlainTextExtractor
    } else {
        &PdfExtractor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_DOCUMENT_BYTES;
    use std::io::Write;

    fn loader() -> DocumentLoader {
        DocumentLoader::new(DEFAULT_MAX_DOCUMENT_BYTES)
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let err = loader().load_text(&path).unwrap_err();
        assert!(matches!(err, MatchError::DocumentNotFound(_)));
        assert!(err.to_string().contains("resume.pdf"));
    }

    #[test]
    fn test_plain_text_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "resume.txt", b"Proficient in Python, Java, and Docker");
        let text = loader().load_text(&path).unwrap();
        assert!(text.contains("Docker"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "RESUME.TXT", b"Rust");
        assert_eq!(loader().load_text(&path).unwrap(), "Rust");
    }

    #[test]
    fn test_blank_document_is_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "resume.txt", b"  \n\t ");
        let err = loader().load_text(&path).unwrap_err();
        assert!(matches!(err, MatchError::DocumentEmptyText(_)));
    }

    #[test]
    fn test_oversized_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "resume.txt", b"0123456789abcdef");
        let err = DocumentLoader::new(8).load_text(&path).unwrap_err();
        match err {
            MatchError::DocumentTooLarge { size, limit, .. } => {
                assert_eq!(size, 16);
                assert_eq!(limit, 8);
            }
            other => panic!("expected DocumentTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = loader().load_text(dir.path()).unwrap_err();
        assert!(matches!(err, MatchError::DocumentUnreadable { .. }));
    }

    #[test]
    fn test_non_pdf_bytes_with_pdf_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "resume.pdf", b"definitely not a pdf");
        let err = loader().load_text(&path).unwrap_err();
        assert!(matches!(err, MatchError::DocumentUnreadable { .. }));
    }
}
