use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::MatchError;
use crate::extraction::stdout_guard::StdoutToStderr;
use crate::extraction::DocumentExtractor;

/// Every PDF starts with this marker.
const PDF_MAGIC: &[u8] = b"%PDF";

/// PDF documents, via `pdf-extract`. Pages are concatenated in document order.
pub struct PdfExtractor;

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, path: &Path, bytes: &[u8]) -> Result<String, MatchError> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(MatchError::DocumentUnreadable {
                path: path.to_path_buf(),
                reason: "not a valid PDF (missing %PDF header)".to_string(),
            });
        }

        // pdf-extract prints font warnings to stdout and panics on some
        // malformed inputs instead of returning Err.
        let guard = StdoutToStderr::redirect();
        if guard.is_none() {
            debug!("Could not redirect stdout during PDF extraction");
        }
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));
        drop(guard);

        match extracted {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(MatchError::DocumentUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
            Err(_) => {
                warn!("PDF parser panicked on {}", path.display());
                Err(MatchError::DocumentUnreadable {
                    path: path.to_path_buf(),
                    reason: "PDF parser failed on malformed content".to_string(),
                })
            }
        }
    }
}
