use std::path::Path;

use crate::errors::MatchError;
use crate::extraction::DocumentExtractor;

/// UTF-8 text documents (`.txt`, `.md`). Invalid UTF-8 is an unreadable document.
pub struct PlainTextExtractor;

impl DocumentExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path, bytes: &[u8]) -> Result<String, MatchError> {
        String::from_utf8(bytes.to_vec()).map_err(|e| MatchError::DocumentUnreadable {
            path: path.to_path_buf(),
            reason: format!("not valid UTF-8 text: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let err = PlainTextExtractor
            .extract(Path::new("cv.txt"), &[0xff, 0xfe, 0x00])
            .unwrap_err();
        assert!(matches!(err, MatchError::DocumentUnreadable { .. }));
    }
}
