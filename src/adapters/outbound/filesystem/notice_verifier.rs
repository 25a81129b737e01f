use crate::ports::outbound::NoticeSink;
use crate::shared::encoding::CharacterEncoding;
use crate::shared::error::NoticeError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use std::path::Path;

/// NoticeVerifier adapter checking that the committed NOTICE is current
///
/// Implements the NoticeSink port without writing anything. Line endings
/// are normalized before comparing.
pub struct NoticeVerifier {
    encoding: CharacterEncoding,
}

impl NoticeVerifier {
    pub fn new() -> Self {
        Self::with_encoding(CharacterEncoding::default())
    }

    pub fn with_encoding(encoding: CharacterEncoding) -> Self {
        Self { encoding }
    }
}

impl Default for NoticeVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSink for NoticeVerifier {
    fn write(&self, content: &str, path: &Path) -> Result<()> {
        if !path.exists() {
            let error = NoticeError::NoticeOutOfDate {
                path: path.to_path_buf(),
            };
            return Err(anyhow::Error::from(error).context("NOTICE file does not exist"));
        }

        let existing = read_checked_file(path, "NOTICE file")
            .and_then(|bytes| self.encoding.decode(bytes))
            .map_err(|e| NoticeError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        if normalize_line_endings(&existing) != normalize_line_endings(content) {
            return Err(NoticeError::NoticeOutOfDate {
                path: path.to_path_buf(),
            }
            .into());
        }

        eprintln!("✅ NOTICE is up to date: {}", path.display());
        Ok(())
    }
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_matching_notice_passes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("NOTICE");
        fs::write(&path, "line\r\nother\r\n").unwrap();

        let verifier = NoticeVerifier::new();
        assert!(verifier.write("line\nother\n", &path).is_ok());
    }

    #[test]
    fn test_different_notice_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("NOTICE");
        fs::write(&path, "stale\n").unwrap();

        let verifier = NoticeVerifier::new();
        let err = verifier.write("fresh\n", &path).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<NoticeError>(),
            Some(NoticeError::NoticeOutOfDate { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "stale\n");
    }

    #[test]
    fn test_missing_notice_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("NOTICE");

        let verifier = NoticeVerifier::new();
        let err = verifier.write("fresh\n", &path).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<NoticeError>(),
            Some(NoticeError::NoticeOutOfDate { .. })
        ));
    }

    #[test]
    fn test_compares_decoded_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("NOTICE");
        fs::write(&path, [0x43, 0x61, 0x66, 0xE9]).unwrap();

        let verifier = NoticeVerifier::with_encoding(CharacterEncoding::Latin1);
        assert!(verifier.write("Café", &path).is_ok());
    }
}
