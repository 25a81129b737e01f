use crate::notice_generation::domain::LicenseLookupDocument;
use crate::ports::outbound::{MappingDocumentWriter, NoticeSink};
use crate::shared::encoding::CharacterEncoding;
use crate::shared::error::NoticeError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// FileSystemWriter adapter for writing generated files
///
/// Implements the NoticeSink port (the NOTICE file) and the
/// MappingDocumentWriter port (the stub `license-mappings.xml`).
/// Missing parent directories are created.
pub struct FileSystemWriter {
    encoding: CharacterEncoding,
}

impl FileSystemWriter {
    pub fn new() -> Self {
        Self::with_encoding(CharacterEncoding::default())
    }

    pub fn with_encoding(encoding: CharacterEncoding) -> Self {
        Self { encoding }
    }

    /// Security validation before writing:
    /// - Reject if output path exists and is a symlink
    fn validate_output_security(path: &Path) -> Result<()> {
        if fs::symlink_metadata(path).is_ok() {
            validate_not_symlink(path, "write").map_err(|e| NoticeError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        }
        Ok(())
    }

    fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| NoticeError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Failed to create directory {}: {}", parent.display(), e),
            })?;
        }

        Self::validate_output_security(path)?;

        fs::write(path, bytes).map_err(|e| NoticeError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSink for FileSystemWriter {
    fn write(&self, content: &str, path: &Path) -> Result<()> {
        let bytes = self
            .encoding
            .encode(content)
            .map_err(|e| NoticeError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Self::write_bytes(path, &bytes)?;

        eprintln!("✅ NOTICE written: {}", path.display());
        Ok(())
    }
}

impl MappingDocumentWriter for FileSystemWriter {
    fn write(&self, document: &LicenseLookupDocument, path: &Path) -> Result<()> {
        let xml = document.to_xml()?;
        Self::write_bytes(path, xml.as_bytes())
    }
}

/// StdoutPresenter adapter for printing the NOTICE instead of writing it
///
/// Implements the NoticeSink port; the target path is ignored.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSink for StdoutPresenter {
    fn write(&self, content: &str, _path: &Path) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
