use crate::notice_generation::domain::LicenseLookupDocument;
use crate::shared::Result;
use std::path::Path;

/// MappingDocumentWriter port for persisting a stub license mapping document
pub trait MappingDocumentWriter {
    /// Writes the document to `path`, creating parent directories as needed
    fn write(&self, document: &LicenseLookupDocument, path: &Path) -> Result<()>;
}
