use license_notice::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock MappingDocumentWriter recording stub documents
#[derive(Default, Clone)]
pub struct MockMappingWriter {
    pub written: Arc<Mutex<Vec<(LicenseLookupDocument, PathBuf)>>>,
    pub should_fail: bool,
}

impl MockMappingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn documents(&self) -> Vec<(LicenseLookupDocument, PathBuf)> {
        self.written.lock().unwrap().clone()
    }
}

impl MappingDocumentWriter for MockMappingWriter {
    fn write(&self, document: &LicenseLookupDocument, path: &Path) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock stub write failure");
        }
        self.written
            .lock()
            .unwrap()
            .push((document.clone(), path.to_path_buf()));
        Ok(())
    }
}
