use license_notice::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock NoticeSink recording every document it receives
#[derive(Default, Clone)]
pub struct MockNoticeSink {
    pub written: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl MockNoticeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> Vec<(String, PathBuf)> {
        self.written.lock().unwrap().clone()
    }
}

impl NoticeSink for MockNoticeSink {
    fn write(&self, content: &str, path: &Path) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((content.to_string(), path.to_path_buf()));
        Ok(())
    }
}
