use crate::application::dto::DEFAULT_NOTICE_TEMPLATE;
use crate::notice_generation::domain::RawLookupDocument;
use crate::ports::outbound::{LookupSourceLoader, TemplateLoader};
use crate::shared::encoding::CharacterEncoding;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Template used when the project does not provide its own `NOTICE.template`
const BUNDLED_NOTICE_TEMPLATE: &str = include_str!("../../../../resources/NOTICE.template");

/// FileSystemReader adapter for reading project-relative files
///
/// This adapter implements the TemplateLoader and LookupSourceLoader ports.
/// Relative names are resolved against the project directory.
pub struct FileSystemReader {
    base_dir: PathBuf,
}

impl FileSystemReader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// The template shipped with the tool
    pub fn bundled_template() -> &'static str {
        BUNDLED_NOTICE_TEMPLATE
    }
}

impl TemplateLoader for FileSystemReader {
    fn load(&self, name: &str, encoding: CharacterEncoding) -> Result<String> {
        let path = self.resolve(name);

        if path.exists() {
            let bytes = read_checked_file(&path, "NOTICE template")?;
            return encoding.decode(bytes);
        }

        if name == DEFAULT_NOTICE_TEMPLATE {
            return Ok(BUNDLED_NOTICE_TEMPLATE.to_string());
        }

        anyhow::bail!("Template file not found: {}", path.display())
    }
}

impl LookupSourceLoader for FileSystemReader {
    fn load(&self, reference: &str) -> Result<RawLookupDocument> {
        let path = self.resolve(reference);
        let content = read_lookup_file(&path)?;
        Ok(RawLookupDocument::new(reference, content))
    }
}

fn read_lookup_file(path: &Path) -> Result<String> {
    let bytes = read_checked_file(path, "license lookup file")?;
    String::from_utf8(bytes)
        .map_err(|e| anyhow::anyhow!("{} is not valid UTF-8: {}", path.display(), e))
}
