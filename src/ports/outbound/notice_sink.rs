use crate::shared::Result;
use std::path::Path;

/// NoticeSink port deciding what happens to the rendered NOTICE document
///
/// Implementations write it, compare it with an existing file, or print it.
pub trait NoticeSink {
    /// Hands over the expected NOTICE content for `path`
    ///
    /// # Errors
    /// Implementation-defined; a verifying sink fails when the file differs
    fn write(&self, content: &str, path: &Path) -> Result<()>;
}

impl<T: NoticeSink + ?Sized> NoticeSink for Box<T> {
    fn write(&self, content: &str, path: &Path) -> Result<()> {
        (**self).write(content, path)
    }
}
