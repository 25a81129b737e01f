use crate::shared::encoding::CharacterEncoding;
use crate::shared::Result;

/// TemplateLoader port for reading the NOTICE template
pub trait TemplateLoader {
    /// Reads the named template, decoding it with the given encoding
    ///
    /// # Errors
    /// Returns an error if the template cannot be found or decoded
    fn load(&self, name: &str, encoding: CharacterEncoding) -> Result<String>;
}
