use crate::notice_generation::domain::RawLookupDocument;
use crate::shared::Result;

/// LookupSourceLoader port for fetching license lookup documents
///
/// A reference is a file path (relative to the project directory) or a URL.
pub trait LookupSourceLoader {
    /// Loads the raw content of one lookup source
    ///
    /// # Errors
    /// Returns an error if the source does not exist or cannot be fetched
    fn load(&self, reference: &str) -> Result<RawLookupDocument>;
}
