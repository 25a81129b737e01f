use crate::adapters::outbound::filesystem::{FileSystemWriter, NoticeVerifier, StdoutPresenter};
use crate::ports::outbound::NoticeSink;
use crate::shared::encoding::CharacterEncoding;

/// What happens to the rendered NOTICE document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkType {
    /// Write the NOTICE file
    Write,
    /// Compare with the existing NOTICE file and fail on differences
    Verify,
    /// Print to stdout instead of writing
    Stdout,
}

/// Factory for creating notice sinks
///
/// This factory encapsulates the creation logic for different sink implementations.
/// It belongs in the application layer as it selects infrastructure adapters
/// based on the command being run.
pub struct SinkFactory;

impl SinkFactory {
    /// Creates a sink instance for the specified type
    ///
    /// `encoding` is used to write the file, or to read the existing one
    /// when verifying.
    ///
    /// # Examples
    /// ```
    /// use license_notice::application::factories::{SinkFactory, SinkType};
    /// use license_notice::shared::encoding::CharacterEncoding;
    ///
    /// let sink = SinkFactory::create(SinkType::Verify, CharacterEncoding::Utf8);
    /// ```
    pub fn create(sink_type: SinkType, encoding: CharacterEncoding) -> Box<dyn NoticeSink> {
        match sink_type {
            SinkType::Write => Box::new(FileSystemWriter::with_encoding(encoding)),
            SinkType::Verify => Box::new(NoticeVerifier::with_encoding(encoding)),
            SinkType::Stdout => Box::new(StdoutPresenter::new()),
        }
    }
}
