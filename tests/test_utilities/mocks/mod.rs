/// Mock implementations for testing
mod mock_graph_provider;
mod mock_lookup_loader;
mod mock_mapping_writer;
mod mock_metadata_source;
mod mock_notice_sink;
mod mock_progress_reporter;
mod mock_template_loader;

pub use mock_graph_provider::{dep, MockGraphProvider};
pub use mock_lookup_loader::MockLookupLoader;
pub use mock_mapping_writer::MockMappingWriter;
pub use mock_metadata_source::MockMetadataSource;
pub use mock_notice_sink::MockNoticeSink;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_template_loader::MockTemplateLoader;
