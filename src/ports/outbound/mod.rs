/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, build tool output, network, console).
pub mod artifact_metadata_source;
pub mod dependency_graph_provider;
pub mod lookup_source_loader;
pub mod mapping_document_writer;
pub mod notice_sink;
pub mod progress_reporter;
pub mod project_reader;
pub mod template_loader;

pub use artifact_metadata_source::ArtifactMetadataSource;
pub use dependency_graph_provider::DependencyGraphProvider;
pub use lookup_source_loader::LookupSourceLoader;
pub use mapping_document_writer::MappingDocumentWriter;
pub use notice_sink::NoticeSink;
pub use progress_reporter::ProgressReporter;
pub use project_reader::ProjectReader;
pub use template_loader::TemplateLoader;
