use crate::application::dto::{NoticeRequest, NoticeResponse};
use crate::notice_generation::domain::Project;
use crate::shared::Result;

/// NoticeGenerationPort - Inbound port for NOTICE generation
///
/// This port defines the interface that external adapters (CLI, build
/// integrations) use to trigger NOTICE generation for a project.
pub trait NoticeGenerationPort {
    /// Generates the NOTICE for `project` and hands it to the configured sink
    ///
    /// # Errors
    /// Returns an error if:
    /// - A lookup source or the template cannot be loaded
    /// - A dependency tree cannot be built
    /// - Any artifact has no resolvable license
    /// - The sink rejects the document
    fn generate_notice(&self, request: &NoticeRequest, project: &Project) -> Result<NoticeResponse>;
}
