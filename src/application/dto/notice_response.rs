use std::path::PathBuf;

/// NoticeResponse - result of one NOTICE generation run
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeResponse {
    /// Rendered NOTICE document; `None` when the run was skipped
    pub content: Option<String>,
    /// Where the NOTICE was handed to the sink
    pub output_path: Option<PathBuf>,
    /// Number of distinct artifacts listed in the NOTICE
    pub resolved_count: usize,
    /// Number of projects whose dependency tree was traversed
    pub projects_processed: usize,
}

impl NoticeResponse {
    pub fn generated(
        content: String,
        output_path: PathBuf,
        resolved_count: usize,
        projects_processed: usize,
    ) -> Self {
        Self {
            content: Some(content),
            output_path: Some(output_path),
            resolved_count,
            projects_processed,
        }
    }

    /// Response for a module that is not the execution root of an aggregating run
    pub fn skipped() -> Self {
        Self {
            content: None,
            output_path: None,
            resolved_count: 0,
            projects_processed: 0,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.content.is_none()
    }
}
