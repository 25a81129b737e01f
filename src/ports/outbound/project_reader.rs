use crate::notice_generation::domain::Project;
use crate::shared::Result;
use std::path::Path;

/// ProjectReader port for loading a project and its declared sub-modules
pub trait ProjectReader {
    /// Reads the project rooted at `project_dir` as the execution root
    ///
    /// # Errors
    /// Returns an error if the project descriptor is missing or malformed
    fn read_project(&self, project_dir: &Path) -> Result<Project>;
}
