use crate::notice_generation::domain::{DependencyNode, Project};
use crate::shared::Result;

/// DependencyGraphProvider port for obtaining a project's resolved dependency tree
///
/// The root node of the returned tree represents the project itself.
pub trait DependencyGraphProvider {
    /// Builds the dependency tree of a single project (not its sub-modules)
    ///
    /// # Errors
    /// Returns an error if the tree is missing or cannot be read
    fn build(&self, project: &Project) -> Result<DependencyNode>;
}
