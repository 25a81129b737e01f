use crate::notice_generation::domain::{Artifact, Coordinate, DependencyNode, Project};
use crate::ports::outbound::DependencyGraphProvider;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Tree file location relative to each module, as written by
/// `mvn dependency:tree -DoutputType=json -DoutputFile=target/dependency-tree.json`
pub const DEFAULT_DEPENDENCY_TREE_FILE: &str = "target/dependency-tree.json";

/// One node of the maven-dependency-plugin JSON output
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreeNode {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(rename = "type")]
    artifact_type: Option<String>,
    scope: Option<String>,
    classifier: Option<String>,
    #[serde(default)]
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn into_dependency_node(self) -> Result<DependencyNode> {
        let coordinate = Coordinate::new(self.group_id, self.artifact_id, self.version)?;
        let artifact = Artifact::new(coordinate)
            .with_type(self.artifact_type)
            .with_classifier(self.classifier)
            .with_scope(self.scope);

        let children = self
            .children
            .into_iter()
            .map(TreeNode::into_dependency_node)
            .collect::<Result<Vec<_>>>()?;
        Ok(DependencyNode::with_children(artifact, children))
    }
}

/// JsonDependencyTreeReader adapter reading pre-resolved dependency trees
///
/// This adapter implements the DependencyGraphProvider port. It does not
/// resolve anything itself: the tree file must have been produced by the
/// build beforehand.
pub struct JsonDependencyTreeReader {
    tree_file: PathBuf,
}

impl JsonDependencyTreeReader {
    pub fn new() -> Self {
        Self {
            tree_file: PathBuf::from(DEFAULT_DEPENDENCY_TREE_FILE),
        }
    }

    /// Overrides the tree file path, resolved against each module's base dir
    pub fn with_tree_file(mut self, tree_file: impl Into<PathBuf>) -> Self {
        self.tree_file = tree_file.into();
        self
    }
}

impl Default for JsonDependencyTreeReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraphProvider for JsonDependencyTreeReader {
    fn build(&self, project: &Project) -> Result<DependencyNode> {
        let path = project.base_dir().join(&self.tree_file);
        if !path.exists() {
            anyhow::bail!(
                "Dependency tree not found: {}\n\n💡 Hint: Run 'mvn dependency:tree -DoutputType=json -DoutputFile={}' first.",
                path.display(),
                self.tree_file.display()
            );
        }

        let bytes = read_checked_file(&path, "dependency tree")?;
        let root: TreeNode = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse dependency tree {}", path.display()))?;
        root.into_dependency_node()
            .with_context(|| format!("Invalid artifact in dependency tree {}", path.display()))
    }
}
