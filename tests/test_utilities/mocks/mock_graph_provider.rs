use license_notice::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DependencyGraphProvider serving trees by project name
#[derive(Default, Clone)]
pub struct MockGraphProvider {
    trees: HashMap<String, DependencyNode>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockGraphProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the tree of `project`; its root is the project artifact itself
    pub fn with_tree(mut self, project: &str, dependencies: Vec<DependencyNode>) -> Self {
        let root = Artifact::new(Coordinate::new("org.example", project, "1.0").unwrap());
        self.trees.insert(
            project.to_string(),
            DependencyNode::with_children(root, dependencies),
        );
        self
    }

    pub fn requested_projects(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl DependencyGraphProvider for MockGraphProvider {
    fn build(&self, project: &Project) -> Result<DependencyNode> {
        self.requested
            .lock()
            .unwrap()
            .push(project.name().to_string());
        match self.trees.get(project.name()) {
            Some(tree) => Ok(tree.clone()),
            None => anyhow::bail!("Mock: no dependency tree for {}", project.name()),
        }
    }
}

/// Builds a dependency node
pub fn dep(group: &str, artifact: &str, version: &str, children: Vec<DependencyNode>) -> DependencyNode {
    DependencyNode::with_children(
        Artifact::new(Coordinate::new(group, artifact, version).unwrap()),
        children,
    )
}
