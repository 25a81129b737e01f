use super::Artifact;

/// Callback interface for a pre-order walk over a dependency tree
pub trait DependencyNodeVisitor {
    /// Called before the node's children are visited.
    ///
    /// Returning `false` skips the children of this node.
    fn visit(&mut self, node: &DependencyNode) -> bool;

    /// Called after the node's children were visited.
    ///
    /// Returning `false` stops the walk over the remaining siblings.
    fn end_visit(&mut self, _node: &DependencyNode) -> bool {
        true
    }
}

/// One artifact in a resolved dependency tree together with its own dependencies
///
/// The same coordinate may occur in several nodes of one tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyNode {
    artifact: Artifact,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(artifact: Artifact) -> Self {
        Self {
            artifact,
            children: Vec::new(),
        }
    }

    pub fn with_children(artifact: Artifact, children: Vec<DependencyNode>) -> Self {
        Self { artifact, children }
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    /// Walks this node and its descendants depth-first, parent before children
    pub fn accept<V: DependencyNodeVisitor + ?Sized>(&self, visitor: &mut V) -> bool {
        if visitor.visit(self) {
            for child in &self.children {
                if !child.accept(visitor) {
                    break;
                }
            }
        }
        visitor.end_visit(self)
    }

    /// Walks the descendants of this node without visiting the node itself.
    ///
    /// The root of a project's tree is the project, not one of its dependencies.
    pub fn accept_children<V: DependencyNodeVisitor + ?Sized>(&self, visitor: &mut V) -> bool {
        for child in &self.children {
            if !child.accept(visitor) {
                return false;
            }
        }
        true
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DependencyNode::node_count)
            .sum::<usize>()
    }
}
