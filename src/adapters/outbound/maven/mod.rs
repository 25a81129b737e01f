/// Maven adapters: module tree, dependency trees and local repository POMs
mod dependency_tree_reader;
mod local_repository;
mod pom;
mod pom_reader;

pub use dependency_tree_reader::{JsonDependencyTreeReader, DEFAULT_DEPENDENCY_TREE_FILE};
pub use local_repository::LocalRepositoryPomReader;
pub use pom::{PomDocument, PomParent};
pub use pom_reader::{PomProjectReader, POM_FILE_NAME};
