pub mod artifact;
pub mod artifact_metadata;
pub mod coordinate;
pub mod dependency_node;
pub mod license_lookup;
pub mod project;
pub mod resolved_licenses;

pub use artifact::Artifact;
pub use artifact_metadata::ArtifactMetadata;
pub use coordinate::Coordinate;
pub use dependency_node::{DependencyNode, DependencyNodeVisitor};
pub use license_lookup::{
    ArtifactLicense, LicenseLookupDocument, LookupFormat, MappedVersion, RawLookupDocument,
    VersionMatchType,
};
pub use project::Project;
pub use resolved_licenses::{NoticeEntry, ResolvedLicenses, UnresolvedArtifacts};
