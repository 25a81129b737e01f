use crate::notice_generation::domain::{Artifact, ArtifactMetadata};
use crate::shared::Result;

/// ArtifactMetadataSource port for the metadata an artifact publishes about itself
pub trait ArtifactMetadataSource {
    /// Looks up name and declared licenses of an artifact
    ///
    /// # Returns
    /// `None` when no metadata is available for the artifact
    ///
    /// # Errors
    /// Returns an error if metadata exists but cannot be read
    fn describe(&self, artifact: &Artifact) -> Result<Option<ArtifactMetadata>>;
}
