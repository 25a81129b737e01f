use license_notice::prelude::*;
use std::collections::HashMap;

/// Mock ArtifactMetadataSource with metadata keyed by `group:artifact:version`
#[derive(Default, Clone)]
pub struct MockMetadataSource {
    metadata: HashMap<String, ArtifactMetadata>,
}

impl MockMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, coordinate: &str, name: Option<&str>, licenses: &[&str]) -> Self {
        self.metadata.insert(
            coordinate.to_string(),
            ArtifactMetadata::new(
                name.map(str::to_string),
                licenses.iter().map(|l| l.to_string()).collect(),
            ),
        );
        self
    }
}

impl ArtifactMetadataSource for MockMetadataSource {
    fn describe(&self, artifact: &Artifact) -> Result<Option<ArtifactMetadata>> {
        Ok(self
            .metadata
            .get(&artifact.coordinate().to_string())
            .cloned())
    }
}
