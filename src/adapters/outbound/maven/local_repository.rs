use super::pom::{PomDocument, PomParent};
use crate::notice_generation::domain::{Artifact, ArtifactMetadata};
use crate::ports::outbound::ArtifactMetadataSource;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Parent POMs followed when an artifact declares no licenses itself
const MAX_PARENT_DEPTH: usize = 16;

/// LocalRepositoryPomReader adapter reading artifact POMs from a local Maven repository
///
/// Licenses are inherited from parent POMs when the artifact declares none,
/// as long as the parents are present in the repository.
pub struct LocalRepositoryPomReader {
    repository: PathBuf,
}

impl LocalRepositoryPomReader {
    pub fn new(repository: impl Into<PathBuf>) -> Self {
        Self {
            repository: repository.into(),
        }
    }

    /// `~/.m2/repository`, if a home directory is known
    pub fn default_location() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".m2").join("repository"))
    }

    /// Repository layout path: `group/as/dirs/artifact/version/artifact-version.pom`
    fn pom_path(&self, group_id: &str, artifact_id: &str, version: &str) -> Option<PathBuf> {
        if [artifact_id, version].iter().any(|s| is_traversal(s))
            || group_id.split('.').any(is_traversal)
        {
            return None;
        }

        let mut path = self.repository.clone();
        for segment in group_id.split('.') {
            path.push(segment);
        }
        path.push(artifact_id);
        path.push(version);
        path.push(format!("{}-{}.pom", artifact_id, version));
        Some(path)
    }

    fn read_pom(&self, path: &Path) -> Result<Option<PomDocument>> {
        if !path.exists() {
            return Ok(None);
        }
        let bytes = read_checked_file(path, "artifact POM")?;
        let content = String::from_utf8_lossy(&bytes);
        let pom = PomDocument::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(pom))
    }

    /// Declared licenses of the nearest ancestor that declares any
    fn inherited_licenses(&self, mut parent: Option<PomParent>) -> Result<Vec<String>> {
        for _ in 0..MAX_PARENT_DEPTH {
            let Some(reference) = parent else {
                break;
            };
            let Some(path) =
                self.pom_path(&reference.group_id, &reference.artifact_id, &reference.version)
            else {
                break;
            };
            let Some(pom) = self.read_pom(&path)? else {
                break;
            };
            if !pom.licenses.is_empty() {
                return Ok(pom.licenses);
            }
            parent = pom.parent;
        }
        Ok(Vec::new())
    }
}

impl ArtifactMetadataSource for LocalRepositoryPomReader {
    fn describe(&self, artifact: &Artifact) -> Result<Option<ArtifactMetadata>> {
        let coordinate = artifact.coordinate();
        let Some(path) = self.pom_path(
            coordinate.group_id(),
            coordinate.artifact_id(),
            coordinate.version(),
        ) else {
            return Ok(None);
        };
        let Some(pom) = self.read_pom(&path)? else {
            return Ok(None);
        };

        let name = pom.literal_name().map(str::to_string);
        let licenses = if pom.licenses.is_empty() {
            self.inherited_licenses(pom.parent)?
        } else {
            pom.licenses
        };
        Ok(Some(ArtifactMetadata::new(name, licenses)))
    }
}

fn is_traversal(segment: &str) -> bool {
    segment.is_empty() || segment == "." || segment == ".."
}
