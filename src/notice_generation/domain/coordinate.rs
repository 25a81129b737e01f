use crate::shared::Result;

/// Maximum length for group and artifact ids (security limit)
const MAX_IDENTIFIER_LENGTH: usize = 255;

/// Maximum length for versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Coordinate value object identifying one dependency: (group, artifact, version)
///
/// Lookup tables key on (group, artifact) only; the version refines a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl Coordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let version = version.into();

        validate_identifier(&group_id, "Group id")?;
        validate_identifier(&artifact_id, "Artifact id")?;
        validate_version(&version)?;

        Ok(Self {
            group_id,
            artifact_id,
            version,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the (group, artifact) lookup key, ignoring the version
    pub fn key(&self) -> (&str, &str) {
        (&self.group_id, &self.artifact_id)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

fn validate_identifier(value: &str, label: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", label);
    }

    if value.len() > MAX_IDENTIFIER_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            label,
            value.len(),
            MAX_IDENTIFIER_LENGTH
        );
    }

    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        anyhow::bail!(
            "{} '{}' contains invalid characters. Only alphanumeric, hyphens, underscores and dots are allowed.",
            label,
            value
        );
    }

    Ok(())
}

fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        anyhow::bail!("Version cannot be empty");
    }

    if version.len() > MAX_VERSION_LENGTH {
        anyhow::bail!(
            "Version is too long ({} bytes). Maximum allowed: {} bytes",
            version.len(),
            MAX_VERSION_LENGTH
        );
    }

    if version.chars().any(|c| c.is_whitespace() || c == ':') {
        anyhow::bail!(
            "Version '{}' contains whitespace or ':' characters",
            version
        );
    }

    Ok(())
}
