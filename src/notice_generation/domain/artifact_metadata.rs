/// Metadata an artifact publishes about itself (for Maven, its POM)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactMetadata {
    name: Option<String>,
    licenses: Vec<String>,
}

impl ArtifactMetadata {
    pub fn new(name: Option<String>, licenses: Vec<String>) -> Self {
        Self {
            name: name.filter(|n| !n.trim().is_empty()),
            licenses,
        }
    }

    /// Human-readable project name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Names of the declared licenses, in declaration order
    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }
}
