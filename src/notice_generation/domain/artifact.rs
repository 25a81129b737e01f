use super::Coordinate;

/// Artifact as it appears in a resolved dependency tree
///
/// Identity for deduplication purposes is the coordinate alone; packaging
/// type, classifier and scope are carried for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    coordinate: Coordinate,
    artifact_type: Option<String>,
    classifier: Option<String>,
    scope: Option<String>,
}

impl Artifact {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            artifact_type: None,
            classifier: None,
            scope: None,
        }
    }

    pub fn with_type(mut self, artifact_type: Option<String>) -> Self {
        self.artifact_type = non_empty(artifact_type);
        self
    }

    pub fn with_classifier(mut self, classifier: Option<String>) -> Self {
        self.classifier = non_empty(classifier);
        self
    }

    pub fn with_scope(mut self, scope: Option<String>) -> Self {
        self.scope = non_empty(scope);
        self
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn artifact_type(&self) -> Option<&str> {
        self.artifact_type.as_deref()
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Formats as `group:artifact[:type[:classifier]]:version[:scope]`
impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}",
            self.coordinate.group_id(),
            self.coordinate.artifact_id()
        )?;
        if let Some(artifact_type) = &self.artifact_type {
            write!(f, ":{}", artifact_type)?;
            if let Some(classifier) = &self.classifier {
                write!(f, ":{}", classifier)?;
            }
        }
        write!(f, ":{}", self.coordinate.version())?;
        if let Some(scope) = &self.scope {
            write!(f, ":{}", scope)?;
        }
        Ok(())
    }
}
