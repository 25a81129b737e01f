use super::{Artifact, Coordinate};
use indexmap::IndexMap;

/// One line of the generated NOTICE before formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeEntry {
    display_key: String,
    license: String,
}

impl NoticeEntry {
    pub fn new(display_key: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            display_key: display_key.into(),
            license: license.into(),
        }
    }

    /// Builds the display key `group:artifact:version`, or
    /// `Name (group:artifact:version)` when a human-readable name is known
    pub fn display_key_for(coordinate: &Coordinate, name: Option<&str>) -> String {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("{} ({})", name, coordinate),
            None => coordinate.to_string(),
        }
    }

    pub fn display_key(&self) -> &str {
        &self.display_key
    }

    pub fn license(&self) -> &str {
        &self.license
    }
}

/// Insertion-ordered map of resolved artifacts
///
/// Re-inserting a coordinate replaces its entry without moving it, so the
/// order reflects the first time each artifact was seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedLicenses {
    entries: IndexMap<Coordinate, NoticeEntry>,
}

impl ResolvedLicenses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, coordinate: Coordinate, entry: NoticeEntry) {
        self.entries.insert(coordinate, entry);
    }

    pub fn get(&self, coordinate: &Coordinate) -> Option<&NoticeEntry> {
        self.entries.get(coordinate)
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.entries.contains_key(coordinate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(display key, license)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.display_key(), entry.license()))
    }

    pub fn coordinates(&self) -> impl Iterator<Item = &Coordinate> {
        self.entries.keys()
    }
}

/// Insertion-ordered set of artifacts without a license, keyed by coordinate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnresolvedArtifacts {
    artifacts: IndexMap<Coordinate, Artifact>,
}

impl UnresolvedArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the artifact unless its coordinate is already present.
    ///
    /// Returns `true` if the artifact was added.
    pub fn insert(&mut self, artifact: Artifact) -> bool {
        if self.artifacts.contains_key(artifact.coordinate()) {
            return false;
        }
        self.artifacts
            .insert(artifact.coordinate().clone(), artifact);
        true
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.artifacts.contains_key(coordinate)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }
}
