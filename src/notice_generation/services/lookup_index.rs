use crate::notice_generation::domain::{
    ArtifactLicense, Coordinate, LicenseLookupDocument, RawLookupDocument, VersionMatchType,
};
use crate::shared::error::NoticeError;
use regex::Regex;

/// Version specifier compiled for matching
#[derive(Debug)]
enum VersionMatcher {
    Exact(String),
    Regex(Regex),
}

impl VersionMatcher {
    fn matches(&self, version: &str) -> bool {
        match self {
            VersionMatcher::Exact(value) => value == version,
            VersionMatcher::Regex(regex) => regex.is_match(version),
        }
    }
}

#[derive(Debug)]
struct IndexedVersion {
    matcher: VersionMatcher,
    license: Option<String>,
}

#[derive(Debug)]
struct IndexedEntry {
    group_id: String,
    artifact_id: String,
    name: Option<String>,
    license: Option<String>,
    versions: Vec<IndexedVersion>,
}

impl IndexedEntry {
    fn compile(entry: ArtifactLicense, resource: &str) -> Result<Self, NoticeError> {
        let mut versions = Vec::with_capacity(entry.versions.len());
        for version in entry.versions {
            let matcher = match version.match_type {
                VersionMatchType::Exact => VersionMatcher::Exact(version.value),
                VersionMatchType::Regex => {
                    // Anchor so the pattern has to match the whole version
                    let anchored = format!("^(?:{})$", version.value);
                    let regex = Regex::new(&anchored).map_err(|e| {
                        NoticeError::LookupSourceError {
                            resource: resource.to_string(),
                            details: format!(
                                "{}:{}: invalid version pattern '{}': {}",
                                entry.group_id, entry.artifact_id, version.value, e
                            ),
                        }
                    })?;
                    VersionMatcher::Regex(regex)
                }
            };
            versions.push(IndexedVersion {
                matcher,
                license: version.license,
            });
        }

        Ok(Self {
            group_id: entry.group_id,
            artifact_id: entry.artifact_id,
            name: entry.name,
            license: entry.license,
            versions,
        })
    }

    fn matches_key(&self, coordinate: &Coordinate) -> bool {
        (self.group_id.as_str(), self.artifact_id.as_str()) == coordinate.key()
    }

    /// The label this entry yields for a version, if any
    ///
    /// The first matching version specifier that carries a license wins.
    /// Otherwise the entry's own license applies.
    fn license_for(&self, version: &str) -> Option<&str> {
        self.versions
            .iter()
            .filter(|v| v.matcher.matches(version))
            .find_map(|v| v.license.as_deref())
            .or(self.license.as_deref())
    }
}

/// LicenseLookupIndex - ordered, queryable merge of all lookup sources
///
/// Entries keep source order; when several entries match a coordinate, the
/// last one that yields a label wins, so later sources override earlier ones.
/// The index is immutable once built.
#[derive(Debug, Default)]
pub struct LicenseLookupIndex {
    entries: Vec<IndexedEntry>,
}

impl LicenseLookupIndex {
    /// Parses and merges raw lookup documents in the given order
    ///
    /// # Errors
    /// Returns `NoticeError::LookupSourceError` naming the first malformed source
    pub fn build(sources: &[RawLookupDocument]) -> Result<Self, NoticeError> {
        let mut index = Self::default();
        for source in sources {
            let document = LicenseLookupDocument::parse(source)?;
            index.add_document(document, source.resource())?;
        }
        Ok(index)
    }

    /// Appends the entries of an already-parsed document
    pub fn add_document(
        &mut self,
        document: LicenseLookupDocument,
        resource: &str,
    ) -> Result<(), NoticeError> {
        for entry in document.artifacts {
            self.entries.push(IndexedEntry::compile(entry, resource)?);
        }
        Ok(())
    }

    /// Resolves the license label for a coordinate
    pub fn resolve(&self, coordinate: &Coordinate) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.matches_key(coordinate))
            .find_map(|entry| entry.license_for(coordinate.version()))
    }

    /// Human-readable name for a coordinate, from the last matching entry that has one
    pub fn display_name(&self, coordinate: &Coordinate) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.matches_key(coordinate))
            .find_map(|entry| entry.name.as_deref())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
