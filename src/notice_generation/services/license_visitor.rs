use super::LicenseLookupIndex;
use crate::notice_generation::domain::{
    Artifact, DependencyNode, DependencyNodeVisitor, NoticeEntry, ResolvedLicenses,
    UnresolvedArtifacts,
};
use crate::notice_generation::policies::DeclaredLicensePolicy;
use crate::ports::outbound::{ArtifactMetadataSource, ProgressReporter};
/// LicenseResolvingVisitor - resolves the license of every artifact it visits
///
/// Resolution order for one artifact:
/// 1. the lookup index
/// 2. the licenses the artifact declares in its own metadata, when a
///    metadata source is configured
///
/// Each coordinate is resolved once, on its first visit. Resolved artifacts
/// are recorded in visit order; the rest are collected as unresolved. An
/// artifact is never in both collections. Visiting never fails: metadata
/// errors are reported as warnings.
pub struct LicenseResolvingVisitor<'a, R: ProgressReporter + ?Sized> {
    index: &'a LicenseLookupIndex,
    metadata_source: Option<&'a dyn ArtifactMetadataSource>,
    reporter: &'a R,
    resolved: ResolvedLicenses,
    unresolved: UnresolvedArtifacts,
    visited: usize,
}

impl<'a, R: ProgressReporter + ?Sized> LicenseResolvingVisitor<'a, R> {
    pub fn new(index: &'a LicenseLookupIndex, reporter: &'a R) -> Self {
        Self {
            index,
            metadata_source: None,
            reporter,
            resolved: ResolvedLicenses::new(),
            unresolved: UnresolvedArtifacts::new(),
            visited: 0,
        }
    }

    /// Enables the declared-license fallback
    pub fn with_metadata_source(mut self, source: &'a dyn ArtifactMetadataSource) -> Self {
        self.metadata_source = Some(source);
        self
    }

    pub fn resolved(&self) -> &ResolvedLicenses {
        &self.resolved
    }

    pub fn unresolved(&self) -> &UnresolvedArtifacts {
        &self.unresolved
    }

    /// Number of nodes visited, counting repeated occurrences
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    pub fn into_results(self) -> (ResolvedLicenses, UnresolvedArtifacts) {
        (self.resolved, self.unresolved)
    }

    fn resolve(&mut self, artifact: &Artifact) {
        let coordinate = artifact.coordinate();

        // The outcome depends only on the coordinate; repeated visits are no-ops
        if self.resolved.contains(coordinate) || self.unresolved.contains(coordinate) {
            return;
        }

        let index = self.index;
        let entry = match index.resolve(coordinate) {
            // Local metadata never contributes to an entry the lookup resolves
            Some(license) => Some((
                index.display_name(coordinate).map(str::to_string),
                license.to_string(),
            )),
            None => self.declared_license(artifact),
        };

        match entry {
            Some((name, license)) => {
                let display_key = NoticeEntry::display_key_for(coordinate, name.as_deref());
                self.resolved
                    .insert(coordinate.clone(), NoticeEntry::new(display_key, license));
            }
            None => {
                self.unresolved.insert(artifact.clone());
            }
        }
    }

    /// Display name and license label taken from the artifact's own metadata
    ///
    /// The lookup `<name>` still takes precedence over the metadata name.
    fn declared_license(&self, artifact: &Artifact) -> Option<(Option<String>, String)> {
        let source = self.metadata_source?;
        let coordinate = artifact.coordinate();

        let metadata = match source.describe(artifact) {
            Ok(metadata) => metadata?,
            Err(e) => {
                self.reporter.report_warning(&format!(
                    "Failed to read metadata for {}: {:#}",
                    artifact, e
                ));
                return None;
            }
        };

        let license = DeclaredLicensePolicy::select_license(metadata.licenses())?;
        if DeclaredLicensePolicy::is_ambiguous(metadata.licenses()) {
            self.reporter.report_warning(&format!(
                "{} declares several licenses, listing all of them: {}",
                coordinate, license
            ));
        }

        let name = self
            .index
            .display_name(coordinate)
            .or(metadata.name())
            .map(str::to_string);
        Some((name, license))
    }
}

impl<R: ProgressReporter + ?Sized> DependencyNodeVisitor for LicenseResolvingVisitor<'_, R> {
    fn visit(&mut self, node: &DependencyNode) -> bool {
        self.visited += 1;
        self.resolve(node.artifact());
        true
    }
}
