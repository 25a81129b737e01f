use crate::notice_generation::domain::{
    ArtifactLicense, LicenseLookupDocument, UnresolvedArtifacts,
};
use crate::ports::outbound::{MappingDocumentWriter, ProgressReporter};
use crate::shared::error::NoticeError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// File name of the stub mapping document written to the build directory
pub const STUB_MAPPING_FILE_NAME: &str = "license-mappings.xml";

/// UnresolvedReporter - turns unresolved artifacts into a stub mapping
/// document and a build failure
pub struct UnresolvedReporter;

impl UnresolvedReporter {
    /// Builds a lookup document with one unlabelled entry per artifact,
    /// each pinned to the artifact's version
    pub fn build_stub_document(unresolved: &UnresolvedArtifacts) -> LicenseLookupDocument {
        LicenseLookupDocument::new(
            unresolved
                .iter()
                .map(|artifact| ArtifactLicense::stub(artifact.coordinate()))
                .collect(),
        )
    }

    /// Location of the stub mapping document inside a build directory
    pub fn stub_path(build_dir: &Path) -> PathBuf {
        build_dir.join(STUB_MAPPING_FILE_NAME)
    }

    /// Fails if any artifact is unresolved
    ///
    /// Every unresolved artifact is reported and a stub mapping document is
    /// written to `<build_dir>/license-mappings.xml`. Failing to write the
    /// stub only produces a warning.
    ///
    /// # Errors
    /// Returns `NoticeError::UnresolvedLicenses` when `unresolved` is not empty
    pub fn check<W: MappingDocumentWriter, R: ProgressReporter>(
        unresolved: &UnresolvedArtifacts,
        build_dir: &Path,
        writer: &W,
        reporter: &R,
    ) -> Result<()> {
        if unresolved.is_empty() {
            return Ok(());
        }

        reporter.report_error("Failed to find licenses for the following dependencies:");
        for artifact in unresolved.iter() {
            reporter.report_error(&format!("    {}", artifact));
        }
        reporter.report_error("Try adding them to a 'license_lookup' file.");

        let document = Self::build_stub_document(unresolved);
        let stub_path = Self::stub_path(build_dir);
        match writer.write(&document, &stub_path) {
            Ok(()) => reporter.report_error(&format!(
                "A stub license mapping file has been written to: {}",
                stub_path.display()
            )),
            Err(e) => reporter.report_warning(&format!(
                "Failed to write stub {} file to {}: {:#}",
                STUB_MAPPING_FILE_NAME,
                stub_path.display(),
                e
            )),
        }

        Err(NoticeError::UnresolvedLicenses {
            count: unresolved.len(),
        }
        .into())
    }
}
