//! license-notice - NOTICE file generation for multi-module Maven projects
//!
//! This library resolves the license of every third-party dependency of a
//! project, across all of its modules, and renders the result into a NOTICE
//! attribution file. Artifacts without a known license fail the run and are
//! written to a stub mapping file for completion.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`notice_generation`): Lookup tables, dependency trees and rendering
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_notice::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let project_dir = Path::new(".");
//! let project = PomProjectReader::new().read_project(project_dir)?;
//!
//! // Create use case with its adapters
//! let use_case = GenerateNoticeUseCase::new(
//!     JsonDependencyTreeReader::new(),
//!     FileSystemReader::new(project_dir),
//!     FileSystemReader::new(project_dir),
//!     FileSystemWriter::new(),
//!     FileSystemWriter::new(),
//!     LocalRepositoryPomReader::default_location().map(LocalRepositoryPomReader::new),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = NoticeRequest::builder()
//!     .project_path(project_dir)
//!     .add_license_lookup("licenses.xml")
//!     .build()?;
//! let response = use_case.execute(&request, &project)?;
//! println!("{} artifact(s) listed", response.resolved_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod notice_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, NoticeVerifier, StdoutPresenter,
    };
    pub use crate::adapters::outbound::maven::{
        JsonDependencyTreeReader, LocalRepositoryPomReader, PomProjectReader,
    };
    pub use crate::adapters::outbound::network::{HttpLookupClient, RoutingLookupLoader};
    pub use crate::application::dto::{NoticeRequest, NoticeResponse};
    pub use crate::application::factories::{SinkFactory, SinkType};
    pub use crate::application::use_cases::GenerateNoticeUseCase;
    pub use crate::notice_generation::domain::{
        Artifact, ArtifactLicense, ArtifactMetadata, Coordinate, DependencyNode,
        LicenseLookupDocument, MappedVersion, Project, RawLookupDocument, ResolvedLicenses,
        UnresolvedArtifacts, VersionMatchType,
    };
    pub use crate::notice_generation::policies::DeclaredLicensePolicy;
    pub use crate::notice_generation::services::{
        LicenseLookupIndex, LicenseResolvingVisitor, ModuleFilter, NoticeLineFormat,
        NoticeRenderer, ProjectAggregator, UnresolvedReporter,
    };
    pub use crate::ports::inbound::NoticeGenerationPort;
    pub use crate::ports::outbound::{
        ArtifactMetadataSource, DependencyGraphProvider, LookupSourceLoader,
        MappingDocumentWriter, NoticeSink, ProgressReporter, ProjectReader, TemplateLoader,
    };
    pub use crate::shared::encoding::CharacterEncoding;
    pub use crate::shared::error::NoticeError;
    pub use crate::shared::Result;
}
