use crate::application::dto::{NoticeRequest, NoticeResponse};
use crate::notice_generation::domain::{Project, RawLookupDocument};
use crate::notice_generation::services::{
    LicenseLookupIndex, LicenseResolvingVisitor, ModuleFilter, NoticeLineFormat, NoticeRenderer,
    ProjectAggregator, UnresolvedReporter,
};
use crate::ports::inbound::NoticeGenerationPort;
use crate::ports::outbound::{
    ArtifactMetadataSource, DependencyGraphProvider, LookupSourceLoader, MappingDocumentWriter,
    NoticeSink, ProgressReporter, TemplateLoader,
};
use crate::shared::error::NoticeError;
use crate::shared::Result;

/// GenerateNoticeUseCase - Core use case for NOTICE generation
///
/// Orchestrates: build lookup index → traverse dependency trees (across
/// modules when aggregating) → fail on unresolved artifacts → render →
/// hand the document to the sink.
///
/// # Type Parameters
/// * `G` - DependencyGraphProvider implementation
/// * `L` - LookupSourceLoader implementation
/// * `T` - TemplateLoader implementation
/// * `S` - NoticeSink implementation (write, verify or print)
/// * `M` - MappingDocumentWriter implementation for the stub file
/// * `A` - ArtifactMetadataSource implementation (optional)
/// * `R` - ProgressReporter implementation
pub struct GenerateNoticeUseCase<G, L, T, S, M, A, R> {
    graph_provider: G,
    lookup_loader: L,
    template_loader: T,
    notice_sink: S,
    mapping_writer: M,
    metadata_source: Option<A>,
    progress_reporter: R,
}

impl<G, L, T, S, M, A, R> GenerateNoticeUseCase<G, L, T, S, M, A, R>
where
    G: DependencyGraphProvider,
    L: LookupSourceLoader,
    T: TemplateLoader,
    S: NoticeSink,
    M: MappingDocumentWriter,
    A: ArtifactMetadataSource,
    R: ProgressReporter,
{
    /// Creates a new GenerateNoticeUseCase with injected dependencies
    pub fn new(
        graph_provider: G,
        lookup_loader: L,
        template_loader: T,
        notice_sink: S,
        mapping_writer: M,
        metadata_source: Option<A>,
        progress_reporter: R,
    ) -> Self {
        Self {
            graph_provider,
            lookup_loader,
            template_loader,
            notice_sink,
            mapping_writer,
            metadata_source,
            progress_reporter,
        }
    }

    /// Executes the NOTICE generation use case for `project`
    ///
    /// # Errors
    /// Returns the first failure; no NOTICE is handed to the sink when any
    /// artifact is unresolved
    pub fn execute(&self, request: &NoticeRequest, project: &Project) -> Result<NoticeResponse> {
        // Aggregating runs are driven from the execution root only
        if request.aggregating && !project.is_execution_root() {
            self.progress_reporter.report(&format!(
                "⏭️  Skipping {}: aggregated NOTICE is generated by the execution root",
                project
            ));
            return Ok(NoticeResponse::skipped());
        }

        // Step 1: Validate configuration before any traversal
        let module_filter = ModuleFilter::new(request.excluded_module_paths.clone())?;
        let line_format = NoticeLineFormat::parse(&request.line_format)?;

        // Step 2: Build the lookup index
        let index = self.build_index(request)?;

        // Step 3: Traverse the dependency trees
        let mut visitor = LicenseResolvingVisitor::new(&index, &self.progress_reporter);
        if request.pom_fallback {
            if let Some(source) = &self.metadata_source {
                visitor = visitor.with_metadata_source(source);
            }
        }

        let aggregator = ProjectAggregator::new(
            &self.graph_provider,
            &self.progress_reporter,
            request.aggregating,
            &module_filter,
        );
        let projects_processed = aggregator.process(project, &mut visitor)?;
        self.report_unmatched_patterns(&module_filter);

        self.progress_reporter.report(&format!(
            "✅ Visited {} dependency node(s) in {} project(s)",
            visitor.visited_count(),
            projects_processed
        ));

        // Step 4: Fail on unresolved artifacts
        let (resolved, unresolved) = visitor.into_results();
        UnresolvedReporter::check(
            &unresolved,
            project.build_dir(),
            &self.mapping_writer,
            &self.progress_reporter,
        )?;

        // Step 5: Render into the template
        let lines = NoticeRenderer::render_lines(&resolved, &line_format, request.indent);
        let template = self
            .template_loader
            .load(&request.notice_template, request.encoding)
            .map_err(|e| NoticeError::TemplateError {
                template: request.notice_template.clone(),
                details: format!("{:#}", e),
            })?;
        let content = NoticeRenderer::splice(
            &template,
            &request.notice_template,
            &request.placeholder,
            &lines,
        )?;

        // Step 6: Hand over to the sink
        let output_path = request.output_file(project);
        self.notice_sink.write(&content, &output_path)?;

        self.progress_reporter.report_completion(&format!(
            "NOTICE lists {} artifact(s): {}",
            resolved.len(),
            output_path.display()
        ));

        Ok(NoticeResponse::generated(
            content,
            output_path,
            resolved.len(),
            projects_processed,
        ))
    }

    /// Loads every lookup source in order and merges them into one index
    fn build_index(&self, request: &NoticeRequest) -> Result<LicenseLookupIndex> {
        let mut sources: Vec<RawLookupDocument> = Vec::with_capacity(request.license_lookup.len());
        for reference in &request.license_lookup {
            self.progress_reporter
                .report(&format!("📖 Loading license lookup: {}", reference));
            let source = self.lookup_loader.load(reference).map_err(|e| {
                NoticeError::LookupSourceError {
                    resource: reference.clone(),
                    details: format!("{:#}", e),
                }
            })?;
            sources.push(source);
        }

        let index = LicenseLookupIndex::build(&sources)?;
        if !sources.is_empty() {
            self.progress_reporter.report(&format!(
                "✅ Loaded {} lookup entry(ies) from {} source(s)",
                index.entry_count(),
                sources.len()
            ));
        }
        Ok(index)
    }

    fn report_unmatched_patterns(&self, module_filter: &ModuleFilter) {
        for pattern in module_filter.unmatched_patterns() {
            self.progress_reporter.report_warning(&format!(
                "Excluded module pattern '{}' did not match any module.",
                pattern
            ));
        }
    }
}

impl<G, L, T, S, M, A, R> NoticeGenerationPort for GenerateNoticeUseCase<G, L, T, S, M, A, R>
where
    G: DependencyGraphProvider,
    L: LookupSourceLoader,
    T: TemplateLoader,
    S: NoticeSink,
    M: MappingDocumentWriter,
    A: ArtifactMetadataSource,
    R: ProgressReporter,
{
    fn generate_notice(&self, request: &NoticeRequest, project: &Project) -> Result<NoticeResponse> {
        self.execute(request, project)
    }
}
