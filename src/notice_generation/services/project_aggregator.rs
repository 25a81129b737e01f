use super::ModuleFilter;
use crate::notice_generation::domain::{DependencyNodeVisitor, Project};
use crate::ports::outbound::{DependencyGraphProvider, ProgressReporter};
use crate::shared::error::NoticeError;
use crate::shared::Result;

/// Maximum module nesting depth followed during aggregation
const MAX_MODULE_DEPTH: usize = 64;

/// ProjectAggregator - feeds the dependency trees of a project and,
/// when aggregating, all of its sub-modules into one visitor
pub struct ProjectAggregator<'a, G: DependencyGraphProvider, R: ProgressReporter> {
    graph_provider: &'a G,
    reporter: &'a R,
    aggregating: bool,
    module_filter: &'a ModuleFilter,
}

impl<'a, G: DependencyGraphProvider, R: ProgressReporter> ProjectAggregator<'a, G, R> {
    pub fn new(
        graph_provider: &'a G,
        reporter: &'a R,
        aggregating: bool,
        module_filter: &'a ModuleFilter,
    ) -> Self {
        Self {
            graph_provider,
            reporter,
            aggregating,
            module_filter,
        }
    }

    /// Traverses `project` and, when aggregating, its non-excluded sub-modules
    ///
    /// # Returns
    /// The number of projects whose dependency tree was traversed
    ///
    /// # Errors
    /// Returns `NoticeError::GraphBuildError` naming the first project whose
    /// dependency tree could not be built
    pub fn process<V: DependencyNodeVisitor + ?Sized>(
        &self,
        project: &Project,
        visitor: &mut V,
    ) -> Result<usize> {
        let total = if self.aggregating {
            self.count_projects(project, 0)
        } else {
            1
        };
        let mut processed = 0;
        self.process_project(project, visitor, 0, total, &mut processed)?;
        Ok(processed)
    }

    fn process_project<V: DependencyNodeVisitor + ?Sized>(
        &self,
        project: &Project,
        visitor: &mut V,
        depth: usize,
        total: usize,
        processed: &mut usize,
    ) -> Result<()> {
        if depth > MAX_MODULE_DEPTH {
            anyhow::bail!(
                "Module nesting deeper than {} levels at '{}'",
                MAX_MODULE_DEPTH,
                project
            );
        }

        self.reporter.report_progress(
            *processed,
            total,
            Some(&format!("Parsing dependencies for: {}", project)),
        );

        let tree = self
            .graph_provider
            .build(project)
            .map_err(|e| NoticeError::GraphBuildError {
                project: project.to_string(),
                details: format!("{:#}", e),
            })?;
        tree.accept_children(visitor);
        *processed += 1;

        if !self.aggregating {
            return Ok(());
        }

        for module in project.modules() {
            if self.module_filter.is_excluded(module.module_path()) {
                self.reporter
                    .report(&format!("⏭️  Skipping excluded module: {}", module));
                continue;
            }
            self.process_project(module, visitor, depth + 1, total, processed)?;
        }

        Ok(())
    }

    /// Number of projects that will be traversed, for progress reporting
    fn count_projects(&self, project: &Project, depth: usize) -> usize {
        if depth > MAX_MODULE_DEPTH {
            return 1;
        }
        1 + project
            .modules()
            .iter()
            // Counting must not mark patterns as matched
            .filter(|m| !self.module_filter.would_exclude(m.module_path()))
            .map(|m| self.count_projects(m, depth + 1))
            .sum::<usize>()
    }
}
