mod license_visitor;
mod lookup_index;
mod module_filter;
mod notice_renderer;
mod project_aggregator;
mod unresolved_reporter;

pub use license_visitor::LicenseResolvingVisitor;
pub use lookup_index::LicenseLookupIndex;
pub use module_filter::ModuleFilter;
pub use notice_renderer::{NoticeLineFormat, NoticeRenderer, DEFAULT_LINE_FORMAT};
pub use project_aggregator::ProjectAggregator;
pub use unresolved_reporter::{UnresolvedReporter, STUB_MAPPING_FILE_NAME};
