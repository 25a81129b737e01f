use crate::notice_generation::domain::Project;
use crate::notice_generation::services::{NoticeLineFormat, DEFAULT_LINE_FORMAT};
use crate::shared::encoding::CharacterEncoding;
use crate::shared::error::NoticeError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Template looked up when none is configured
pub const DEFAULT_NOTICE_TEMPLATE: &str = "NOTICE.template";

/// Marker in the template replaced with the generated lines
pub const DEFAULT_PLACEHOLDER: &str = "#GENERATED_NOTICES#";

/// Name of the generated file
pub const DEFAULT_FILE_NAME: &str = "NOTICE";

/// Spaces substituted for `{0}` in each line
pub const DEFAULT_INDENT: usize = 2;

/// Upper bound for the indentation width
pub const MAX_INDENT: usize = 64;

/// NoticeRequest - Internal request DTO for NOTICE generation
///
/// Holds the merged and validated configuration of one run.
#[derive(Debug, Clone)]
pub struct NoticeRequest {
    /// Project directory the run was started in
    pub project_path: PathBuf,
    /// Lookup sources in precedence order (later wins)
    pub license_lookup: Vec<String>,
    /// Template name, resolved against the project directory first
    pub notice_template: String,
    pub placeholder: String,
    /// Output directory; relative paths are resolved against the project base dir
    pub output_dir: Option<PathBuf>,
    pub file_name: String,
    pub indent: usize,
    pub encoding: CharacterEncoding,
    /// Whether sub-modules are traversed into one NOTICE
    pub aggregating: bool,
    pub line_format: String,
    /// Module path patterns skipped during aggregation
    pub excluded_module_paths: Vec<String>,
    /// Whether artifacts missing from the lookup fall back to their declared licenses
    pub pom_fallback: bool,
}

impl NoticeRequest {
    pub fn builder() -> NoticeRequestBuilder {
        NoticeRequestBuilder::default()
    }

    /// Location of the NOTICE file for `project`
    pub fn output_file(&self, project: &Project) -> PathBuf {
        let output_dir = self.output_dir.as_deref().unwrap_or(Path::new(""));
        let output_dir = if output_dir.is_absolute() {
            output_dir.to_path_buf()
        } else {
            project.base_dir().join(output_dir)
        };
        output_dir.join(&self.file_name)
    }
}

/// Builder for [`NoticeRequest`]; unset values take their defaults
#[derive(Debug, Default)]
pub struct NoticeRequestBuilder {
    project_path: Option<PathBuf>,
    license_lookup: Vec<String>,
    notice_template: Option<String>,
    placeholder: Option<String>,
    output_dir: Option<PathBuf>,
    file_name: Option<String>,
    indent: Option<usize>,
    encoding: Option<CharacterEncoding>,
    aggregating: Option<bool>,
    line_format: Option<String>,
    excluded_module_paths: Vec<String>,
    pom_fallback: Option<bool>,
}

impl NoticeRequestBuilder {
    pub fn project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    pub fn license_lookup(mut self, sources: Vec<String>) -> Self {
        self.license_lookup = sources;
        self
    }

    pub fn add_license_lookup(mut self, source: impl Into<String>) -> Self {
        self.license_lookup.push(source.into());
        self
    }

    pub fn notice_template(mut self, template: impl Into<String>) -> Self {
        self.notice_template = Some(template.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn encoding(mut self, encoding: CharacterEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn aggregating(mut self, aggregating: bool) -> Self {
        self.aggregating = Some(aggregating);
        self
    }

    pub fn line_format(mut self, format: impl Into<String>) -> Self {
        self.line_format = Some(format.into());
        self
    }

    pub fn excluded_module_paths(mut self, patterns: Vec<String>) -> Self {
        self.excluded_module_paths = patterns;
        self
    }

    pub fn pom_fallback(mut self, enabled: bool) -> Self {
        self.pom_fallback = Some(enabled);
        self
    }

    /// Validates the values and builds the request
    ///
    /// # Errors
    /// Returns `NoticeError::Validation` for missing or out-of-range values and
    /// `NoticeError::InvalidLineFormat` for an unusable line format
    pub fn build(self) -> Result<NoticeRequest> {
        let project_path = self.project_path.ok_or_else(|| NoticeError::Validation {
            message: "project_path is required".to_string(),
        })?;

        let notice_template = non_blank(
            self.notice_template,
            DEFAULT_NOTICE_TEMPLATE,
            "notice_template",
        )?;
        let placeholder = non_blank(self.placeholder, DEFAULT_PLACEHOLDER, "placeholder")?;
        let file_name = non_blank(self.file_name, DEFAULT_FILE_NAME, "file_name")?;
        if file_name.contains(['/', '\\']) || file_name == "." || file_name == ".." {
            return Err(NoticeError::Validation {
                message: format!(
                    "file_name must be a plain file name, got '{}'. Use output_dir for the directory",
                    file_name
                ),
            }
            .into());
        }

        let indent = self.indent.unwrap_or(DEFAULT_INDENT);
        if indent > MAX_INDENT {
            return Err(NoticeError::Validation {
                message: format!("indent must be at most {}, got {}", MAX_INDENT, indent),
            }
            .into());
        }

        let line_format = self
            .line_format
            .unwrap_or_else(|| DEFAULT_LINE_FORMAT.to_string());
        NoticeLineFormat::parse(&line_format)?;

        if let Some(source) = self.license_lookup.iter().find(|s| s.trim().is_empty()) {
            return Err(NoticeError::Validation {
                message: format!("license_lookup entries must not be blank, got '{}'", source),
            }
            .into());
        }

        Ok(NoticeRequest {
            project_path,
            license_lookup: self.license_lookup,
            notice_template,
            placeholder,
            output_dir: self.output_dir,
            file_name,
            indent,
            encoding: self.encoding.unwrap_or_default(),
            aggregating: self.aggregating.unwrap_or(true),
            line_format,
            excluded_module_paths: self.excluded_module_paths,
            pom_fallback: self.pom_fallback.unwrap_or(true),
        })
    }
}

fn non_blank(value: Option<String>, default: &str, field: &str) -> Result<String> {
    match value {
        None => Ok(default.to_string()),
        Some(v) if v.trim().is_empty() => Err(NoticeError::Validation {
            message: format!("{} must not be empty", field),
        }
        .into()),
        Some(v) => Ok(v),
    }
}
