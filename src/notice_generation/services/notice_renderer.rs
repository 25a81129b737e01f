use crate::notice_generation::domain::ResolvedLicenses;
use crate::shared::error::NoticeError;

/// Line format used when none is configured
pub const DEFAULT_LINE_FORMAT: &str = "{0}{1} under {2}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `{0}`
    Indent,
    /// `{1}`
    Artifact,
    /// `{2}`
    License,
}

/// Parsed positional line format
///
/// `{0}` is the indentation, `{1}` the artifact display key and `{2}` the
/// license label. Everything else is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeLineFormat {
    segments: Vec<Segment>,
}

impl NoticeLineFormat {
    /// Parses a line format
    ///
    /// # Errors
    /// Returns `NoticeError::InvalidLineFormat` for unbalanced braces or any
    /// argument other than `{0}`, `{1}` and `{2}`
    pub fn parse(format: &str) -> Result<Self, NoticeError> {
        let invalid = |reason: String| NoticeError::InvalidLineFormat {
            format: format.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = format.char_indices();

        while let Some((start, c)) = chars.next() {
            match c {
                '{' => {
                    let mut argument = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        argument.push(c);
                    }
                    if !closed {
                        return Err(invalid(format!("unclosed '{{' at position {}", start)));
                    }

                    let segment = match argument.trim() {
                        "0" => Segment::Indent,
                        "1" => Segment::Artifact,
                        "2" => Segment::License,
                        other => {
                            return Err(invalid(format!("unknown argument '{{{}}}'", other)));
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' => {
                    return Err(invalid(format!("unmatched '}}' at position {}", start)));
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Formats one line without the trailing newline
    pub fn format_line(&self, indent: &str, artifact: &str, license: &str) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Indent => line.push_str(indent),
                Segment::Artifact => line.push_str(artifact),
                Segment::License => line.push_str(license),
            }
        }
        line
    }
}

impl Default for NoticeLineFormat {
    fn default() -> Self {
        Self {
            segments: vec![
                Segment::Indent,
                Segment::Artifact,
                Segment::Literal(" under ".to_string()),
                Segment::License,
            ],
        }
    }
}

/// NoticeRenderer - formats resolved licenses and splices them into a template
pub struct NoticeRenderer;

impl NoticeRenderer {
    /// Renders one `\n`-terminated line per resolved artifact, in map order
    pub fn render_lines(
        resolved: &ResolvedLicenses,
        format: &NoticeLineFormat,
        indent: usize,
    ) -> String {
        let indent = " ".repeat(indent);
        let mut lines = String::new();
        for (artifact, license) in resolved.iter() {
            lines.push_str(&format.format_line(&indent, artifact, license));
            lines.push('\n');
        }
        lines
    }

    /// Replaces every occurrence of `placeholder` in the template with `lines`
    ///
    /// The replacement is literal: no character in either string is special.
    ///
    /// # Errors
    /// Returns `NoticeError::PlaceholderNotFound` if the template does not
    /// contain the placeholder
    pub fn splice(
        template: &str,
        template_name: &str,
        placeholder: &str,
        lines: &str,
    ) -> Result<String, NoticeError> {
        if placeholder.is_empty() || !template.contains(placeholder) {
            return Err(NoticeError::PlaceholderNotFound {
                template: template_name.to_string(),
                placeholder: placeholder.to_string(),
            });
        }
        Ok(template.replace(placeholder, lines))
    }
}
