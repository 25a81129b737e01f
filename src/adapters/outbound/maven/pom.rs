use crate::shared::Result;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Coordinates of the `<parent>` a POM inherits from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomParent {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// The parts of a `pom.xml` the tool reads
///
/// Property placeholders (`${...}`) are not interpolated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomDocument {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub name: Option<String>,
    pub modules: Vec<String>,
    pub build_directory: Option<String>,
    pub licenses: Vec<String>,
    pub parent: Option<PomParent>,
}

impl PomDocument {
    /// Parses POM content with the quick-xml event API
    ///
    /// `groupId` and `version` fall back to the `<parent>` values when the
    /// project does not declare its own.
    ///
    /// # Errors
    /// Returns an error for malformed XML or a root element other than `<project>`
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut pom = PomDocument::default();
        let mut parent_group_id = None;
        let mut parent_artifact_id = None;
        let mut parent_version = None;
        let mut path: Vec<String> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let name = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                    if path.is_empty() && name != "project" {
                        anyhow::bail!("Expected <project> root element, found <{}>", name);
                    }
                    path.push(name);
                }
                Ok(Event::End(_)) => {
                    path.pop();
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape()?.trim().to_string();
                    if text.is_empty() {
                        continue;
                    }
                    let segments: Vec<&str> = path.iter().map(String::as_str).collect();
                    match segments.as_slice() {
                        ["project", "groupId"] => pom.group_id = Some(text),
                        ["project", "artifactId"] => pom.artifact_id = Some(text),
                        ["project", "version"] => pom.version = Some(text),
                        ["project", "name"] => pom.name = Some(text),
                        ["project", "parent", "groupId"] => parent_group_id = Some(text),
                        ["project", "parent", "artifactId"] => parent_artifact_id = Some(text),
                        ["project", "parent", "version"] => parent_version = Some(text),
                        ["project", "modules", "module"] => pom.modules.push(text),
                        ["project", "build", "directory"] => pom.build_directory = Some(text),
                        ["project", "licenses", "license", "name"] => pom.licenses.push(text),
                        _ => {}
                    }
                }
                Ok(Event::Eof) => {
                    if let Some(open) = path.last() {
                        anyhow::bail!("Unexpected end of document: <{}> is not closed", open);
                    }
                    break;
                }
                Err(e) => anyhow::bail!(
                    "Invalid XML at position {}: {}",
                    reader.buffer_position(),
                    e
                ),
                _ => {}
            }
        }

        if pom.group_id.is_none() {
            pom.group_id = parent_group_id.clone();
        }
        if pom.version.is_none() {
            pom.version = parent_version.clone();
        }
        if let (Some(group_id), Some(artifact_id), Some(version)) =
            (parent_group_id, parent_artifact_id, parent_version)
        {
            pom.parent = Some(PomParent {
                group_id,
                artifact_id,
                version,
            });
        }
        Ok(pom)
    }

    /// Build directory unless it still contains an uninterpolated property
    pub fn literal_build_directory(&self) -> Option<&str> {
        self.build_directory
            .as_deref()
            .filter(|dir| !dir.contains("${"))
    }

    /// Project name unless it still contains an uninterpolated property
    pub fn literal_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.contains("${"))
    }
}
