use super::pom::PomDocument;
use crate::notice_generation::domain::Project;
use crate::ports::outbound::ProjectReader;
use crate::shared::error::NoticeError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use anyhow::Context;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Project descriptor file name
pub const POM_FILE_NAME: &str = "pom.xml";

/// Deepest `<modules>` nesting that is followed
const MAX_MODULE_NESTING: usize = 64;

/// PomProjectReader adapter building the module tree from `pom.xml` files
///
/// Each `<module>` entry is resolved against the declaring POM's directory.
/// The returned root is marked as the execution root.
pub struct PomProjectReader;

impl PomProjectReader {
    pub fn new() -> Self {
        Self
    }

    fn read_module(
        &self,
        base_dir: &Path,
        module_path: &str,
        depth: usize,
        visited: &mut HashSet<PathBuf>,
    ) -> Result<Project> {
        if depth > MAX_MODULE_NESTING {
            anyhow::bail!(
                "Module nesting exceeds {} levels at {}",
                MAX_MODULE_NESTING,
                base_dir.display()
            );
        }

        let pom_path = base_dir.join(POM_FILE_NAME);
        let canonical = pom_path
            .canonicalize()
            .with_context(|| format!("Failed to locate {}", pom_path.display()))?;
        if !visited.insert(canonical) {
            anyhow::bail!(
                "Module cycle detected: {} is already part of the build",
                pom_path.display()
            );
        }

        let bytes = read_checked_file(&pom_path, "POM file")?;
        let content = String::from_utf8(bytes)
            .map_err(|e| anyhow::anyhow!("{} is not valid UTF-8: {}", pom_path.display(), e))?;
        let pom = PomDocument::parse(&content)
            .with_context(|| format!("Failed to parse {}", pom_path.display()))?;

        let name = pom
            .artifact_id
            .clone()
            .ok_or_else(|| anyhow::anyhow!("{} has no <artifactId>", pom_path.display()))?;

        let mut project = Project::new(name, base_dir).with_module_path(module_path);
        if let Some(directory) = pom.literal_build_directory() {
            project = project.with_build_dir(base_dir.join(directory));
        }

        for module in &pom.modules {
            let relative = module_dir(module);
            let child_path = join_module_path(module_path, &relative);
            let child =
                self.read_module(&base_dir.join(&relative), &child_path, depth + 1, visited)?;
            project = project.with_module(child);
        }

        Ok(project)
    }
}

impl Default for PomProjectReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectReader for PomProjectReader {
    fn read_project(&self, project_dir: &Path) -> Result<Project> {
        if !project_dir.join(POM_FILE_NAME).is_file() {
            return Err(NoticeError::InvalidProjectPath {
                path: project_dir.to_path_buf(),
                reason: format!("No {} found", POM_FILE_NAME),
            }
            .into());
        }

        let mut visited = HashSet::new();
        let project = self.read_module(project_dir, "", 0, &mut visited)?;
        Ok(project.as_execution_root())
    }
}

/// Directory of a `<module>` entry, which may also name the POM file itself
fn module_dir(module: &str) -> PathBuf {
    let path = Path::new(module);
    if path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("xml"))
    {
        path.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        path.to_path_buf()
    }
}

/// Appends a module directory to a `/`-separated module path
fn join_module_path(parent: &str, relative: &Path) -> String {
    let mut segments: Vec<String> = parent
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
            Component::ParentDir => {
                segments.pop();
            }
            _ => {}
        }
    }
    segments.join("/")
}
