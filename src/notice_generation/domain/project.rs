use std::path::{Path, PathBuf};

/// Default build output directory, relative to a project's base directory
pub const DEFAULT_BUILD_DIRECTORY: &str = "target";

/// Project aggregate: one module of a (possibly multi-module) build and its sub-modules
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    name: String,
    base_dir: PathBuf,
    build_dir: PathBuf,
    module_path: String,
    execution_root: bool,
    modules: Vec<Project>,
}

impl Project {
    pub fn new(name: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            name: name.into(),
            build_dir: base_dir.join(DEFAULT_BUILD_DIRECTORY),
            base_dir,
            module_path: String::new(),
            execution_root: false,
            modules: Vec::new(),
        }
    }

    /// Marks this project as the one the run was started on
    pub fn as_execution_root(mut self) -> Self {
        self.execution_root = true;
        self
    }

    pub fn with_build_dir(mut self, build_dir: impl Into<PathBuf>) -> Self {
        self.build_dir = build_dir.into();
        self
    }

    /// Sets the `/`-separated path of this module relative to the execution root
    pub fn with_module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = module_path.into();
        self
    }

    pub fn with_module(mut self, module: Project) -> Self {
        self.modules.push(module);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn is_execution_root(&self) -> bool {
        self.execution_root
    }

    pub fn modules(&self) -> &[Project] {
        &self.modules
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.module_path.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.module_path)
        }
    }
}
