//! Configuration file support for license-notice.
//!
//! Provides YAML-based configuration through `license-notice.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use license_notice::shared::Result;

pub const CONFIG_FILENAME: &str = "license-notice.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub license_lookup: Option<Vec<String>>,
    pub notice_template: Option<String>,
    pub placeholder: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub file_name: Option<String>,
    pub indent: Option<usize>,
    pub encoding: Option<String>,
    pub aggregate: Option<bool>,
    /// Positional line format, e.g. `"{0}{1} under {2}"`
    pub notice_message: Option<String>,
    pub excluded_module_paths: Option<Vec<String>>,
    pub dependency_tree_file: Option<PathBuf>,
    pub maven_repository: Option<PathBuf>,
    pub pom_fallback: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref sources) = config.license_lookup {
        for (i, source) in sources.iter().enumerate() {
            if source.trim().is_empty() {
                bail!(
                    "Invalid config: license_lookup[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is a file path relative to the project or an http(s) URL.",
                    i
                );
            }
        }
    }
    if let Some(ref patterns) = config.excluded_module_paths {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: excluded_module_paths[{}] must not be empty.\n\n\
                     💡 Hint: Use module paths relative to the root project, e.g. \"samples/*\".",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
