//! Generator configuration from YAML

use crate::error::{DocGenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where templates, metadata and generated documents live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory containing `<stepName>.md` templates
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Directory for generated documents; the template is overwritten in place when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Step metadata file, or a directory scanned for metadata files
    #[serde(default, alias = "metadata_dir")]
    pub metadata: Option<PathBuf>,
}

fn default_template_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            output_dir: None,
            metadata: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DocGenError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| DocGenError::Config(e.to_string()))
    }

    /// Default location: `<config dir>/stepdoc/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stepdoc").join("config.yaml"))
    }

    /// Load from an explicit path, else from the default location if it exists,
    /// else fall back to defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading generator config");
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading generator config from default location");
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Path of the template for a step
    pub fn template_path(&self, step_name: &str) -> PathBuf {
        self.template_dir.join(format!("{}.md", step_name))
    }

    /// Path the generated document is written to
    pub fn output_path(&self, step_name: &str) -> PathBuf {
        self.output_dir
            .as_ref()
            .unwrap_or(&self.template_dir)
            .join(format!("{}.md", step_name))
    }
}
