//! Step metadata loaded from YAML

use crate::error::{DocGenError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashSet;
use std::path::Path;

/// Top-level step metadata as defined in YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepData {
    /// Step identification and descriptions
    pub metadata: StepMetadata,

    /// Inputs, containers and sidecars
    #[serde(default)]
    pub spec: StepSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepMetadata {
    /// Step name, also the base name of the documentation file
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Long description (Markdown)
    #[serde(default)]
    pub long_description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepSpec {
    #[serde(default)]
    pub inputs: StepInputs,

    #[serde(default)]
    pub containers: Vec<Container>,

    #[serde(default)]
    pub sidecars: Vec<Container>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepInputs {
    #[serde(default)]
    pub params: Vec<StepParameter>,

    #[serde(default)]
    pub resources: Vec<StepResource>,
}

/// A single step parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepParameter {
    pub name: String,

    #[serde(default, rename = "type")]
    pub param_type: String,

    #[serde(default)]
    pub description: String,

    /// Default value; any YAML value, absent when not declared
    #[serde(default)]
    pub default: Option<Value>,

    #[serde(default)]
    pub mandatory: bool,

    /// Configuration layers in which the parameter may be set
    #[serde(default)]
    pub scope: Vec<Scope>,

    #[serde(default)]
    pub possible_values: Vec<Value>,

    #[serde(default)]
    pub aliases: Vec<Alias>,
}

impl StepParameter {
    /// Check whether the parameter is visible in the given scope
    pub fn has_scope(&self, scope: Scope) -> bool {
        self.scope.contains(&scope)
    }

    /// Mandatory parameters that ship a default never need to be set
    pub fn is_required(&self) -> bool {
        self.mandatory && self.default.as_ref().map_or(true, Value::is_null)
    }
}

/// Configuration layer a parameter is visible in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    General,
    Steps,
    Stages,
    Parameters,
    #[serde(other)]
    Unknown,
}

/// Alternative (usually deprecated) name of a parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,

    #[serde(default)]
    pub deprecated: bool,
}

/// A resource consumed by the step, e.g. a stash
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepResource {
    pub name: String,

    #[serde(default, rename = "type")]
    pub resource_type: String,

    #[serde(default)]
    pub description: String,
}

impl StepResource {
    pub fn is_stash(&self) -> bool {
        self.resource_type == "stash"
    }
}

/// Container or sidecar definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub name: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub command: Vec<String>,

    #[serde(default)]
    pub working_dir: String,

    #[serde(default)]
    pub shell: String,

    #[serde(default)]
    pub image_pull_policy: String,

    /// Readiness check command (sidecars)
    #[serde(default)]
    pub ready_command: String,

    #[serde(default, rename = "env")]
    pub env_vars: Vec<EnvVar>,

    /// Guards selecting this container variant
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,

    #[serde(default)]
    pub value: String,
}

/// Condition under which a container configuration applies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(default)]
    pub condition_ref: Option<String>,

    #[serde(default)]
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,

    #[serde(default)]
    pub value: String,
}

impl StepData {
    /// Load step metadata from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DocGenError::MetadataRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse step metadata from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let data: StepData = serde_yaml::from_str(yaml)?;
        data.validate()?;
        Ok(data)
    }

    /// Validate the step metadata
    pub fn validate(&self) -> Result<()> {
        if self.metadata.name.trim().is_empty() {
            return Err(DocGenError::InvalidMetadata(
                "Step name must not be empty".to_string(),
            ));
        }

        // the name becomes a file name next to the templates
        let name = &self.metadata.name;
        if name.contains(&['/', '\\'][..]) || name == "." || name.contains("..") {
            return Err(DocGenError::InvalidMetadata(format!(
                "Step name '{}' must not contain path separators or '..'",
                name
            )));
        }

        let mut seen = HashSet::new();
        for param in &self.spec.inputs.params {
            if param.name.trim().is_empty() {
                return Err(DocGenError::InvalidMetadata(format!(
                    "Step '{}' declares a parameter without a name",
                    self.metadata.name
                )));
            }
            if !seen.insert(param.name.as_str()) {
                return Err(DocGenError::InvalidMetadata(format!(
                    "Step '{}' declares duplicate parameter '{}'",
                    self.metadata.name, param.name
                )));
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn parameters(&self) -> &[StepParameter] {
        &self.spec.inputs.params
    }

    pub fn resources(&self) -> &[StepResource] {
        &self.spec.inputs.resources
    }

    pub fn containers(&self) -> &[Container] {
        &self.spec.containers
    }

    pub fn sidecars(&self) -> &[Container] {
        &self.spec.sidecars
    }
}
