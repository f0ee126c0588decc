//! Documentation context - placeholder keys and their rendered values

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Every placeholder the generator knows how to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocKey {
    // Computed from step metadata
    DocGenStepName,
    DocGenDescription,
    DocGenParameters,
    DocGenConfiguration,

    // Containers
    DockerName,
    DockerImage,
    DockerWorkspace,
    ContainerShell,
    ContainerCommand,
    DockerPullImage,
    DockerEnvVars,

    // Sidecars
    SidecarName,
    SidecarImage,
    SidecarWorkspace,
    SidecarCommand,
    SidecarReadyCommand,
    SidecarPullImage,
    SidecarEnvVars,

    // Resources
    StashContent,
}

impl DocKey {
    pub const ALL: [DocKey; 19] = [
        DocKey::DocGenStepName,
        DocKey::DocGenDescription,
        DocKey::DocGenParameters,
        DocKey::DocGenConfiguration,
        DocKey::DockerName,
        DocKey::DockerImage,
        DocKey::DockerWorkspace,
        DocKey::ContainerShell,
        DocKey::ContainerCommand,
        DocKey::DockerPullImage,
        DocKey::DockerEnvVars,
        DocKey::SidecarName,
        DocKey::SidecarImage,
        DocKey::SidecarWorkspace,
        DocKey::SidecarCommand,
        DocKey::SidecarReadyCommand,
        DocKey::SidecarPullImage,
        DocKey::SidecarEnvVars,
        DocKey::StashContent,
    ];

    /// Keys that templates may still reference in legacy `{{name .}}` form
    pub const COMPUTED: [DocKey; 4] = [
        DocKey::DocGenStepName,
        DocKey::DocGenDescription,
        DocKey::DocGenParameters,
        DocKey::DocGenConfiguration,
    ];

    /// Placeholder name as written in templates
    pub fn as_str(&self) -> &'static str {
        match self {
            DocKey::DocGenStepName => "docGenStepName",
            DocKey::DocGenDescription => "docGenDescription",
            DocKey::DocGenParameters => "docGenParameters",
            DocKey::DocGenConfiguration => "docGenConfiguration",
            DocKey::DockerName => "dockerName",
            DocKey::DockerImage => "dockerImage",
            DocKey::DockerWorkspace => "dockerWorkspace",
            DocKey::ContainerShell => "containerShell",
            DocKey::ContainerCommand => "containerCommand",
            DocKey::DockerPullImage => "dockerPullImage",
            DocKey::DockerEnvVars => "dockerEnvVars",
            DocKey::SidecarName => "sidecarName",
            DocKey::SidecarImage => "sidecarImage",
            DocKey::SidecarWorkspace => "sidecarWorkspace",
            DocKey::SidecarCommand => "sidecarCommand",
            DocKey::SidecarReadyCommand => "sidecarReadyCommand",
            DocKey::SidecarPullImage => "sidecarPullImage",
            DocKey::SidecarEnvVars => "sidecarEnvVars",
            DocKey::StashContent => "stashContent",
        }
    }
}

impl fmt::Display for DocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder name that is not part of the generator's vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl FromStr for DocKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

impl Serialize for DocKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Rendered placeholder values for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocuContext {
    values: BTreeMap<DocKey, String>,
}

impl DocuContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: DocKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: DocKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: DocKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Merge another context in; its values win on conflict
    pub fn extend(&mut self, other: DocuContext) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
