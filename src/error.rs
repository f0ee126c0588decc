//! Error types for documentation generation

use std::path::PathBuf;
use thiserror::Error;

/// Error types for documentation generation
#[derive(Debug, Error)]
pub enum DocGenError {
    #[error("Template not found for step '{step}': {path}")]
    TemplateNotFound {
        step: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write documentation for step '{step}' to {path}")]
    WriteFailure {
        step: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata {path}")]
    MetadataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse step metadata")]
    MetadataParse(#[from] serde_yaml::Error),

    #[error("Invalid step metadata: {0}")]
    InvalidMetadata(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DocGenError {
    /// Whether this error came from the template-open collaborator
    pub fn is_template_not_found(&self) -> bool {
        matches!(self, DocGenError::TemplateNotFound { .. })
    }

    /// Whether this error came from the document writer
    pub fn is_write_failure(&self) -> bool {
        matches!(self, DocGenError::WriteFailure { .. })
    }

    /// This error followed by its causes, joined with `: `
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(e) = cause {
            message.push_str(": ");
            message.push_str(&e.to_string());
            cause = e.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, DocGenError>;
