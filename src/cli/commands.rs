//! CLI command definitions

use crate::core::GeneratorConfig;
use clap::Args;
use std::path::PathBuf;

/// Generate documentation
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Step metadata YAML file, or a directory of them
    #[arg(short, long)]
    pub metadata: Option<PathBuf>,

    /// Directory containing `<stepName>.md` templates
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Directory for generated documents (defaults to the template directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Apply command line overrides on top of file configuration
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(templates) = &self.templates {
            config.template_dir = templates.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = Some(output.clone());
        }
        if let Some(metadata) = &self.metadata {
            config.metadata = Some(metadata.clone());
        }
        config
    }
}

/// Validate step metadata
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to step metadata YAML file
    #[arg(short, long)]
    pub metadata: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Show computed placeholder values
#[derive(Debug, Args, Clone)]
pub struct ContextCommand {
    /// Path to step metadata YAML file
    #[arg(short, long)]
    pub metadata: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
