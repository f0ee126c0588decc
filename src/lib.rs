//! stepdoc - Markdown documentation generator for pipeline steps

pub mod cli;
pub mod core;
pub mod error;
pub mod generation;
pub mod storage;

// Re-export commonly used types
pub use core::{DocKey, DocuContext, GeneratorConfig, StepData};
pub use error::{DocGenError, Result};
pub use generation::{generate_step_documentation, DocGenerator, GenerationEvent, GenerationReport};
pub use storage::{DocWriter, FsDocFiles, InMemoryDocFiles, TemplateSource};
