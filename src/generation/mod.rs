//! Documentation generation pipeline

pub mod builder;
pub mod engine;
pub mod fields;
pub mod template;

pub use builder::{build_context, computed_context, default_context};
pub use engine::{
    generate_step_documentation, render_document, BatchSummary, DocGenerator, GenerationEvent,
    GenerationFailure, GenerationReport,
};
pub use template::{adapt_template, substitute};
