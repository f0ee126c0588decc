//! Core domain models for step documentation
//!
//! This module defines the step metadata read from YAML, the guard model
//! for container variants, the placeholder vocabulary and the generator
//! configuration.

pub mod config;
pub mod condition;
pub mod context;
pub mod metadata;

pub use config::GeneratorConfig;
pub use condition::Guard;
pub use context::{DocKey, DocuContext};
pub use metadata::*;
