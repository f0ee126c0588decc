//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{ContextCommand, GenerateCommand, ValidateCommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Markdown documentation generator for pipeline steps
#[derive(Debug, Parser, Clone)]
#[command(name = "stepdoc")]
#[command(author = "stepdoc Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Generate Markdown documentation from step metadata", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to generator configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate documentation for one step or a directory of steps
    Generate(GenerateCommand),

    /// Validate step metadata
    Validate(ValidateCommand),

    /// Show the placeholder values computed for a step
    Context(ContextCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
