//! CLI output formatting

use crate::core::DocuContext;
use crate::generation::{BatchSummary, GenerationEvent};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");

/// Create a progress bar for batch generation
pub fn create_progress_bar(total: usize) -> ProgressBar {
    let progress = ProgressBar::new(total as u64);
    let template = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}");
    if let Ok(bar_style) = template {
        progress.set_style(bar_style.progress_chars("#>-"));
    }
    progress
}

/// Format a generation event for display
pub fn format_generation_event(event: &GenerationEvent) -> String {
    match event {
        GenerationEvent::StepStarted { step_name } => {
            format!("{} {}", INFO, style(step_name).cyan())
        }
        GenerationEvent::StepGenerated { report } => format!(
            "{} {} → {} ({} bytes)",
            CHECK,
            style(&report.step_name).green(),
            style(report.path.display()).dim(),
            report.bytes
        ),
        GenerationEvent::StepFailed { source, error } => {
            format!("{} {}: {}", CROSS, style(source).red(), style(error).dim())
        }
    }
}

/// Format the result of a batch run
pub fn format_batch_summary(summary: &BatchSummary) -> String {
    let icon = if summary.is_success() { CHECK } else { WARN };
    format!(
        "{} {} of {} steps documented, {} failed",
        icon,
        style(summary.generated.len()).green(),
        summary.total(),
        style(summary.failed.len()).red()
    )
}

/// Format a context as a `key: value` listing
pub fn format_context(ctx: &DocuContext) -> String {
    ctx.iter()
        .map(|(key, value)| format!("{}: {}", style(key).bold(), value))
        .collect::<Vec<_>>()
        .join("\n")
}
