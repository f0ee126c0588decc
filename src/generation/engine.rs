//! Documentation generator - drives one step from template to written document

use crate::{
    core::{config::GeneratorConfig, metadata::StepData},
    error::{DocGenError, Result},
    generation::{builder::build_context, template},
    storage::{DocWriter, TemplateSource},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Events emitted while generating documentation
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    StepStarted {
        step_name: String,
    },
    StepGenerated {
        report: GenerationReport,
    },
    StepFailed {
        source: String,
        error: String,
    },
}

/// Type for event handlers
pub type EventHandler = Box<dyn Fn(&GenerationEvent)>;

/// Outcome of generating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub step_name: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// A metadata file that could not be turned into documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationFailure {
    pub metadata: PathBuf,
    pub error: String,
}

/// Outcome of generating documentation for a directory of steps
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub generated: Vec<GenerationReport>,
    pub failed: Vec<GenerationFailure>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.generated.len() + self.failed.len()
    }
}

/// Documentation generator
pub struct DocGenerator<S, W> {
    config: GeneratorConfig,
    source: S,
    writer: W,
    event_handlers: Vec<EventHandler>,
}

impl<S: TemplateSource, W: DocWriter> DocGenerator<S, W> {
    pub fn new(config: GeneratorConfig, source: S, writer: W) -> Self {
        Self {
            config,
            source,
            writer,
            event_handlers: Vec::new(),
        }
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(&GenerationEvent) + 'static,
    {
        self.event_handlers.push(Box::new(handler));
    }

    fn emit(&self, event: GenerationEvent) {
        for handler in &self.event_handlers {
            handler(&event);
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Generate the documentation for one step
    pub fn generate(&self, step: &StepData) -> Result<GenerationReport> {
        self.emit(GenerationEvent::StepStarted {
            step_name: step.name().to_string(),
        });

        match generate_step_documentation(step, &self.config, &self.source, &self.writer) {
            Ok(report) => {
                self.emit(GenerationEvent::StepGenerated {
                    report: report.clone(),
                });
                Ok(report)
            }
            Err(e) => {
                self.emit(GenerationEvent::StepFailed {
                    source: step.name().to_string(),
                    error: e.report(),
                });
                Err(e)
            }
        }
    }

    /// Generate documentation for every metadata file in a directory.
    ///
    /// Files are processed in name order; a failing step is recorded and
    /// the batch continues.
    pub fn generate_all(&self, metadata_dir: &Path) -> Result<BatchSummary> {
        let files = metadata_files(metadata_dir)?;
        info!(count = files.len(), dir = %metadata_dir.display(), "Generating step documentation");

        let mut summary = BatchSummary::default();
        for file in files {
            let outcome = StepData::from_file(&file).and_then(|step| self.generate(&step));
            match outcome {
                Ok(report) => summary.generated.push(report),
                Err(e) => {
                    warn!(metadata = %file.display(), error = %e.report(), "Skipping step");
                    // generate() already reported its own failures
                    let metadata_error = matches!(
                        e,
                        DocGenError::MetadataRead { .. }
                            | DocGenError::MetadataParse(_)
                            | DocGenError::InvalidMetadata(_)
                    );
                    if metadata_error {
                        self.emit(GenerationEvent::StepFailed {
                            source: file.display().to_string(),
                            error: e.report(),
                        });
                    }
                    summary.failed.push(GenerationFailure {
                        metadata: file,
                        error: e.report(),
                    });
                }
            }
        }

        Ok(summary)
    }
}

/// Generate the documentation for one step with explicit collaborators.
///
/// Reads `<templateDir>/<stepName>.md`, fills in the placeholders and
/// writes the result to the output path. Nothing is written when the
/// template cannot be read.
pub fn generate_step_documentation<S, W>(
    step: &StepData,
    config: &GeneratorConfig,
    source: &S,
    writer: &W,
) -> Result<GenerationReport>
where
    S: TemplateSource + ?Sized,
    W: DocWriter + ?Sized,
{
    let step_name = step.name();
    let template_path = config.template_path(step_name);
    debug!(step = step_name, template = %template_path.display(), "Reading template");

    let raw = source
        .open_template(&template_path)
        .map_err(|e| DocGenError::TemplateNotFound {
            step: step_name.to_string(),
            path: template_path.clone(),
            source: e,
        })?;

    let document = render_document(step, &raw);

    let output_path = config.output_path(step_name);
    writer
        .write_doc(&output_path, &document)
        .map_err(|e| DocGenError::WriteFailure {
            step: step_name.to_string(),
            path: output_path.clone(),
            source: e,
        })?;

    info!(step = step_name, path = %output_path.display(), "Documentation generated");
    Ok(GenerationReport {
        step_name: step_name.to_string(),
        path: output_path,
        bytes: document.len(),
    })
}

/// Render a raw template for a step without touching any files
pub fn render_document(step: &StepData, raw_template: &str) -> String {
    let adapted = template::adapt_template(raw_template);
    let ctx = build_context(step);
    template::substitute(&adapted, &ctx)
}

/// YAML files directly inside a directory, sorted by name
pub fn metadata_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| DocGenError::MetadataRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| DocGenError::MetadataRead {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext == "yaml" || ext == "yml");
        if path.is_file() && is_yaml {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryDocFiles;
    use std::cell::RefCell;
    use std::rc::Rc;

    const META: &str = r#"
metadata:
  name: testStep
  description: Test description
spec:
  inputs:
    params:
      - name: param0
        default: val0
        scope:
        - GENERAL
"#;

    #[test]
    fn test_generate_writes_same_path() {
        let files = InMemoryDocFiles::new().with_file("testStep.md", "# ${docGenStepName}\n");
        let step = StepData::from_yaml(META).unwrap();
        let config = GeneratorConfig::default().with_template_dir("");

        let report = generate_step_documentation(&step, &config, &files, &files).unwrap();

        assert_eq!(report.path, PathBuf::from("testStep.md"));
        assert_eq!(files.get("testStep.md"), Some("# testStep\n".to_string()));
        assert_eq!(report.bytes, "# testStep\n".len());
    }

    #[test]
    fn test_missing_template_writes_nothing() {
        let files = InMemoryDocFiles::new();
        let step = StepData::from_yaml(META).unwrap();
        let config = GeneratorConfig::default().with_template_dir("Dummy");

        let err = generate_step_documentation(&step, &config, &files, &files).unwrap_err();

        assert!(err.is_template_not_found());
        assert_eq!(files.write_count(), 0);
    }

    #[test]
    fn test_events_emitted() {
        let files = InMemoryDocFiles::new().with_file("testStep.md", "${docGenStepName}");
        let step = StepData::from_yaml(META).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut generator =
            DocGenerator::new(GeneratorConfig::default().with_template_dir(""), files, InMemoryDocFiles::new());
        let sink = Rc::clone(&seen);
        generator.add_event_handler(move |event| {
            let label = match event {
                GenerationEvent::StepStarted { .. } => "started",
                GenerationEvent::StepGenerated { .. } => "generated",
                GenerationEvent::StepFailed { .. } => "failed",
            };
            sink.borrow_mut().push(label);
        });

        generator.generate(&step).unwrap();
        assert_eq!(*seen.borrow(), vec!["started", "generated"]);
        assert_eq!(generator.writer().get("testStep.md"), Some("testStep".to_string()));
    }

    #[test]
    fn test_render_document_idempotent() {
        let step = StepData::from_yaml(META).unwrap();
        let raw = "# {{docGenStepName .}}\n## ${docGenParameters}\n${unknown}\n";

        let first = render_document(&step, raw);
        let second = render_document(&step, raw);
        assert_eq!(first, second);
        assert!(first.starts_with("# testStep\n## Parameters"));
        assert!(first.ends_with("${unknown}\n"));
    }
}
