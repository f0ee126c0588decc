use anyhow::{Context, Result};
use stepdoc::cli::commands::{ContextCommand, GenerateCommand, ValidateCommand};
use stepdoc::cli::output::*;
use stepdoc::cli::{Cli, Command};
use stepdoc::core::{GeneratorConfig, StepData};
use stepdoc::generation::{build_context, DocGenerator};
use stepdoc::storage::FsDocFiles;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Generate(cmd) => generate_docs(cmd, &cli)?,
        Command::Validate(cmd) => validate_metadata(cmd)?,
        Command::Context(cmd) => show_context(cmd)?,
    }

    Ok(())
}

fn generate_docs(cmd: &GenerateCommand, cli: &Cli) -> Result<()> {
    let config = GeneratorConfig::load(cli.config.as_deref())
        .context("Failed to load generator config")?;
    let config = cmd.apply(config);

    let metadata = config
        .metadata
        .clone()
        .context("No step metadata given; pass --metadata or set metadata in the config")?;

    let mut generator = DocGenerator::new(config, FsDocFiles, FsDocFiles);

    if metadata.is_dir() {
        let total = stepdoc::generation::engine::metadata_files(&metadata)?.len();
        let progress = create_progress_bar(total);
        let bar = progress.clone();
        generator.add_event_handler(move |event| {
            bar.println(format_generation_event(event));
            if !matches!(event, stepdoc::GenerationEvent::StepStarted { .. }) {
                bar.inc(1);
            }
        });

        let summary = generator
            .generate_all(&metadata)
            .with_context(|| format!("Failed to generate documentation from {}", metadata.display()))?;
        progress.finish_and_clear();

        println!("\n{}", format_batch_summary(&summary));
        if !summary.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    generator.add_event_handler(|event| println!("{}", format_generation_event(event)));

    let step = StepData::from_file(&metadata)
        .with_context(|| format!("Failed to load step metadata {}", metadata.display()))?;

    if let Err(e) = generator.generate(&step) {
        error!("{}", e.report());
        std::process::exit(1);
    }

    Ok(())
}

fn validate_metadata(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating step metadata...", INFO);

    match StepData::from_file(&cmd.metadata) {
        Ok(step) => {
            println!("{} Step metadata is valid!", CHECK);
            println!("  Name: {}", style(step.name()).bold());
            println!("  Parameters: {}", style(step.parameters().len()).cyan());
            println!("  Containers: {}", style(step.containers().len()).cyan());
            println!("  Sidecars: {}", style(step.sidecars().len()).cyan());

            if cmd.json {
                let json = serde_json::to_string_pretty(&step)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(e.report()).red());
            std::process::exit(1);
        }
    }
}

fn show_context(cmd: &ContextCommand) -> Result<()> {
    let step = StepData::from_file(&cmd.metadata)
        .with_context(|| format!("Failed to load step metadata {}", cmd.metadata.display()))?;
    let ctx = build_context(&step);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
    } else {
        println!("{} Context for {}:", INFO, style(step.name()).bold());
        println!("{}", format_context(&ctx));
    }

    Ok(())
}
