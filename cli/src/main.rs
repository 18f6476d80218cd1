//! CLI entrypoint for Meeting Protocol
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use protocol_application::{GenerateProtocolInput, GenerateProtocolUseCase, NoProgress};
use protocol_domain::SummaryFormat;
use protocol_infrastructure::{
    BlobSaver, ConfigLoader, DocxPackageWriter, FileConfig, JsonInputLoader, QrCodeRenderer,
};
use protocol_presentation::{Cli, ConsoleFormatter, OutputConfig, ProgressReporter};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    info!("Starting Meeting Protocol");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let config = load_config(&cli)?;
        println!();
        println!("Effective configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let config = load_config(&cli)?;

    let output_config = OutputConfig {
        summary: cli.summary_format(config.output.summary),
        color: config.output.color,
        show_progress: !cli.quiet,
    };
    if !output_config.color {
        colored::control::set_override(false);
    }

    // Load meeting data
    let input_path = cli
        .input
        .as_deref()
        .context("INPUT is required unless --show-config is given")?;
    let protocol = JsonInputLoader::new().load(input_path)?;

    let input = GenerateProtocolInput::new(protocol, config.company.clone())
        .with_document_options(cli.document_options(config.document))
        .with_qr_options(config.qr_options());

    let mut params = config.generation_params();
    if let Some(limit) = cli.concurrency {
        params = params.with_render_concurrency(limit);
    }

    // === Dependency Injection ===
    let use_case = GenerateProtocolUseCase::new(
        Arc::new(QrCodeRenderer::new()),
        Arc::new(DocxPackageWriter::new()),
    )
    .with_params(params);

    // Ctrl-C cancels the run before anything is saved
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            on_interrupt.cancel();
        }
    });

    // Execute with or without progress reporting
    let output = if output_config.show_progress {
        let progress = ProgressReporter::new();
        use_case
            .execute_with_cancellation(input, &progress, cancel)
            .await?
    } else {
        use_case
            .execute_with_cancellation(input, &NoProgress, cancel)
            .await?
    };

    let dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.dir.clone());
    let saved_to = BlobSaver::new(dir).save(&output.document)?;

    // Output results
    match output_config.summary {
        SummaryFormat::Text => println!("{}", ConsoleFormatter::format(&output, &saved_to)),
        SummaryFormat::Json => println!("{}", ConsoleFormatter::format_json(&output, &saved_to)),
        SummaryFormat::None => {}
    }

    Ok(())
}

/// Install the stderr subscriber and, with `--log-file`, a file writer
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("--log-file must name a file: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Merge and validate file configuration (defaults only with `--no-config`)
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
