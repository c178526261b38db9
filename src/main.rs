use clap::Parser;
use std::path::PathBuf;
use swatch::pipeline::CONFIG_FILE;
use swatch::types::{Brand, Mode};
use swatch::{BuildError, PipelineBuilder};

/// Builds design-token artifacts for every brand and mode.
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about)]
struct Cli {
    /// Configuration file. Defaults to ./swatch.json when it exists.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the JSON token sources.
    #[arg(long)]
    source_root: Option<PathBuf>,

    /// Directory to write generated artifacts under.
    #[arg(long)]
    output_root: Option<PathBuf>,

    /// Brands to build (comma separated).
    #[arg(long, value_delimiter = ',')]
    brand: Vec<Brand>,

    /// Modes to build (comma separated).
    #[arg(long, value_delimiter = ',')]
    mode: Vec<Mode>,

    /// Skip the Tailwind `@theme` stylesheets.
    #[arg(long)]
    no_tailwind_theme: bool,

    /// Rebuild even when outputs are up to date.
    #[arg(short, long)]
    force: bool,

    /// Run every stage except writing files.
    #[arg(long)]
    dry_run: bool,
}

fn builder(cli: &Cli) -> Result<PipelineBuilder, BuildError> {
    let mut builder = match &cli.config {
        Some(path) => PipelineBuilder::new().with_config_file(path)?,
        None if PathBuf::from(CONFIG_FILE).is_file() => PipelineBuilder::new().with_config_file(CONFIG_FILE)?,
        None => PipelineBuilder::new(),
    };
    if let Some(root) = &cli.source_root {
        builder = builder.with_source_root(root);
    }
    if let Some(root) = &cli.output_root {
        builder = builder.with_output_root(root);
    }
    if !cli.brand.is_empty() {
        builder = builder.with_brands(&cli.brand);
    }
    if !cli.mode.is_empty() {
        builder = builder.with_modes(&cli.mode);
    }
    if cli.no_tailwind_theme {
        builder = builder.with_tailwind_theme(false);
    }
    if cli.force {
        builder = builder.with_force(true);
    }
    if cli.dry_run {
        builder = builder.with_dry_run(true);
    }
    Ok(builder)
}

fn main() -> Result<(), BuildError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let report = builder(&cli)?.build()?.run()?;
    report.log_summary();
    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
