use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{resolve_settings_path, GeneratorSettings};
use crate::generator::{CodeGenOutput, PythonGenerator};
use crate::model::load_model;

/// Command-line interface for the Python client generator
#[derive(Parser)]
#[command(name = "fsdgen-python")]
#[command(about = "Generate Python clients from Facility service models", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Python client module from a service model
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the service model (YAML or JSON)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Output directory for generated files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to a settings file (fsdgen-python.toml)
    /// If not provided, will auto-detect alongside the model
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Skip HTTP client generation
    #[arg(long, default_value_t = false)]
    pub no_http: bool,

    /// Name written into the generated-file marker comment
    #[arg(long)]
    pub generator_name: Option<String>,

    /// Show which files would be written without writing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Layer defaults, the settings file, environment and flags.
    fn settings(&self) -> anyhow::Result<GeneratorSettings> {
        let mut settings = match resolve_settings_path(self.settings.as_deref(), &self.model) {
            Some(path) => {
                let mut settings = GeneratorSettings::load(&path)?;
                settings.apply_env();
                settings
            }
            None => GeneratorSettings::from_env(),
        };
        if self.no_http {
            settings.no_http = true;
        }
        if let Some(name) = &self.generator_name {
            settings.generator_name = name.clone();
        }
        Ok(settings)
    }
}

/// Parse the process arguments and run the selected command.
///
/// # Errors
///
/// See [`run`].
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}

/// Run a parsed command line.
///
/// # Errors
///
/// Returns an error if:
/// - The model or settings file cannot be read or parsed
/// - Generation fails (model contract violation or template error)
/// - An output file cannot be written
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => {
            let written = generate_command(&args)?;
            if args.dry_run {
                for path in &written {
                    println!("would write {}", path.display());
                }
            }
            Ok(())
        }
    }
}

/// Generate and write the output for `args`.
///
/// Returns the paths of the files written, or that would be written on a
/// dry run.
///
/// # Errors
///
/// See [`run`].
pub fn generate_command(args: &GenerateArgs) -> anyhow::Result<Vec<PathBuf>> {
    let settings = args.settings()?;
    let model = load_model(&args.model)
        .with_context(|| format!("Failed to load model: {}", args.model.display()))?;

    let generator = PythonGenerator::from_settings(&settings);
    let output = generator
        .generate_output(model.service, model.http_service)
        .context("Failed to generate python output")?;

    if args.dry_run {
        return Ok(output_paths(&output, &args.output));
    }
    write_output(&output, &args.output)
}

fn output_paths(output: &CodeGenOutput, dir: &Path) -> Vec<PathBuf> {
    output.files.iter().map(|file| dir.join(&file.name)).collect()
}

fn write_output(output: &CodeGenOutput, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(output.files.len());
    for file in &output.files {
        let path = dir.join(&file.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, file.text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote file");
        written.push(path);
    }
    Ok(written)
}
