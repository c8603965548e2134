mod logging;
mod output;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use mdmeta_core::config::{ConfigLoader, ResolvedConfig, validate_temperature};
use mdmeta_core::generation::{GenerationError, OpenAiGenerator};
use mdmeta_core::{Outcome, RunOptions, process};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(
    name = "mdmeta",
    version,
    about = "Write description and keywords head metadata into markdown front matter"
)]
struct Cli {
    /// Markdown file containing front matter
    file: PathBuf,

    /// Model used to generate the metadata
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature for the model (0.0 to 2.0)
    #[arg(long)]
    temperature: Option<f64>,

    /// Override existing head metadata if present
    #[arg(long = "override")]
    override_existing: bool,

    /// Replace content in the file directly
    #[arg(long)]
    inplace: bool,

    /// Path to config.toml (defaults to ~/.config/mdmeta/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn run_options(&self, cfg: &ResolvedConfig) -> Result<RunOptions> {
        let mut options = RunOptions::from_config(&cfg.generation);
        if let Some(model) = &self.model {
            options.model = model.clone();
        }
        if let Some(temperature) = self.temperature {
            options.temperature = validate_temperature(temperature)?;
        }
        options.override_existing = self.override_existing;
        Ok(options)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let cfg = ConfigLoader::load(cli.config.as_deref()).wrap_err("failed to load configuration")?;
    logging::init(&cfg.logging);
    debug!(source = ?cfg.source, "configuration resolved");

    let options = cli.run_options(&cfg)?;

    let generator = match OpenAiGenerator::from_config(&cfg.generation) {
        Ok(g) => g,
        Err(GenerationError::MissingCredential(var)) => {
            eprintln!("Error: The environment variable {var} is not set.");
            std::process::exit(1);
        }
        Err(e) => return Err(e).wrap_err("failed to set up the generation client"),
    };

    let content = fs::read_to_string(&cli.file)
        .wrap_err_with(|| format!("failed to read {}", cli.file.display()))?;

    let outcome = process(&content, &generator, &options)
        .wrap_err_with(|| format!("failed to process {}", cli.file.display()))?;

    match outcome {
        Outcome::AlreadyProcessed => {
            eprintln!(
                "Warning: 'head' is already set up in {}. Use --override to overwrite.",
                cli.file.display()
            );
        }
        Outcome::Updated { document, metadata } => {
            debug!(description = %metadata.description, keywords = %metadata.keywords, "generated");
            if cli.inplace {
                output::replace_file(&cli.file, &document)
                    .wrap_err_with(|| format!("failed to write {}", cli.file.display()))?;
                info!(path = %cli.file.display(), "updated in place");
            } else {
                output::write_stdout(&document).wrap_err("failed to write to stdout")?;
            }
        }
    }

    Ok(())
}
