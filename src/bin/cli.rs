use anyhow::{Context, Result};
use clap::Parser;
use fhir_profile_docs::{DocsConfig, DocsGenerator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fhir-profile-docs")]
#[command(about = "Generate markdown pages for FHIR profiles, code systems and value sets")]
#[command(version)]
struct Cli {
    /// Repository root that relative paths are resolved against
    #[arg(short, long)]
    base_dir: Option<PathBuf>,

    /// Input directory to scan (repeatable, replaces input/ and terminology/)
    #[arg(short, long = "input", value_name = "DIR")]
    inputs: Vec<PathBuf>,

    /// Documentation output directory
    #[arg(short, long, value_name = "DIR")]
    docs_dir: Option<PathBuf>,

    /// Directory with profile.hbs, codesystem.hbs or valueset.hbs overrides
    #[arg(short, long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// JSON configuration file; flags take precedence over its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report failing files and continue with the rest
    #[arg(long)]
    keep_going: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<DocsConfig> {
        let mut config = match &self.config {
            Some(path) => DocsConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DocsConfig::default(),
        };

        if let Some(base_dir) = self.base_dir {
            config.base_dir = base_dir;
        }
        if !self.inputs.is_empty() {
            config = config.with_input_dirs(self.inputs);
        }
        if let Some(docs_dir) = self.docs_dir {
            config = config.with_docs_dir(docs_dir);
        }
        if let Some(templates) = self.templates {
            config = config.with_templates_dir(templates);
        }
        if self.keep_going {
            config = config.with_keep_going(true);
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let config = cli.into_config()?;
    let generator = DocsGenerator::new(config).context("Failed to set up generator")?;
    let report = generator
        .run()
        .await
        .context("Documentation generation failed")?;

    println!("\n✅ Generated {} documentation pages", report.total());

    if report.has_failures() {
        eprintln!("❌ {} file(s) could not be documented:", report.failures.len());
        for failure in &report.failures {
            eprintln!("  {}: {}", failure.path.display(), failure.message);
        }
        anyhow::bail!("{} file(s) failed", report.failures.len());
    }

    Ok(())
}
