//! CLI entry point for the ATS matcher

use ats_match::cli::{parse_output_format, Cli, Commands, ConfigAction};
use ats_match::config::{Config, OutputConfig};
use ats_match::error::{AtsMatchError, Result};
use ats_match::input::InputManager;
use ats_match::output::OutputFormatter;
use ats_match::pipeline::MatchPipeline;
use ats_match::service::GeminiClient;
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
        } => analyze(config, resume, job, &output, save).await,
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    AtsMatchError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("{}", rendered);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

async fn analyze(
    config: Config,
    resume: PathBuf,
    job: PathBuf,
    output: &str,
    save: Option<PathBuf>,
) -> Result<()> {
    let format = parse_output_format(output).map_err(AtsMatchError::InvalidInput)?;

    let input = InputManager::new();
    let resume_text = input.extract_from_path(&resume).await?;
    let job_text = input.extract_from_path(&job).await?;
    info!(
        "Extracted {} resume chars, {} job chars",
        resume_text.len(),
        job_text.len()
    );

    let api_key = config.api_key()?;
    let client = GeminiClient::new(&config.service, api_key)?;
    let pipeline = MatchPipeline::new(client, config.scoring.clone());

    let report = pipeline.run(&resume_text, &job_text).await?;

    let formatter = OutputFormatter::new(OutputConfig {
        format,
        color_output: config.output.color_output && save.is_none(),
    });
    let rendered = formatter.format_report(&report)?;

    match save {
        Some(path) => {
            tokio::fs::write(&path, &rendered).await?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
