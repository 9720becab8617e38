//! ATS matcher binary entry point.

use ats_matcher::cli::{parse_output_format, Cli, Commands, ConfigAction};
use ats_matcher::config::{Config, OutputFormat};
use ats_matcher::error::{AtsMatcherError, Result};
use ats_matcher::matching::engine::MatchEngine;
use ats_matcher::output::report;
use ats_matcher::text;
use clap::Parser;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            job,
            resume,
            output,
            save,
            detailed,
        } => analyze(&job, &resume, &output, save, detailed),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = Config::load()?;
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    AtsMatcherError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("{}", rendered);
                Ok(())
            }
            ConfigAction::Reset => {
                let config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

fn analyze(
    job_path: &Path,
    resume_path: &Path,
    output: &str,
    save: Option<PathBuf>,
    detailed: bool,
) -> Result<()> {
    let mut config = Config::load()?;
    config.output.format = parse_output_format(output).map_err(AtsMatcherError::InvalidInput)?;
    if detailed {
        config.output.detailed = true;
    }

    let requirement_raw = std::fs::read_to_string(job_path)?;
    let candidate_raw = std::fs::read_to_string(resume_path)?;

    let requirement_text = text::normalize(&requirement_raw);
    let candidate_text = text::normalize(&candidate_raw);

    // Degenerate candidate documents are rejected here, not inside the engine.
    if candidate_text.len() < config.processing.min_candidate_chars {
        return Err(AtsMatcherError::InvalidInput(format!(
            "candidate text too short ({} chars, need at least {})",
            candidate_text.len(),
            config.processing.min_candidate_chars
        )));
    }

    log::info!(
        "analyzing {} against {}",
        resume_path.display(),
        job_path.display()
    );

    let engine = MatchEngine::new(&config);
    let match_report = engine.analyze(&requirement_text, &candidate_text);

    let rendered = match config.output.format {
        OutputFormat::Console => {
            report::render_console(&match_report, &config.output);
            None
        }
        OutputFormat::Json => {
            let json = report::render_json(&match_report)?;
            println!("{}", json);
            Some(json)
        }
        OutputFormat::Markdown => {
            let markdown = report::render_markdown(&match_report);
            println!("{}", markdown);
            Some(markdown)
        }
    };

    if let Some(path) = save {
        let content = match rendered {
            Some(content) => content,
            None => report::render_markdown(&match_report),
        };
        std::fs::write(&path, content)?;
        log::info!("report saved to {}", path.display());
    }

    Ok(())
}
