//! Command handlers

use std::path::PathBuf;

use tracing::info;
use truckchat_app::app::{init_data_dir, load_references, run_session};
use truckchat_app::config::Config;
use truckchat_domain::conversation::SessionOutcome;
use truckchat_types::{IdentityMode, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::output_references;
use crate::terminal::TerminalPrompter;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    if let Some(mode) = cli.mode {
        config.identity_mode = mode;
    }

    match &cli.command {
        Commands::Chat {
            name,
            consent,
            no_consent,
            year,
        } => {
            if let Some(name) = name {
                config.bot_name = name.clone();
            }
            if *consent {
                config.consent_gate = true;
            }
            if *no_consent {
                config.consent_gate = false;
            }
            if year.is_some() {
                config.collect_year = *year;
            }
            cmd_chat(&config)
        }

        Commands::Init => cmd_init(&config),

        Commands::References => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_references(&config, output_format)
        }

        Commands::Config {
            show,
            set_name,
            set_mode,
            set_consent,
            set_year,
            set_data_dir,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_name.clone(),
            *set_mode,
            *set_consent,
            *set_year,
            set_data_dir.clone(),
            *set_output,
            *reset,
        ),
    }
}

fn cmd_chat(config: &Config) -> Result<()> {
    let layout = config.layout()?;
    let report = run_session(
        TerminalPrompter::stdio(),
        &layout,
        config.controller_options(),
    )?;

    let results_path = layout.results_file();
    match &report.outcome {
        SessionOutcome::Aborted => info!("no record stored"),
        SessionOutcome::EarlyExit(record) | SessionOutcome::Completed(record) => {
            info!(id = %record.id, results = %results_path.display(), "record stored")
        }
    }
    info!(transcript = %report.transcript_path.display(), "transcript saved");
    Ok(())
}

fn cmd_init(config: &Config) -> Result<()> {
    let layout = config.layout()?;
    let created = init_data_dir(&layout)?;

    if created {
        println!("Created reference list: {}", layout.reference_file().display());
    } else {
        println!(
            "Reference list already exists: {}",
            layout.reference_file().display()
        );
    }
    println!("Results file:    {}", layout.results_file().display());
    println!("Transcripts dir: {}", layout.transcript_dir().display());
    Ok(())
}

fn cmd_references(config: &Config, output_format: OutputFormat) -> Result<()> {
    let layout = config.layout()?;
    let table = load_references(&layout)?;
    output_references(output_format, layout.mode(), &table)
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_name: Option<String>,
    set_mode: Option<IdentityMode>,
    set_consent: Option<bool>,
    set_year: Option<bool>,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(name) = set_name {
        config.bot_name = name;
        modified = true;
    }

    if let Some(mode) = set_mode {
        config.identity_mode = mode;
        modified = true;
    }

    if let Some(consent) = set_consent {
        config.consent_gate = consent;
        modified = true;
    }

    if let Some(year) = set_year {
        config.collect_year = Some(year);
        modified = true;
    }

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
