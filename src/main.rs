use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use trainsum::error::ErrorSeverity;
use trainsum::logging::init_logging;
use trainsum::{
    load_packages, sample_packages, AppConfig, MessageLocale, SensorPackage, TrainSumError,
    Training,
};

/// trainsum - Workout Summary CLI
///
/// Turns raw sensor packages (a workout tag plus positional readings) into
/// distance, mean speed and calorie summaries.
#[derive(Parser)]
#[command(name = "trainsum")]
#[command(version)]
#[command(about = "Workout summary calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of log output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Summary language (en, ru)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Print summaries as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the built-in demo packages
    Demo,

    /// Summarize one package given on the command line
    Calc {
        /// Workout tag (RUN, WLK, SWM)
        workout_type: String,

        /// Readings in sensor order
        #[arg(allow_negative_numbers = true)]
        readings: Vec<f64>,
    },

    /// Summarize every package in a JSON file
    Batch {
        /// JSON array of {"workout_type": ..., "data": [...]} objects
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = match err.downcast_ref::<TrainSumError>() {
                Some(trainsum_err) => {
                    match trainsum_err.severity() {
                        ErrorSeverity::Warning => tracing::warn!(error = %trainsum_err, "Run aborted"),
                        ErrorSeverity::Error => tracing::error!(error = %trainsum_err, "Run aborted"),
                    }
                    trainsum_err.user_message()
                }
                None => format!("{:#}", err),
            };
            eprintln!("{} {}", "error:".red().bold(), message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };

    let mut log_config = config.logging.clone();
    log_config.level = log_config.level.raised_by(cli.verbose);
    init_logging(&log_config)?;

    let locale = match cli.locale.as_deref() {
        Some(value) => value
            .parse::<MessageLocale>()
            .map_err(TrainSumError::Configuration)?,
        None => config.output.locale,
    };
    let json = cli.json || config.output.json;

    let packages = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => sample_packages(),
        Commands::Calc {
            workout_type,
            readings,
        } => vec![SensorPackage::new(workout_type, readings)],
        Commands::Batch { file } => load_packages(&file)
            .with_context(|| format!("Failed to load packages from {}", file.display()))?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for package in packages {
        let session = package.into_session().map_err(TrainSumError::from)?;
        let info = session.show_training_info();
        tracing::info!(
            kind = %info.training_type,
            distance = info.distance,
            calories = info.calories,
            "Session summarized"
        );

        if json {
            writeln!(out, "{}", serde_json::to_string(&info)?)?;
        } else {
            writeln!(out, "{}", info.get_message(locale))?;
        }
    }

    Ok(())
}
