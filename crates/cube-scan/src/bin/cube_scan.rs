//! `cube-scan` command-line tool.
//!
//! - `face`: validate one face photo and print the validation as JSON
//! - `session`: scan all faces listed in a JSON config and write a report
//! - `solve`: print the annotated canonical solution
//! - `annotate`: describe a single notation token

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use cube_scan::face::{FaceValidator, ValidatorParams};
use cube_scan::io::{scan_cube_from_config, ScanFlowError, ScanIoError};
use cube_scan::scan::{self, ScanError};
use cube_scan::solve::{annotate, generate, Stage};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Flow(#[from] ScanFlowError),
    #[error(transparent)]
    Io(#[from] ScanIoError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("cube is incomplete: {validated}/6 faces validated")]
    Incomplete { validated: usize },
}

#[derive(Parser, Debug)]
#[command(name = "cube-scan", version)]
#[command(about = "Scan puzzle-cube faces, validate the cube and print solve steps", long_about = None)]
struct Cli {
    /// Log level for `cube_scan` targets (`RUST_LOG` overrides it with `tracing`)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single face photo
    Face {
        /// Path to the face image
        image: PathBuf,

        /// Minimal fraction of confidently classified cells
        #[arg(long)]
        min_confidence: Option<f32>,

        /// Also print the per-cell samples
        #[arg(long)]
        detailed: bool,
    },
    /// Scan every face listed in a JSON config and write a report
    Session {
        /// Path to the scan config JSON
        config: PathBuf,

        /// Override the report path from the config
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with an error when the cube is not complete
        #[arg(long)]
        require_complete: bool,
    },
    /// Print the annotated canonical solution
    Solve {
        /// Only print the steps of one stage
        #[arg(long, value_enum)]
        stage: Option<StageArg>,
    },
    /// Annotate a single notation token (e.g. `R'`)
    Annotate {
        notation: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StageArg {
    WhiteCross,
    WhiteCorners,
    MiddleLayer,
    YellowCross,
    YellowCorners,
    FinalLayer,
}

impl From<StageArg> for Stage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::WhiteCross => Stage::WhiteCross,
            StageArg::WhiteCorners => Stage::WhiteCorners,
            StageArg::MiddleLayer => Stage::MiddleLayer,
            StageArg::YellowCross => Stage::YellowCross,
            StageArg::YellowCorners => Stage::YellowCorners,
            StageArg::FinalLayer => Stage::FinalLayer,
        }
    }
}

fn init_logging(level: LevelFilter) {
    #[cfg(feature = "tracing")]
    {
        cube_scan::core::init_tracing(false, level);
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = cube_scan::core::init_with_level(level);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Face {
            image,
            min_confidence,
            detailed,
        } => {
            let mut params = ValidatorParams::default();
            if let Some(min) = min_confidence {
                params.min_confidence = min;
            }
            let validator = FaceValidator::new(params);
            let img = scan::load_rgb(&image)?;
            let (validation, sample) = scan::validate_face_detailed(&img, &validator)?;
            let json = if detailed {
                serde_json::to_string_pretty(&serde_json::json!({
                    "validation": validation,
                    "sample": sample,
                }))?
            } else {
                serde_json::to_string_pretty(&validation)?
            };
            println!("{json}");
        }
        Commands::Session {
            config,
            output,
            require_complete,
        } => {
            let (cfg, _session, report) = scan_cube_from_config(&config)?;
            let out = output.unwrap_or_else(|| cfg.output_path());
            report.write_json(&out)?;
            log::info!(
                "{}/6 faces validated, complete: {}; report written to {}",
                report.validated,
                report.is_complete,
                out.display()
            );
            if require_complete && !report.is_complete {
                return Err(CliError::Incomplete {
                    validated: report.validated,
                });
            }
        }
        Commands::Solve { stage } => {
            let stage = stage.map(Stage::from);
            let steps: Vec<_> = generate()
                .into_iter()
                .filter(|s| stage.is_none_or(|st| s.stage == st))
                .collect();
            println!("{}", serde_json::to_string_pretty(&steps)?);
        }
        Commands::Annotate { notation } => {
            println!("{}", serde_json::to_string_pretty(&annotate(&notation))?);
        }
    }
    Ok(())
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.into());
    match run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}
