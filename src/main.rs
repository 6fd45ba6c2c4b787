use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use floodguard::assessment::assess_validated;
use floodguard::config::{Config, OutputFormat};
use floodguard::logging::{self, Component};
use floodguard::model::FloodGuardError;
use floodguard::regions::{find_region, REGION_REGISTRY};
use floodguard::report::{color_enabled, render_json, render_text, RenderOptions};
use floodguard::validate::validate_fields;

/// Exit status for input that failed validation.
const EXIT_REJECTED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "floodguard")]
#[command(about = "Flood risk assessment from rainfall, temperature and humidity", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (default: $FLOODGUARD_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assess flood risk for one set of observations
    Assess {
        /// Region label, shown with the result (see `floodguard regions`)
        #[arg(long)]
        region: String,

        /// Rainfall over the last 24 hours (mm)
        #[arg(long, allow_hyphen_values = true)]
        rainfall: String,

        /// Air temperature (°C)
        #[arg(long, allow_hyphen_values = true)]
        temperature: String,

        /// Relative humidity (%)
        #[arg(long, allow_hyphen_values = true)]
        humidity: String,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Show the points each factor contributed
        #[arg(long)]
        explain: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// List the supported regions
    Regions,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_logger(
        config.logging.level,
        config.logging.file.as_deref(),
        config.logging.timestamps,
    );
    logging::debug(Component::Config, None, &format!("Loaded config: {:?}", config));

    let outcome = match cli.command {
        Commands::Assess {
            region,
            rainfall,
            temperature,
            humidity,
            format,
            explain,
            no_color,
        } => {
            let options = RenderOptions {
                color: color_enabled(config.output.color, no_color, std::io::stdout().is_terminal()),
                explain: explain || config.output.explain,
            };
            let format = format.unwrap_or(config.output.format);
            run_assess(&region, &rainfall, &temperature, &humidity, format, options)
        }
        Commands::Regions => {
            run_regions();
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(FloodGuardError::Rejected(reason)) => {
            eprintln!("✗ Invalid input: {}", reason);
            ExitCode::from(EXIT_REJECTED)
        }
        Err(e) => {
            logging::debug(Component::Cli, None, &e.to_string());
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_assess(
    region: &str,
    rainfall: &str,
    temperature: &str,
    humidity: &str,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<(), FloodGuardError> {
    let validated = validate_fields(region, rainfall, temperature, humidity).map_err(|reason| {
        logging::log_rejection(Some(region.trim()).filter(|r| !r.is_empty()), &reason);
        reason
    })?;

    if find_region(validated.region()).is_none() {
        logging::warn(
            Component::Cli,
            Some(validated.region()),
            "Region is not in the registry; assessing anyway",
        );
    }

    let assessment = assess_validated(validated);
    logging::log_assessment(&assessment);

    let rendered = match format {
        OutputFormat::Text => render_text(&assessment, options),
        OutputFormat::Json => render_json(&assessment)?,
    };
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn run_regions() {
    for region in REGION_REGISTRY {
        println!("{}", region.name);
    }
}
