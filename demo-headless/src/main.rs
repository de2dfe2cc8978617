//! Headless aeroponic absorption demo
//!
//! Computes droplet absorption for one set of conditions, draws the chart
//! panels to stderr and prints the headline numbers to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-headless
//! cargo run --package demo-headless -- --droplet-size 45 --concentration 1200
//! RUST_LOG=debug cargo run --package demo-headless -- --no-plot
//! ```

mod render;

use aeroponic_core::{
    compute, AbsorptionFigure, AbsorptionResult, AeroponicConfig, Celsius, MetersPerSecond,
    Micrometers, Millimeters, PartsPerMillion, Seconds,
};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Aeroponic droplet absorption calculator
#[derive(Parser, Debug)]
#[command(name = "aeroponic-demo")]
#[command(about = "Nutrient mist absorption onto aeroponic roots", long_about = None)]
struct Args {
    /// Droplet diameter in μm (20-50)
    #[arg(short, long, default_value_t = 35.0)]
    droplet_size: f64,

    /// Nutrient concentration in ppm
    #[arg(short, long, default_value_t = 500.0)]
    concentration: f64,

    /// Root diameter in mm
    #[arg(long, default_value_t = AeroponicConfig::DEFAULT_ROOT_DIAMETER)]
    root_diameter: f64,

    /// Airflow velocity in m/s
    #[arg(long, default_value_t = AeroponicConfig::DEFAULT_AIRFLOW_VELOCITY)]
    airflow_velocity: f64,

    /// Air temperature in °C
    #[arg(short, long, default_value_t = AeroponicConfig::DEFAULT_TEMPERATURE)]
    temperature: f64,

    /// Exposure time in seconds
    #[arg(short, long, default_value_t = AeroponicConfig::DEFAULT_EXPOSURE_TIME)]
    exposure_time: f64,

    /// Roots per unit area
    #[arg(long, default_value_t = AeroponicConfig::DEFAULT_ROOT_DENSITY)]
    root_density: f64,

    /// Skip drawing the chart panels
    #[arg(long)]
    no_plot: bool,

    /// Print the full result as JSON instead of the summary lines
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> AeroponicConfig {
        AeroponicConfig::default()
            .with_root_diameter(Millimeters::new(self.root_diameter))
            .with_airflow_velocity(MetersPerSecond::new(self.airflow_velocity))
            .with_temperature(Celsius::new(self.temperature))
            .with_exposure_time(Seconds::new(self.exposure_time))
            .with_root_density(self.root_density)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    exit_code(&run(&args))
}

/// Map the outcome of a run to the process exit status, reporting any error
fn exit_code(outcome: &Result<(), Box<dyn std::error::Error>>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config();
    let droplet_size = Micrometers::new(args.droplet_size);
    let nutrient_concentration = PartsPerMillion::new(args.concentration);

    info!(
        "Computing absorption for {} at {} ({}, {})",
        droplet_size, nutrient_concentration, config.airflow_velocity, config.temperature
    );
    let result = compute(droplet_size, nutrient_concentration, &config)?;

    if result.efficiency > 1.0 {
        warn!(
            "Combined efficiency {:.4} exceeds 1; efficiencies are not clamped",
            result.efficiency
        );
    }

    if !args.no_plot {
        let figure = AbsorptionFigure::build(droplet_size, nutrient_concentration, &result)?;
        let mut stderr = io::stderr().lock();
        render::render_figure(&figure, &mut stderr)?;
        writeln!(stderr)?;
    }

    let mut stdout = io::stdout().lock();
    if args.json {
        write_json(&result, &mut stdout)?;
    } else {
        write_summary(&result, &mut stdout)?;
    }
    Ok(())
}

/// The three headline lines: rate, efficiency, nutrients
fn write_summary(result: &AbsorptionResult, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Absorption rate: {:.4} ml/min", result.absorption_rate)?;
    writeln!(out, "Absorption efficiency: {:.4}", result.efficiency)?;
    writeln!(
        out,
        "Nutrients absorbed: {:.4} mg/min",
        result.total_nutrients_absorbed
    )?;
    Ok(())
}

/// The full result, parameters and diagnostics included, as pretty JSON
fn write_json(result: &AbsorptionResult, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}
