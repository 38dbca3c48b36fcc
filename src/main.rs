// Building Volume Report - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/building-volume-report --input building.json --pretty
// ```
//
// Or with a generated sample building:
//
// ```console
// $ ./target/release/building-volume-report --generate --seed 42 --summary --verbose
// ```

use anyhow::{Context, Result};
use building_volume_report::logging::LoggingConfig;
use building_volume_report::report::{BuildingReport, ReportOrchestrator};
use building_volume_report::types::config::CliArgs;
use building_volume_report::types::ReportConfig;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match ReportConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: warnings and errors only
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Building Volume Report");

    let show_summary = args.summary;
    let dry_run = args.dry_run;

    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no report will be generated.");
        print_configuration_summary(&config);
        return;
    }

    match run(config) {
        Ok(report) => {
            if show_summary {
                eprintln!("{}", report.summary());
            }
            info!("Building Volume Report completed successfully");
        }
        Err(e) => {
            error!("Report failed: {:#}", e);
            process::exit(1);
        }
    }
}

/// Load configuration from CLI arguments and an optional config file, then validate it
fn load_config(args: CliArgs) -> Result<ReportConfig> {
    let config = ReportConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    info!("Configuration loaded and validated successfully");
    Ok(config)
}

/// Produce and write the report
fn run(config: ReportConfig) -> Result<BuildingReport> {
    let source = match &config.input {
        Some(path) => format!("input file '{}'", path),
        None => "generated sample building".to_string(),
    };

    let orchestrator =
        ReportOrchestrator::new(config).context("Failed to initialize report orchestrator")?;
    let report = orchestrator
        .run()
        .with_context(|| format!("Failed to produce report from {}", source))?;

    info!(
        "Reported {} levels and {} rooms, total volume {:.2}",
        report.levels.len(),
        report.room_count(),
        report.total_volume
    );
    Ok(report)
}

/// Print configuration summary
fn print_configuration_summary(config: &ReportConfig) {
    eprintln!("Configuration:");
    match &config.input {
        Some(path) => eprintln!("  Input: {}", path),
        None => {
            eprintln!("  Input: generated sample building");
            eprintln!("  Levels: {} - {}", config.min_levels, config.max_levels);
            eprintln!(
                "  Rooms per Level: {} - {}",
                config.min_rooms_per_level, config.max_rooms_per_level
            );
            eprintln!(
                "  Room Volume: {:.2} - {:.2}",
                config.min_room_volume, config.max_room_volume
            );
            if let Some(seed) = config.seed {
                eprintln!("  Random Seed: {}", seed);
            }
        }
    }
    eprintln!("  Output: {}", config.output.as_deref().unwrap_or("stdout"));
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!();
}
