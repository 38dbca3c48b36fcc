//! Report run orchestration
//!
//! This module contains the ReportOrchestrator, which wires a validated
//! configuration to the core: it obtains a building (from a file or the
//! generator), runs one traversal with a fresh visitor, and renders and writes
//! the resulting report. All I/O lives here; the core does none.

use crate::facility::{Building, BuildingGenerator};
use crate::report::{BuildingReport, ReportError, ReportResult, VolumeReportVisitor};
use crate::types::{OutputFormat, ReportConfig};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use tracing::{debug, info, instrument, warn};

/// Tolerance used when checking a freshly built report for consistency
pub const CONSISTENCY_TOLERANCE: f64 = 1e-9;

/// Serialized output document
///
/// An absent report serializes as an empty object rather than `null`.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    /// The report, flattened into the document when present
    #[serde(flatten)]
    pub report: Option<&'a BuildingReport>,
}

/// Coordinates one report run from configuration to output
#[derive(Debug)]
pub struct ReportOrchestrator {
    config: ReportConfig,
    output_format: OutputFormat,
}

impl ReportOrchestrator {
    /// Create an orchestrator from a configuration, validating it first
    #[instrument(skip(config), fields(generate = config.generate, input = ?config.input))]
    pub fn new(config: ReportConfig) -> ReportResult<Self> {
        config.validate()?;
        let output_format =
            config.output_format.parse::<OutputFormat>().map_err(ReportError::configuration)?;

        info!("Report orchestrator configured (output format: {})", output_format);
        Ok(Self { config, output_format })
    }

    /// The configuration in use
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// The resolved output format
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Obtain the building to report on
    pub fn load_building(&self) -> ReportResult<Building> {
        match &self.config.input {
            Some(path) => Building::from_file(path),
            None => {
                let mut generator = BuildingGenerator::from_config(&self.config);
                Ok(generator.generate_building(&self.config))
            }
        }
    }

    /// Build the volume report for `building`
    pub fn generate_report(&self, building: &Building) -> BuildingReport {
        let report = VolumeReportVisitor::generate(building);

        if let Err(e) = report.verify_consistency(CONSISTENCY_TOLERANCE) {
            warn!("Report totals disagree: {}", e);
        }

        report
    }

    /// Render a report in the configured output format
    pub fn render(&self, report: Option<&BuildingReport>) -> ReportResult<String> {
        let document = ReportDocument { report };
        let rendered = match self.output_format {
            OutputFormat::Json => serde_json::to_string(&document)?,
            OutputFormat::PrettyJson => serde_json::to_string_pretty(&document)?,
        };
        Ok(rendered)
    }

    /// Write rendered output to the configured file, or stdout
    pub fn write_output(&self, rendered: &str) -> ReportResult<()> {
        match &self.config.output {
            Some(path) => {
                fs::write(path, format!("{}\n", rendered))?;
                info!("Report written to {}", path);
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", rendered)?;
                handle.flush()?;
            }
        }
        Ok(())
    }

    /// Load, report, render and write; returns the report produced
    pub fn run(&self) -> ReportResult<BuildingReport> {
        let building = self.load_building()?;
        debug!(
            building_id = ?building.id,
            levels = building.level_count(),
            rooms = building.room_count(),
            "Reporting on building"
        );

        let report = self.generate_report(&building);
        let rendered = self.render(Some(&report))?;
        self.write_output(&rendered)?;

        Ok(report)
    }
}
