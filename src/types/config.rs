//! Configuration structures for the volume reporter
//!
//! This module contains the command line arguments, the partial configuration
//! file format, and the merged report configuration with its validation logic.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default bounds for generated sample buildings
pub mod generator_defaults {
    /// Minimum number of levels in a generated building
    pub const MIN_LEVELS: usize = 1;

    /// Maximum number of levels in a generated building
    pub const MAX_LEVELS: usize = 5;

    /// Minimum number of rooms on a generated level
    pub const MIN_ROOMS_PER_LEVEL: usize = 1;

    /// Maximum number of rooms on a generated level
    pub const MAX_ROOMS_PER_LEVEL: usize = 8;

    /// Smallest generated room volume
    pub const MIN_ROOM_VOLUME: f64 = 10.0;

    /// Largest generated room volume
    pub const MAX_ROOM_VOLUME: f64 = 500.0;

    /// Upper limit accepted for `max_levels`
    pub const MAX_GENERATED_LEVELS: usize = 1_000;

    /// Upper limit accepted for `max_rooms_per_level`
    pub const MAX_GENERATED_ROOMS_PER_LEVEL: usize = 1_000;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "building-volume-report",
    version = "0.1.0",
    about = "Building Volume Report - Aggregates room volumes across a building hierarchy",
    long_about = "Reads a building made of levels and rooms, sums room volumes at every level of the hierarchy, and writes a JSON report mirroring that hierarchy.

EXAMPLES:
    # Report on a building described in a JSON file
    building-volume-report --input building.json

    # Generate a reproducible sample building and pretty-print its report
    building-volume-report --generate --seed 42 --pretty

    # Use a configuration file
    building-volume-report --config report.json

    # Generate configuration template
    building-volume-report --print-config > my-config.json

    # Validate configuration without running
    building-volume-report --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Building description to report on (JSON format)
    #[arg(short, long, help = "Building JSON file to report on")]
    pub input: Option<String>,

    /// Generate a sample building instead of reading one
    #[arg(
        long,
        help = "Generate a sample building instead of reading --input",
        long_help = "Generate a random sample building using the generator settings. Combine with --seed for reproducible output."
    )]
    pub generate: bool,

    /// Report destination file
    #[arg(short, long, help = "Write the report to this file instead of stdout")]
    pub output: Option<String>,

    /// Output format for the report
    #[arg(
        long,
        help = "Output format (json or pretty)",
        long_help = "Output format for the report. Supported formats: json, pretty. Default: json"
    )]
    pub output_format: Option<String>,

    /// Shortcut for --output-format pretty
    #[arg(long, help = "Pretty-print the report JSON")]
    pub pretty: bool,

    /// Minimum number of levels in a generated building
    #[arg(long, help = "Minimum levels in a generated building")]
    pub min_levels: Option<usize>,

    /// Maximum number of levels in a generated building
    #[arg(long, help = "Maximum levels in a generated building")]
    pub max_levels: Option<usize>,

    /// Minimum number of rooms per generated level
    #[arg(long, help = "Minimum rooms per generated level")]
    pub min_rooms_per_level: Option<usize>,

    /// Maximum number of rooms per generated level
    #[arg(long, help = "Maximum rooms per generated level")]
    pub max_rooms_per_level: Option<usize>,

    /// Smallest generated room volume
    #[arg(long, help = "Smallest generated room volume")]
    pub min_room_volume: Option<f64>,

    /// Largest generated room volume
    #[arg(long, help = "Largest generated room volume")]
    pub max_room_volume: Option<f64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible sample buildings")]
    pub seed: Option<u64>,

    /// Print a report summary to stderr
    #[arg(long, help = "Print a human-readable report summary to stderr")]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without generating a report
    #[arg(long, help = "Validate configuration without generating a report")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Building JSON file to report on
    pub input: Option<String>,

    /// Generate a sample building instead of reading one
    pub generate: Option<bool>,

    /// Report destination file
    pub output: Option<String>,

    /// Output format for the report
    pub output_format: Option<String>,

    /// Minimum number of levels in a generated building
    pub min_levels: Option<usize>,

    /// Maximum number of levels in a generated building
    pub max_levels: Option<usize>,

    /// Minimum number of rooms per generated level
    pub min_rooms_per_level: Option<usize>,

    /// Maximum number of rooms per generated level
    pub max_rooms_per_level: Option<usize>,

    /// Smallest generated room volume
    pub min_room_volume: Option<f64>,

    /// Largest generated room volume
    pub max_room_volume: Option<f64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration for a report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Building JSON file to report on
    pub input: Option<String>,

    /// Generate a sample building instead of reading one
    pub generate: bool,

    /// Report destination file (stdout when absent)
    pub output: Option<String>,

    /// Output format for the report
    pub output_format: String,

    /// Minimum number of levels in a generated building
    pub min_levels: usize,

    /// Maximum number of levels in a generated building
    pub max_levels: usize,

    /// Minimum number of rooms per generated level
    pub min_rooms_per_level: usize,

    /// Maximum number of rooms per generated level
    pub max_rooms_per_level: usize,

    /// Smallest generated room volume
    pub min_room_volume: f64,

    /// Largest generated room volume
    pub max_room_volume: f64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for report configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Neither an input file nor generation was requested
    #[error("No building source: provide --input or --generate")]
    MissingInputSource,

    /// Both an input file and generation were requested
    #[error("Conflicting building sources: --input ({0}) and --generate are mutually exclusive")]
    ConflictingInputSources(String),

    /// Level range is invalid
    #[error("Invalid level range: min ({0}) must be <= max ({1})")]
    InvalidLevelRange(usize, usize),

    /// Room range is invalid
    #[error("Invalid rooms-per-level range: min ({0}) must be <= max ({1})")]
    InvalidRoomRange(usize, usize),

    /// Maximum level count exceeds the generation limit
    #[error("Too many levels: max ({0}) must be <= {1}")]
    TooManyLevels(usize, usize),

    /// Maximum rooms per level exceeds the generation limit
    #[error("Too many rooms per level: max ({0}) must be <= {1}")]
    TooManyRooms(usize, usize),

    /// A volume bound is negative or not finite
    #[error("Invalid volume bound for {field}: {value} (must be finite and >= 0.0)")]
    InvalidVolumeBound {
        /// Name of the field with the invalid bound
        field: String,
        /// The invalid value
        value: f64,
    },

    /// Volume range is inverted
    #[error("Invalid room volume range: min ({min}) must be <= max ({max})")]
    InvalidVolumeRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Output format is not recognised
    #[error("{0}")]
    InvalidOutputFormat(String),
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: None,
            generate: false,
            output: None,
            output_format: "json".to_string(),
            min_levels: generator_defaults::MIN_LEVELS,
            max_levels: generator_defaults::MAX_LEVELS,
            min_rooms_per_level: generator_defaults::MIN_ROOMS_PER_LEVEL,
            max_rooms_per_level: generator_defaults::MAX_ROOMS_PER_LEVEL,
            min_room_volume: generator_defaults::MIN_ROOM_VOLUME,
            max_room_volume: generator_defaults::MAX_ROOM_VOLUME,
            seed: None,
        }
    }
}

impl ReportConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            input: config_file.input.or(defaults.input),
            generate: config_file.generate.unwrap_or(defaults.generate),
            output: config_file.output.or(defaults.output),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            min_levels: config_file.min_levels.unwrap_or(defaults.min_levels),
            max_levels: config_file.max_levels.unwrap_or(defaults.max_levels),
            min_rooms_per_level: config_file
                .min_rooms_per_level
                .unwrap_or(defaults.min_rooms_per_level),
            max_rooms_per_level: config_file
                .max_rooms_per_level
                .unwrap_or(defaults.max_rooms_per_level),
            min_room_volume: config_file.min_room_volume.unwrap_or(defaults.min_room_volume),
            max_room_volume: config_file.max_room_volume.unwrap_or(defaults.max_room_volume),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        // A building source named on the command line replaces the file's source
        match (args.input, args.generate) {
            (Some(input), generate) => {
                config.input = Some(input);
                config.generate = generate;
            }
            (None, true) => {
                config.input = None;
                config.generate = true;
            }
            (None, false) => {}
        }
        if let Some(value) = args.output {
            config.output = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        // --pretty wins over any explicit format
        if args.pretty {
            config.output_format = "pretty".to_string();
        }
        if let Some(value) = args.min_levels {
            config.min_levels = value;
        }
        if let Some(value) = args.max_levels {
            config.max_levels = value;
        }
        if let Some(value) = args.min_rooms_per_level {
            config.min_rooms_per_level = value;
        }
        if let Some(value) = args.max_rooms_per_level {
            config.max_rooms_per_level = value;
        }
        if let Some(value) = args.min_room_volume {
            config.min_room_volume = value;
        }
        if let Some(value) = args.max_room_volume {
            config.max_room_volume = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match (&self.input, self.generate) {
            (None, false) => return Err(ConfigValidationError::MissingInputSource),
            (Some(input), true) => {
                return Err(ConfigValidationError::ConflictingInputSources(input.clone()))
            }
            _ => {}
        }

        if self.min_levels > self.max_levels {
            return Err(ConfigValidationError::InvalidLevelRange(self.min_levels, self.max_levels));
        }

        if self.min_rooms_per_level > self.max_rooms_per_level {
            return Err(ConfigValidationError::InvalidRoomRange(
                self.min_rooms_per_level,
                self.max_rooms_per_level,
            ));
        }

        if self.max_levels > generator_defaults::MAX_GENERATED_LEVELS {
            return Err(ConfigValidationError::TooManyLevels(
                self.max_levels,
                generator_defaults::MAX_GENERATED_LEVELS,
            ));
        }

        if self.max_rooms_per_level > generator_defaults::MAX_GENERATED_ROOMS_PER_LEVEL {
            return Err(ConfigValidationError::TooManyRooms(
                self.max_rooms_per_level,
                generator_defaults::MAX_GENERATED_ROOMS_PER_LEVEL,
            ));
        }

        self.validate_volume_bound("min_room_volume", self.min_room_volume)?;
        self.validate_volume_bound("max_room_volume", self.max_room_volume)?;

        if self.min_room_volume > self.max_room_volume {
            return Err(ConfigValidationError::InvalidVolumeRange {
                min: self.min_room_volume,
                max: self.max_room_volume,
            });
        }

        self.get_output_format().map_err(ConfigValidationError::InvalidOutputFormat)?;

        Ok(())
    }

    fn validate_volume_bound(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigValidationError::InvalidVolumeBound {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Get the level count range as a tuple
    pub fn levels_range(&self) -> (usize, usize) {
        (self.min_levels, self.max_levels)
    }

    /// Get the rooms-per-level range as a tuple
    pub fn rooms_per_level(&self) -> (usize, usize) {
        (self.min_rooms_per_level, self.max_rooms_per_level)
    }

    /// Get the room volume range as a tuple
    pub fn room_volume_range(&self) -> (f64, f64) {
        (self.min_room_volume, self.max_room_volume)
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}
