//! Core types and identifiers for the volume reporter
//!
//! This module contains identifiers, enumerations and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: string identifiers for buildings, levels and rooms
//! - **Enums**: room kinds for generated buildings and report output formats
//! - **Configuration**: report configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use building_volume_report::types::*;
//!
//! // Identifiers come from input, or are generated
//! let room_id = RoomId::from("R1");
//! let level_id = LevelId::new();
//! assert!(level_id.as_str().starts_with("LVL_"));
//!
//! // Configure a run that generates a sample building
//! let config = ReportConfig {
//!     generate: true,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! # let _ = room_id;
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::*;
pub use enums::*;
pub use identifiers::*;
