//! Building Volume Report
//!
//! Hierarchical volume aggregation for buildings made of levels and rooms.
//! Given a building, the library computes volume totals at every level of the
//! hierarchy and returns a report tree that mirrors it, ready to serialize.
//!
//! # Overview
//!
//! - **Hierarchy model**: [`Building`] owns ordered [`Level`]s, each owning
//!   ordered [`Room`]s. Any logic can walk the hierarchy through the
//!   [`FacilityVisitor`] / [`Visitable`] double dispatch without the entities
//!   knowing about it.
//! - **Volume aggregation**: [`VolumeReportVisitor`] builds a
//!   [`BuildingReport`] during traversal, using [`Volume`] for every total.
//!
//! ## Quick Start
//!
//! ```rust
//! use building_volume_report::*;
//!
//! let building = Building::new("B1", "HQ")
//!     .with_level(
//!         Level::new("L1", "Ground")
//!             .with_room(Room::new("R1", "Lobby", 50.0))
//!             .with_room(Room::new("R2", "Hall", 30.0)),
//!     )
//!     .with_level(Level::new("L2", "Roof"));
//!
//! let report = VolumeReportVisitor::generate(&building);
//! assert_eq!(report.total_volume, 80.0);
//! assert_eq!(report.levels.len(), 2);
//!
//! let json = report.to_json()?;
//! assert!(json.starts_with(r#"{"buildingId":"B1""#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums, and configuration
//! - [`facility`]: building, level and room model, traversal, volume calculation
//! - [`report`]: report tree, report builder, summary, orchestration, errors
//! - [`logging`]: tracing subscriber setup
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Facility   │    │   Report    │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Building    │◄───┤ Visitor     │
//! │ Enums       │    │ Level, Room │    │ Report tree │
//! │ Config      │    │ Volume      │    │ Orchestrator│
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod facility;
pub mod logging;
pub mod report;
pub mod types;

pub use types::{
    // Identifiers
    BuildingId,
    LevelId,
    RoomId,
    // Enums
    OutputFormat,
    RoomKind,
    // Configuration
    ConfigError,
    ConfigValidationError,
    ReportConfig,
};

pub use facility::{
    calculate_volume, sum_volumes, Building, BuildingGenerator, FacilityNode, FacilityVisitor,
    Level, Room, Visitable, Volume,
};

pub use report::{
    BuildingReport, LevelReport, ReportDocument, ReportError, ReportOrchestrator, ReportResult,
    ReportSummary, RoomReport, VolumeReportVisitor,
};

pub use logging::LoggingConfig;
