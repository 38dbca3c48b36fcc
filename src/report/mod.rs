//! Volume aggregation and report building
//!
//! This module turns a facility hierarchy into a report tree with volume
//! totals at every level, and wires report runs to configuration and output.
//!
//! # Overview
//!
//! - **VolumeReportVisitor**: traversal visitor that builds the report
//! - **BuildingReport / LevelReport / RoomReport**: the report tree
//! - **ReportSummary**: aggregate figures over a finished report
//! - **ReportOrchestrator**: load, report, render and write in one run
//! - **ReportError**: error handling around the core
//!
//! # Usage Example
//!
//! ```rust
//! use building_volume_report::facility::*;
//! use building_volume_report::report::*;
//!
//! let building = Building::new("B1", "HQ")
//!     .with_level(
//!         Level::new("L1", "Ground")
//!             .with_room(Room::new("R1", "Lobby", 50.0))
//!             .with_room(Room::new("R2", "Hall", 30.0)),
//!     )
//!     .with_level(Level::new("L2", "Roof"));
//!
//! let mut visitor = VolumeReportVisitor::new();
//! building.accept(&mut visitor);
//! let report = visitor.into_report().unwrap();
//!
//! assert_eq!(report.total_volume, 80.0);
//! assert_eq!(report.levels[0].total_volume, 80.0);
//! assert_eq!(report.levels[1].total_volume, 0.0);
//! ```

pub mod error;
pub mod orchestrator;
pub mod summary;
pub mod types;
pub mod visitor;

pub use error::*;
pub use orchestrator::*;
pub use summary::*;
pub use types::*;
pub use visitor::*;
