//! Volume report builder
//!
//! [`VolumeReportVisitor`] is a [`FacilityVisitor`] that builds a
//! [`BuildingReport`] while a building is being traversed. Each node's total
//! comes from [`Volume`], computed top-down for that node on its own rather
//! than accumulated from the report entries already built.

use crate::facility::{Building, FacilityVisitor, Level, Room, Visitable, Volume};
use crate::report::{BuildingReport, LevelReport, ReportError, ReportResult, RoomReport};
use crate::report_span;
use tracing::{debug, warn};

/// Builds a volume report tree during a single traversal
///
/// A visitor holds traversal state between callbacks, so one instance serves
/// one report. Visiting another building starts a new report and discards the
/// previous one.
#[derive(Debug, Default)]
pub struct VolumeReportVisitor {
    report: Option<BuildingReport>,
    current_level: Option<usize>,
}

impl VolumeReportVisitor {
    /// Create a visitor with no report in progress
    pub fn new() -> Self {
        Self::default()
    }

    /// Traverse `building` with a fresh visitor and return the finished report
    pub fn generate(building: &Building) -> BuildingReport {
        let _span = report_span!("volume_report", building_id = ?building.id).entered();

        let mut visitor = Self::new();
        building.accept(&mut visitor);

        let report = visitor.into_report().unwrap_or_else(|| {
            // Unreachable: traversal of a building always visits the building first
            BuildingReport::new(building.id.clone(), building.name.clone(), building.volume())
        });

        debug!(
            levels = report.levels.len(),
            rooms = report.room_count(),
            total_volume = report.total_volume,
            "Volume report complete"
        );
        report
    }

    /// The finished report, or `None` if no building has been visited
    pub fn report(&self) -> Option<&BuildingReport> {
        self.report.as_ref()
    }

    /// Consume the visitor and take the report, if any
    pub fn into_report(self) -> Option<BuildingReport> {
        self.report
    }

    /// Consume the visitor and take the report, failing if no building was visited
    pub fn finish(self) -> ReportResult<BuildingReport> {
        self.report.ok_or(ReportError::NoReport)
    }

    /// Whether a building has been visited
    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }
}

impl FacilityVisitor for VolumeReportVisitor {
    fn visit_building(&mut self, building: &Building) {
        let total_volume = building.volume();
        debug!(building_id = ?building.id, total_volume, "Visiting building");

        self.report = Some(BuildingReport::new(
            building.id.clone(),
            building.name.clone(),
            total_volume,
        ));
        self.current_level = None;
    }

    fn visit_level(&mut self, level: &Level) {
        let total_volume = level.volume();
        debug!(level_id = ?level.id, total_volume, "Visiting level");

        let level_report = LevelReport::new(level.id.clone(), level.name.clone(), total_volume);

        match self.report.as_mut() {
            Some(report) => {
                report.levels.push(level_report);
                self.current_level = Some(report.levels.len() - 1);
            }
            None => {
                warn!(level_id = ?level.id, "Level visited before any building; dropping it");
                self.current_level = None;
            }
        }
    }

    fn visit_room(&mut self, room: &Room) {
        debug!(room_id = ?room.id, volume = room.volume, "Visiting room");

        let current = match (self.report.as_mut(), self.current_level) {
            (Some(report), Some(index)) => report.levels.get_mut(index),
            _ => None,
        };

        match current {
            Some(level_report) => level_report.rooms.push(RoomReport::new(
                room.id.clone(),
                room.name.clone(),
                room.volume(),
            )),
            None => warn!(room_id = ?room.id, "Room visited before any level; dropping it"),
        }
    }
}
