//! Report tree types
//!
//! The report mirrors the facility hierarchy one-to-one. It is an owned value
//! with no reference back into the building it was produced from.
//! Serialized field names are camelCase (`buildingId`, `totalVolume`, ...).
//! Identifiers and names missing from the input stay absent and are left out
//! of the serialized report.

use crate::facility::sum_volumes;
use crate::report::{ReportError, ReportResult};
use crate::types::{BuildingId, LevelId, RoomId};
use serde::{Deserialize, Serialize};

/// Volume report for a single room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomReport {
    /// Identifier of the room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    /// Name of the room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// Volume of the room
    pub volume: f64,
}

/// Volume report for a level, with one entry per room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelReport {
    /// Identifier of the level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_id: Option<LevelId>,
    /// Name of the level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_name: Option<String>,
    /// Sum of the room volumes on this level
    pub total_volume: f64,
    /// Room reports, in the level's room order
    #[serde(default)]
    pub rooms: Vec<RoomReport>,
}

/// Volume report for a whole building, with one entry per level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingReport {
    /// Identifier of the building
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_id: Option<BuildingId>,
    /// Name of the building
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    /// Sum of every room volume in the building
    pub total_volume: f64,
    /// Level reports, in the building's level order
    #[serde(default)]
    pub levels: Vec<LevelReport>,
}

fn describe(kind: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{} {}", kind, id),
        None => format!("unidentified {}", kind),
    }
}

impl RoomReport {
    /// Create a room report
    pub fn new(room_id: Option<RoomId>, room_name: Option<String>, volume: f64) -> Self {
        Self { room_id, room_name, volume }
    }
}

impl LevelReport {
    /// Create a level report with no rooms yet
    pub fn new(level_id: Option<LevelId>, level_name: Option<String>, total_volume: f64) -> Self {
        Self { level_id, level_name, total_volume, rooms: Vec::new() }
    }

    /// Sum of the attached room report volumes
    pub fn rooms_volume(&self) -> f64 {
        sum_volumes(self.rooms.iter().map(|r| r.volume))
    }
}

impl BuildingReport {
    /// Create a building report with no levels yet
    pub fn new(
        building_id: Option<BuildingId>,
        building_name: Option<String>,
        total_volume: f64,
    ) -> Self {
        Self { building_id, building_name, total_volume, levels: Vec::new() }
    }

    /// Sum of the attached level report totals
    pub fn levels_volume(&self) -> f64 {
        sum_volumes(self.levels.iter().map(|l| l.total_volume))
    }

    /// Number of room reports across all levels
    pub fn room_count(&self) -> usize {
        self.levels.iter().map(|l| l.rooms.len()).sum()
    }

    /// Iterate over every room report, level by level
    pub fn rooms(&self) -> impl Iterator<Item = &RoomReport> + '_ {
        self.levels.iter().flat_map(|l| l.rooms.iter())
    }

    /// Find a level report by level ID
    pub fn get_level(&self, level_id: &LevelId) -> Option<&LevelReport> {
        self.levels.iter().find(|l| l.level_id.as_ref() == Some(level_id))
    }

    /// Check that every stored total agrees with the totals beneath it
    ///
    /// Level totals are compared against the sum of their room reports and the
    /// building total against the sum of the level totals, within `tolerance`.
    pub fn verify_consistency(&self, tolerance: f64) -> ReportResult<()> {
        for level in &self.levels {
            let expected = level.rooms_volume();
            if (expected - level.total_volume).abs() > tolerance {
                return Err(ReportError::inconsistent_totals(
                    describe("level", level.level_id.as_ref().map(LevelId::as_str)),
                    expected,
                    level.total_volume,
                ));
            }
        }

        let expected = self.levels_volume();
        if (expected - self.total_volume).abs() > tolerance {
            return Err(ReportError::inconsistent_totals(
                describe("building", self.building_id.as_ref().map(BuildingId::as_str)),
                expected,
                self.total_volume,
            ));
        }

        Ok(())
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
