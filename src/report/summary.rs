//! Summary statistics over a finished report

use crate::facility::sum_volumes;
use crate::report::{BuildingReport, RoomReport};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate figures describing a building report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Number of levels in the report
    pub level_count: usize,
    /// Number of rooms across all levels
    pub room_count: usize,
    /// Number of levels without any rooms
    pub empty_level_count: usize,
    /// Total building volume
    pub total_volume: f64,
    /// Room with the largest volume; the first one wins ties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_room: Option<RoomReport>,
    /// Mean room volume, 0 when there are no rooms
    pub average_room_volume: f64,
}

impl BuildingReport {
    /// Compute summary statistics for this report
    pub fn summary(&self) -> ReportSummary {
        let room_count = self.room_count();
        let rooms_volume = sum_volumes(self.rooms().map(|r| r.volume));

        let largest_room = self
            .rooms()
            .fold(None::<&RoomReport>, |best, room| match best {
                Some(b) if b.volume >= room.volume => Some(b),
                _ => Some(room),
            })
            .cloned();

        ReportSummary {
            level_count: self.levels.len(),
            room_count,
            empty_level_count: self.levels.iter().filter(|l| l.rooms.is_empty()).count(),
            total_volume: self.total_volume,
            largest_room,
            average_room_volume: if room_count == 0 {
                0.0
            } else {
                rooms_volume / room_count as f64
            },
        }
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Volume Report Summary")?;
        writeln!(f, "=====================")?;
        writeln!(f, "  Levels: {} ({} empty)", self.level_count, self.empty_level_count)?;
        writeln!(f, "  Rooms: {}", self.room_count)?;
        writeln!(f, "  Total Volume: {:.2}", self.total_volume)?;
        writeln!(f, "  Average Room Volume: {:.2}", self.average_room_volume)?;
        match &self.largest_room {
            Some(room) => {
                write!(f, "  Largest Room: {}", room.room_name.as_deref().unwrap_or("unnamed"))?;
                if let Some(id) = &room.room_id {
                    write!(f, " ({})", id)?;
                }
                write!(f, " - {:.2}", room.volume)
            }
            None => write!(f, "  Largest Room: none"),
        }
    }
}
