//! Building model and level organization
//!
//! This module contains the Building struct, the root of the facility
//! hierarchy, together with lookup helpers and JSON loading.

use crate::facility::level::Level;
use crate::facility::room::Room;
use crate::facility::visitor::{FacilityVisitor, Visitable};
use crate::facility::volume::{sum_volumes, Volume};
use crate::report::{ReportError, ReportResult};
use crate::types::{BuildingId, LevelId, RoomId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Represents a building made of levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Unique identifier for the building
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BuildingId>,
    /// Human-readable name of the building
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Levels of the building, in insertion order
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub levels: Vec<Level>,
}

impl Building {
    /// Create a new building without levels
    pub fn new(id: impl Into<BuildingId>, name: impl Into<String>) -> Self {
        Self { id: Some(id.into()), name: Some(name.into()), levels: Vec::new() }
    }

    /// Create a building with a generated identifier
    pub fn with_generated_id(name: impl Into<String>) -> Self {
        Self::new(BuildingId::new(), name)
    }

    /// Builder-style variant of [`Building::add_level`]
    pub fn with_level(mut self, level: Level) -> Self {
        self.add_level(level);
        self
    }

    /// Append a level to the building
    pub fn add_level(&mut self, level: Level) {
        self.levels.push(level);
    }

    /// Remove a level (and its rooms) from the building
    pub fn remove_level(&mut self, level_id: &LevelId) -> Option<Level> {
        let pos = self.levels.iter().position(|l| l.id.as_ref() == Some(level_id))?;
        Some(self.levels.remove(pos))
    }

    /// Get a level by ID
    pub fn get_level(&self, level_id: &LevelId) -> Option<&Level> {
        self.levels.iter().find(|l| l.id.as_ref() == Some(level_id))
    }

    /// Get a mutable reference to a level by ID
    pub fn get_level_mut(&mut self, level_id: &LevelId) -> Option<&mut Level> {
        self.levels.iter_mut().find(|l| l.id.as_ref() == Some(level_id))
    }

    /// Find a room anywhere in the building, together with the level holding it
    pub fn find_room(&self, room_id: &RoomId) -> Option<(&Level, &Room)> {
        self.levels
            .iter()
            .find_map(|level| level.get_room(room_id).map(|room| (level, room)))
    }

    /// Iterate over every room in the building, level by level
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.levels.iter().flat_map(|level| level.rooms.iter())
    }

    /// Get the number of levels in the building
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Get the number of rooms across all levels
    pub fn room_count(&self) -> usize {
        self.levels.iter().map(Level::room_count).sum()
    }

    /// Parse a building from its JSON description
    ///
    /// Missing or `null` level and room lists are read as empty lists, and a
    /// room's volume may be given as either `volume` or `cube`.
    pub fn from_json_str(json: &str) -> ReportResult<Self> {
        let building: Building = serde_json::from_str(json)?;
        debug!(
            building_id = ?building.id,
            levels = building.level_count(),
            rooms = building.room_count(),
            "Parsed building description"
        );
        Ok(building)
    }

    /// Load a building from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ReportError::invalid_input(format!(
                "Building file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let building = Self::from_json_str(&content)?;
        info!(
            "Loaded building with {} levels from {}",
            building.level_count(),
            path.display()
        );
        Ok(building)
    }

    /// Serialize the building description to pretty JSON
    pub fn to_json_pretty(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Visitable for Building {
    fn accept<V: FacilityVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_building(self);
        for level in &self.levels {
            level.accept(visitor);
        }
    }
}

impl Volume for Building {
    fn volume(&self) -> f64 {
        sum_volumes(self.levels.iter().map(Volume::volume))
    }
}
