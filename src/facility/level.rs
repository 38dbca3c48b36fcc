//! Level (floor) model
//!
//! This module contains the Level struct, which owns an ordered list of rooms.

use crate::facility::room::Room;
use crate::facility::visitor::{FacilityVisitor, Visitable};
use crate::facility::volume::{sum_volumes, Volume};
use crate::types::{LevelId, RoomId};
use serde::{Deserialize, Serialize};

/// Represents a level (floor) within a building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Unique identifier for the level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LevelId>,
    /// Human-readable name of the level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rooms on this level, in insertion order
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub rooms: Vec<Room>,
}

impl Level {
    /// Create a new level without rooms
    pub fn new(id: impl Into<LevelId>, name: impl Into<String>) -> Self {
        Self { id: Some(id.into()), name: Some(name.into()), rooms: Vec::new() }
    }

    /// Create a level with a generated identifier
    pub fn with_generated_id(name: impl Into<String>) -> Self {
        Self::new(LevelId::new(), name)
    }

    /// Builder-style variant of [`Level::add_room`]
    pub fn with_room(mut self, room: Room) -> Self {
        self.add_room(room);
        self
    }

    /// Append a room to the level
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Remove a room from the level
    pub fn remove_room(&mut self, room_id: &RoomId) -> Option<Room> {
        let pos = self.rooms.iter().position(|r| r.id.as_ref() == Some(room_id))?;
        Some(self.rooms.remove(pos))
    }

    /// Get a room by ID
    pub fn get_room(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id.as_ref() == Some(room_id))
    }

    /// Get the number of rooms on the level
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Check whether the level has no rooms
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Visitable for Level {
    fn accept<V: FacilityVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_level(self);
        for room in &self.rooms {
            room.accept(visitor);
        }
    }
}

impl Volume for Level {
    fn volume(&self) -> f64 {
        sum_volumes(self.rooms.iter().map(Volume::volume))
    }
}
