//! Room model
//!
//! This module contains the Room struct, the leaf node of the facility
//! hierarchy. A room carries its own volume; every aggregate is derived from it.

use crate::facility::visitor::{FacilityVisitor, Visitable};
use crate::facility::volume::Volume;
use crate::types::RoomId;
use serde::{Deserialize, Serialize};

/// Represents a room within a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RoomId>,
    /// Human-readable name of the room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Stored volume of the room, in whatever single unit the input uses
    #[serde(default, alias = "cube")]
    pub volume: f64,
}

impl Room {
    /// Create a new room
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>, volume: f64) -> Self {
        Self { id: Some(id.into()), name: Some(name.into()), volume }
    }

    /// Create a room with neither identifier nor name
    pub fn anonymous(volume: f64) -> Self {
        Self { id: None, name: None, volume }
    }

    /// Create a room with a generated identifier
    pub fn with_generated_id(name: impl Into<String>, volume: f64) -> Self {
        Self::new(RoomId::new(), name, volume)
    }
}

impl Visitable for Room {
    fn accept<V: FacilityVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_room(self);
    }
}

impl Volume for Room {
    fn volume(&self) -> f64 {
        self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_creation() {
        let room = Room::new("R1", "Lobby", 50.0);

        assert_eq!(room.id, Some(RoomId::from("R1")));
        assert_eq!(room.name.as_deref(), Some("Lobby"));
        assert_eq!(room.volume, 50.0);
        assert_eq!(Volume::volume(&room), 50.0);
    }

    #[test]
    fn test_room_with_generated_id() {
        let room = Room::with_generated_id("Storage", 12.5);
        assert!(room.id.as_ref().is_some_and(RoomId::is_generated));
        assert_eq!(room.name.as_deref(), Some("Storage"));
    }

    #[test]
    fn test_room_deserializes_cube_alias() {
        let room: Room = serde_json::from_str(r#"{"id": "R9", "name": "Vault", "cube": 42.0}"#)
            .unwrap();
        assert_eq!(room.volume, 42.0);

        let room: Room = serde_json::from_str(r#"{"id": "R9", "volume": 7.0}"#).unwrap();
        assert_eq!(room.volume, 7.0);
        assert!(room.name.is_none());
    }

    #[test]
    fn test_room_missing_volume_defaults_to_zero() {
        let room: Room = serde_json::from_str(r#"{"id": "R1", "name": "Closet"}"#).unwrap();
        assert_eq!(room.volume, 0.0);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let room: Room = serde_json::from_str(r#"{"volume": 3.5}"#).unwrap();
        assert_eq!(room, Room::anonymous(3.5));
        assert_eq!(serde_json::to_string(&room).unwrap(), r#"{"volume":3.5}"#);
    }
}
