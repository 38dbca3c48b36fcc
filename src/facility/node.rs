//! Borrowed view over any node of the hierarchy

use crate::facility::visitor::{FacilityVisitor, Visitable};
use crate::facility::volume::Volume;
use crate::facility::{Building, Level, Room};
use crate::types::{BuildingId, LevelId, RoomId};
use std::fmt;

/// A reference to a building, level or room
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FacilityNode<'a> {
    /// Root of the hierarchy
    Building(&'a Building),
    /// A level within a building
    Level(&'a Level),
    /// A room within a level
    Room(&'a Room),
}

impl<'a> FacilityNode<'a> {
    /// Identifier of the referenced node, if it has one
    pub fn id(&self) -> Option<&'a str> {
        match *self {
            FacilityNode::Building(b) => b.id.as_ref().map(BuildingId::as_str),
            FacilityNode::Level(l) => l.id.as_ref().map(LevelId::as_str),
            FacilityNode::Room(r) => r.id.as_ref().map(RoomId::as_str),
        }
    }

    /// Name of the referenced node, if it has one
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            FacilityNode::Building(b) => b.name.as_deref(),
            FacilityNode::Level(l) => l.name.as_deref(),
            FacilityNode::Room(r) => r.name.as_deref(),
        }
    }

    /// Short label for the node kind
    pub fn kind(&self) -> &'static str {
        match self {
            FacilityNode::Building(_) => "building",
            FacilityNode::Level(_) => "level",
            FacilityNode::Room(_) => "room",
        }
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        match self {
            FacilityNode::Building(b) => b.level_count(),
            FacilityNode::Level(l) => l.room_count(),
            FacilityNode::Room(_) => 0,
        }
    }
}

impl<'a> From<&'a Building> for FacilityNode<'a> {
    fn from(building: &'a Building) -> Self {
        FacilityNode::Building(building)
    }
}

impl<'a> From<&'a Level> for FacilityNode<'a> {
    fn from(level: &'a Level) -> Self {
        FacilityNode::Level(level)
    }
}

impl<'a> From<&'a Room> for FacilityNode<'a> {
    fn from(room: &'a Room) -> Self {
        FacilityNode::Room(room)
    }
}

impl Visitable for FacilityNode<'_> {
    fn accept<V: FacilityVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            FacilityNode::Building(b) => b.accept(visitor),
            FacilityNode::Level(l) => l.accept(visitor),
            FacilityNode::Room(r) => r.accept(visitor),
        }
    }
}

impl Volume for FacilityNode<'_> {
    fn volume(&self) -> f64 {
        match self {
            FacilityNode::Building(b) => b.volume(),
            FacilityNode::Level(l) => l.volume(),
            FacilityNode::Room(r) => r.volume(),
        }
    }
}

impl fmt::Display for FacilityNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())?;
        if let Some(id) = self.id() {
            write!(f, " {}", id)?;
        }
        if let Some(name) = self.name() {
            write!(f, " ({})", name)?;
        }
        Ok(())
    }
}
