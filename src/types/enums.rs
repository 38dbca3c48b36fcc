//! Enumeration types for the volume reporter
//!
//! This module contains the room kinds used when generating sample buildings
//! and the output formats supported for serialized reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of rooms used to name generated rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    /// Building entrance
    Lobby,
    /// Individual or shared office space
    Office,
    /// Conference rooms
    MeetingRoom,
    /// Restroom facilities
    Bathroom,
    /// Break room kitchens
    Kitchen,
    /// Storage areas
    Storage,
    /// Technical equipment rooms
    ServerRoom,
    /// Research/testing areas
    Laboratory,
    /// Open hall or corridor space
    Hall,
}

impl RoomKind {
    /// Every room kind, in declaration order
    pub const ALL: [RoomKind; 9] = [
        RoomKind::Lobby,
        RoomKind::Office,
        RoomKind::MeetingRoom,
        RoomKind::Bathroom,
        RoomKind::Kitchen,
        RoomKind::Storage,
        RoomKind::ServerRoom,
        RoomKind::Laboratory,
        RoomKind::Hall,
    ];

    /// Room kinds that may appear on any level after the first room of the ground floor
    pub const GENERAL: [RoomKind; 8] = [
        RoomKind::Office,
        RoomKind::MeetingRoom,
        RoomKind::Bathroom,
        RoomKind::Kitchen,
        RoomKind::Storage,
        RoomKind::ServerRoom,
        RoomKind::Laboratory,
        RoomKind::Hall,
    ];
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomKind::Lobby => write!(f, "Lobby"),
            RoomKind::Office => write!(f, "Office"),
            RoomKind::MeetingRoom => write!(f, "Meeting Room"),
            RoomKind::Bathroom => write!(f, "Bathroom"),
            RoomKind::Kitchen => write!(f, "Kitchen"),
            RoomKind::Storage => write!(f, "Storage"),
            RoomKind::ServerRoom => write!(f, "Server Room"),
            RoomKind::Laboratory => write!(f, "Laboratory"),
            RoomKind::Hall => write!(f, "Hall"),
        }
    }
}

impl FromStr for RoomKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lobby" => Ok(RoomKind::Lobby),
            "office" => Ok(RoomKind::Office),
            "meeting room" | "meetingroom" => Ok(RoomKind::MeetingRoom),
            "bathroom" => Ok(RoomKind::Bathroom),
            "kitchen" => Ok(RoomKind::Kitchen),
            "storage" => Ok(RoomKind::Storage),
            "server room" | "serverroom" => Ok(RoomKind::ServerRoom),
            "laboratory" | "lab" => Ok(RoomKind::Laboratory),
            "hall" => Ok(RoomKind::Hall),
            _ => Err(format!("Unknown room kind: {}", s)),
        }
    }
}

/// Output formats for serialized reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Compact single-line JSON
    Json,
    /// Indented, human-readable JSON
    PrettyJson,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::PrettyJson => write!(f, "Pretty JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" | "pretty-json" | "prettyjson" => Ok(OutputFormat::PrettyJson),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
