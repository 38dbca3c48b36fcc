//! Identifier types for buildings, levels and rooms
//!
//! Identifiers are opaque strings supplied by whoever built the hierarchy.
//! Generated identifiers carry a short kind prefix followed by a simple UUID
//! (`BLD_`, `LVL_`, `ROOM_`), but any string is accepted from input.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used for generated identifiers of this kind
            pub const PREFIX: &'static str = $prefix;

            /// Generate a new random identifier
            pub fn new() -> Self {
                Self::from_uuid(Uuid::new_v4())
            }

            /// Build a prefixed identifier from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(format!("{}{}", Self::PREFIX, uuid.simple()))
            }

            /// Borrow the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this identifier was produced by [`Self::new`]
            pub fn is_generated(&self) -> bool {
                self.0
                    .strip_prefix(Self::PREFIX)
                    .map(|rest| Uuid::try_parse(rest).is_ok())
                    .unwrap_or(false)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for a building
    BuildingId,
    "BLD_"
);

string_id!(
    /// Unique identifier for a level (floor) within a building
    LevelId,
    "LVL_"
);

string_id!(
    /// Unique identifier for a room within a level
    RoomId,
    "ROOM_"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(BuildingId::new(), BuildingId::new());
        assert_ne!(LevelId::new(), LevelId::new());
        assert_ne!(RoomId::new(), RoomId::new());
        assert_ne!(RoomId::default(), RoomId::default());
    }

    #[test]
    fn test_generated_id_display() {
        let id = BuildingId::new();
        let display_str = id.to_string();

        assert!(display_str.starts_with("BLD_"));
        // BLD_ + 32 hex chars
        assert_eq!(display_str.len(), 36);
        assert!(id.is_generated());

        let level_id = LevelId::new();
        assert!(level_id.to_string().starts_with("LVL_"));
        assert_eq!(level_id.as_str().len(), 36);

        let room_id = RoomId::new();
        assert!(room_id.to_string().starts_with("ROOM_"));
        assert_eq!(room_id.as_str().len(), 37);
    }

    #[test]
    fn test_external_ids_pass_through() {
        let id = RoomId::from("R1");
        assert_eq!(id.as_str(), "R1");
        assert_eq!(id.to_string(), "R1");
        assert!(!id.is_generated());

        let owned: String = LevelId::from("L1".to_string()).into();
        assert_eq!(owned, "L1");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = BuildingId::from("B1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"B1\"");

        let parsed: BuildingId = serde_json::from_str("\"B1\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_hash_and_equality() {
        use std::collections::HashSet;

        let id1 = RoomId::from("R1");
        let id2 = RoomId::from("R2");
        let id1_copy = RoomId::from("R1");

        let mut set = HashSet::new();
        set.insert(id1.clone());
        set.insert(id2);
        set.insert(id1_copy);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&id1));
    }
}
