//! Facility hierarchy and traversal
//!
//! This module models the physical hierarchy being reported on and the
//! double-dispatch mechanism used to walk it.
//!
//! # Overview
//!
//! - **Building**: root of the hierarchy, owns an ordered list of levels
//! - **Level**: a floor, owns an ordered list of rooms
//! - **Room**: leaf node carrying a stored volume
//! - **FacilityVisitor / Visitable**: traversal without the entities knowing
//!   what the visitor does
//! - **Volume**: volume calculation for any node kind
//! - **BuildingGenerator**: realistic sample buildings
//!
//! # Usage Example
//!
//! ```rust
//! use building_volume_report::facility::*;
//!
//! let building = Building::new("B1", "HQ")
//!     .with_level(
//!         Level::new("L1", "Ground")
//!             .with_room(Room::new("R1", "Lobby", 50.0))
//!             .with_room(Room::new("R2", "Hall", 30.0)),
//!     )
//!     .with_level(Level::new("L2", "Roof"));
//!
//! assert_eq!(calculate_volume(&building), 80.0);
//! assert_eq!(calculate_volume(&building.levels[1]), 0.0);
//! ```

pub mod building;
pub mod generator;
pub mod level;
pub mod node;
pub mod room;
pub mod visitor;
pub mod volume;

pub use building::Building;
pub use generator::BuildingGenerator;
pub use level::Level;
pub use node::FacilityNode;
pub use room::Room;
pub use visitor::{FacilityVisitor, Visitable};
pub use volume::{calculate_volume, sum_volumes, Volume};

use serde::{Deserialize, Deserializer};

/// Read a `null` or missing child list as an empty one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
