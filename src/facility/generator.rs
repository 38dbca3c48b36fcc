//! Sample building generation
//!
//! This module contains a generator for realistic sample buildings, used to
//! exercise the reporter without an input file. With a seed the output is
//! fully reproducible, identifiers included.

use crate::facility::{building::Building, level::Level, room::Room};
use crate::types::{BuildingId, LevelId, ReportConfig, RoomId, RoomKind};
use rand::{prelude::*, rngs::StdRng, RngCore, SeedableRng};
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

const BUILDING_NAMES: [&str; 10] = [
    "Headquarters",
    "North Tower",
    "South Annex",
    "Riverside Offices",
    "Innovation Center",
    "Harbor House",
    "Maple Court",
    "Summit Plaza",
    "Granite Works",
    "Lakeside Pavilion",
];

/// Generator for sample buildings with levels and rooms
pub struct BuildingGenerator {
    rng: Box<dyn RngCore>,
    seeded: bool,
}

impl fmt::Debug for BuildingGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildingGenerator").field("seeded", &self.seeded).finish()
    }
}

impl Default for BuildingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildingGenerator {
    /// Create a new generator backed by the thread-local RNG
    pub fn new() -> Self {
        Self { rng: Box::new(thread_rng()), seeded: false }
    }

    /// Create a new generator with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)), seeded: true }
    }

    /// Create a generator honouring the configured seed, if any
    pub fn from_config(config: &ReportConfig) -> Self {
        match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                Self::with_seed(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                Self::new()
            }
        }
    }

    /// Generate a building within the configured level, room and volume ranges
    pub fn generate_building(&mut self, config: &ReportConfig) -> Building {
        let (min_levels, max_levels) = config.levels_range();
        let level_count = self.rng.gen_range(min_levels..=max_levels);

        let name = BUILDING_NAMES[self.rng.gen_range(0..BUILDING_NAMES.len())];
        let id = BuildingId::from_uuid(self.next_uuid());
        let mut building = Building::new(id.clone(), name);

        for index in 0..level_count {
            let level = self.generate_level(index, config);
            building.add_level(level);
        }

        info!(
            "Generated building {} ({}) with {} levels and {} rooms",
            id,
            name,
            building.level_count(),
            building.room_count()
        );
        building
    }

    /// Generate a single level; index 0 is the ground floor
    pub fn generate_level(&mut self, index: usize, config: &ReportConfig) -> Level {
        let (min_rooms, max_rooms) = config.rooms_per_level();
        let room_count = self.rng.gen_range(min_rooms..=max_rooms);

        let mut level = Level::new(LevelId::from_uuid(self.next_uuid()), Self::level_name(index));

        for room_index in 0..room_count {
            let kind = if index == 0 && room_index == 0 {
                RoomKind::Lobby
            } else {
                RoomKind::GENERAL[self.rng.gen_range(0..RoomKind::GENERAL.len())]
            };
            let room = self.generate_room(kind, index, room_index, config);
            level.add_room(room);
        }

        debug!("Generated level {} with {} rooms", index, level.room_count());
        level
    }

    fn generate_room(
        &mut self,
        kind: RoomKind,
        level_index: usize,
        room_index: usize,
        config: &ReportConfig,
    ) -> Room {
        let (min_volume, max_volume) = config.room_volume_range();
        let raw = self.rng.gen_range(min_volume..=max_volume);
        // Two decimals keeps reports readable; clamp so rounding never leaves the range
        let volume = ((raw * 100.0).round() / 100.0).clamp(min_volume, max_volume);

        let name = format!("{} {}{:02}", kind, level_index, room_index + 1);
        Room::new(RoomId::from_uuid(self.next_uuid()), name, volume)
    }

    fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    fn level_name(index: usize) -> String {
        match index {
            0 => "Ground Floor".to_string(),
            n => format!("Level {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::Volume;

    fn config() -> ReportConfig {
        ReportConfig { generate: true, ..Default::default() }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let first = BuildingGenerator::with_seed(42).generate_building(&config());
        let second = BuildingGenerator::with_seed(42).generate_building(&config());
        assert_eq!(first, second);

        let other = BuildingGenerator::with_seed(43).generate_building(&config());
        assert_ne!(first.id, other.id);
    }

    #[test]
    fn test_generation_respects_ranges() {
        let config = ReportConfig {
            min_levels: 2,
            max_levels: 4,
            min_rooms_per_level: 1,
            max_rooms_per_level: 3,
            min_room_volume: 20.0,
            max_room_volume: 40.0,
            ..config()
        };

        for seed in 0..20 {
            let building = BuildingGenerator::with_seed(seed).generate_building(&config);
            assert!((2..=4).contains(&building.level_count()));
            for level in &building.levels {
                assert!((1..=3).contains(&level.room_count()));
                for room in &level.rooms {
                    assert!((20.0..=40.0).contains(&room.volume), "volume {}", room.volume);
                }
            }
        }
    }

    #[test]
    fn test_generated_names_and_ids() {
        let config = ReportConfig { min_levels: 2, max_levels: 2, min_rooms_per_level: 2, ..config() };
        let building = BuildingGenerator::with_seed(7).generate_building(&config);

        assert!(building.id.as_ref().is_some_and(BuildingId::is_generated));
        assert_eq!(building.levels[0].name.as_deref(), Some("Ground Floor"));
        assert_eq!(building.levels[1].name.as_deref(), Some("Level 1"));
        assert_eq!(building.levels[0].rooms[0].name.as_deref(), Some("Lobby 001"));
        assert!(building.levels.iter().all(|l| l.id.as_ref().is_some_and(LevelId::is_generated)));
        assert!(building.rooms().all(|r| r.id.as_ref().is_some_and(RoomId::is_generated)));
    }

    #[test]
    fn test_zero_ranges_produce_empty_structures() {
        let config = ReportConfig {
            min_levels: 1,
            max_levels: 1,
            min_rooms_per_level: 0,
            max_rooms_per_level: 0,
            ..config()
        };
        let building = BuildingGenerator::with_seed(1).generate_building(&config);
        assert_eq!(building.level_count(), 1);
        assert!(building.levels[0].is_empty());
        assert_eq!(building.volume(), 0.0);
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = ReportConfig { seed: Some(9), ..config() };
        let first = BuildingGenerator::from_config(&config).generate_building(&config);
        let second = BuildingGenerator::from_config(&config).generate_building(&config);
        assert_eq!(first, second);
    }
}
