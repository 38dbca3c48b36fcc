//! Integration tests for volume report generation
//!
//! These tests drive the public traversal API end to end and check that the
//! report mirrors the building and that every total agrees with the totals
//! beneath it.

use building_volume_report::facility::{
    calculate_volume, sum_volumes, Building, BuildingGenerator, FacilityVisitor, Level, Room,
    Visitable,
};
use building_volume_report::report::{BuildingReport, VolumeReportVisitor};
use building_volume_report::types::{BuildingId, LevelId, ReportConfig};

fn headquarters() -> Building {
    Building::new("B1", "HQ")
        .with_level(
            Level::new("L1", "Ground")
                .with_room(Room::new("R1", "Lobby", 50.0))
                .with_room(Room::new("R2", "Hall", 30.0)),
        )
        .with_level(Level::new("L2", "Roof"))
}

fn assert_mirrors(report: &BuildingReport, building: &Building) {
    assert_eq!(report.building_id, building.id);
    assert_eq!(report.building_name, building.name);
    assert_eq!(report.levels.len(), building.levels.len());

    for (level_report, level) in report.levels.iter().zip(&building.levels) {
        assert_eq!(level_report.level_id, level.id);
        assert_eq!(level_report.level_name, level.name);
        assert_eq!(level_report.rooms.len(), level.rooms.len());

        for (room_report, room) in level_report.rooms.iter().zip(&level.rooms) {
            assert_eq!(room_report.room_id, room.id);
            assert_eq!(room_report.room_name, room.name);
            assert_eq!(room_report.volume, room.volume);
        }
    }
}

/// Test the reference building from end to end
#[test]
fn test_headquarters_report() {
    let building = headquarters();
    let report = VolumeReportVisitor::generate(&building);

    assert_eq!(report.building_id, Some(BuildingId::from("B1")));
    assert_eq!(report.building_name.as_deref(), Some("HQ"));
    assert_eq!(report.total_volume, 80.0);

    let ground = &report.levels[0];
    assert_eq!(ground.level_id, Some(LevelId::from("L1")));
    assert_eq!(ground.total_volume, 80.0);
    assert_eq!(ground.rooms[0].room_name.as_deref(), Some("Lobby"));
    assert_eq!(ground.rooms[0].volume, 50.0);
    assert_eq!(ground.rooms[1].room_name.as_deref(), Some("Hall"));
    assert_eq!(ground.rooms[1].volume, 30.0);

    let roof = &report.levels[1];
    assert_eq!(roof.level_id, Some(LevelId::from("L2")));
    assert_eq!(roof.total_volume, 0.0);
    assert!(roof.total_volume.is_sign_positive());
    assert!(roof.rooms.is_empty());

    assert_mirrors(&report, &building);
}

/// Test that explicit traversal and the convenience entry point agree
#[test]
fn test_accept_matches_generate() {
    let building = headquarters();

    let mut visitor = VolumeReportVisitor::new();
    assert!(visitor.report().is_none());
    building.accept(&mut visitor);

    let report = visitor.finish().unwrap();
    assert_eq!(report, VolumeReportVisitor::generate(&building));
}

/// Test that a building with no levels reports zero
#[test]
fn test_empty_building() {
    let building = Building::new("B0", "Vacant");
    let report = VolumeReportVisitor::generate(&building);

    assert_eq!(report.total_volume, 0.0);
    assert!(report.total_volume.is_sign_positive());
    assert!(report.levels.is_empty());
    assert_eq!(
        report.to_json().unwrap(),
        r#"{"buildingId":"B0","buildingName":"Vacant","totalVolume":0.0,"levels":[]}"#
    );
    assert!(report.verify_consistency(0.0).is_ok());
}

/// Test that zero and fractional volumes are carried through unchanged
#[test]
fn test_zero_and_fractional_volumes() {
    let building = Building::new("B2", "Annex").with_level(
        Level::new("L1", "Ground")
            .with_room(Room::new("R1", "Closet", 0.0))
            .with_room(Room::new("R2", "Nook", 0.25))
            .with_room(Room::new("R3", "Alcove", 0.5)),
    );

    let report = VolumeReportVisitor::generate(&building);
    assert_eq!(report.levels[0].rooms[0].volume, 0.0);
    assert_eq!(report.levels[0].total_volume, 0.75);
    assert_eq!(report.total_volume, 0.75);
}

/// Test that level totals equal their room sums and the building total equals the level sum
#[test]
fn test_totals_are_consistent_for_generated_buildings() {
    let config = ReportConfig {
        generate: true,
        min_levels: 2,
        max_levels: 6,
        min_rooms_per_level: 0,
        max_rooms_per_level: 12,
        ..Default::default()
    };

    for seed in 0..20 {
        let mut generator = BuildingGenerator::with_seed(seed);
        let building = generator.generate_building(&config);
        let report = VolumeReportVisitor::generate(&building);

        for level in &report.levels {
            let rooms = sum_volumes(level.rooms.iter().map(|r| r.volume));
            assert_eq!(level.total_volume, rooms, "seed {} level {:?}", seed, level.level_id);
        }
        assert_eq!(report.total_volume, report.levels_volume(), "seed {}", seed);
        assert_eq!(report.total_volume, calculate_volume(&building), "seed {}", seed);
        assert!(report.verify_consistency(0.0).is_ok());

        assert_mirrors(&report, &building);
    }
}

/// Test that reporting twice on an unchanged building gives equal reports
#[test]
fn test_reporting_is_idempotent() {
    let building = BuildingGenerator::with_seed(3).generate_building(&ReportConfig {
        generate: true,
        ..Default::default()
    });

    let first = VolumeReportVisitor::generate(&building);
    let second = VolumeReportVisitor::generate(&building);
    assert_eq!(first, second);
}

/// Test that the report does not change when the building changes afterwards
#[test]
fn test_report_is_a_snapshot() {
    let mut building = headquarters();
    let report = VolumeReportVisitor::generate(&building);

    building.levels[0].add_room(Room::new("R3", "Vault", 100.0));
    building.name = Some("Renamed".to_string());

    assert_eq!(report.total_volume, 80.0);
    assert_eq!(report.building_name.as_deref(), Some("HQ"));
    assert_eq!(report.levels[0].rooms.len(), 2);

    let fresh = VolumeReportVisitor::generate(&building);
    assert_eq!(fresh.total_volume, 180.0);
}

/// Test that missing ids and names stay absent in the report
#[test]
fn test_unnamed_nodes_carry_no_name() {
    let building = Building::from_json_str(
        r#"{"id": "B9", "levels": [{"id": "L1", "rooms": [{"volume": 2.0}, {"name": "Den", "volume": 3.0}]}]}"#,
    )
    .unwrap();
    let report = VolumeReportVisitor::generate(&building);

    assert_mirrors(&report, &building);
    assert!(report.building_name.is_none());
    assert!(report.levels[0].level_name.is_none());
    assert!(report.levels[0].rooms[0].room_id.is_none());
    assert_eq!(report.levels[0].rooms[1].room_name.as_deref(), Some("Den"));
    assert_eq!(report.total_volume, 5.0);
}

/// Test that a custom visitor sees the hierarchy in document order
#[test]
fn test_traversal_order_seen_by_custom_visitor() {
    #[derive(Default)]
    struct Names(Vec<String>);

    impl FacilityVisitor for Names {
        fn visit_building(&mut self, building: &Building) {
            self.0.extend(building.name.clone());
        }
        fn visit_level(&mut self, level: &Level) {
            self.0.extend(level.name.clone());
        }
        fn visit_room(&mut self, room: &Room) {
            self.0.extend(room.name.clone());
        }
    }

    let mut names = Names::default();
    headquarters().accept(&mut names);
    assert_eq!(names.0, vec!["HQ", "Ground", "Lobby", "Hall", "Roof"]);
}

/// Test that a dynamically dispatched visitor works with the same traversal
#[test]
fn test_traversal_through_trait_object() {
    let building = headquarters();
    let mut visitor = VolumeReportVisitor::new();
    {
        let dynamic: &mut dyn FacilityVisitor = &mut visitor;
        building.accept(dynamic);
    }
    assert_eq!(visitor.report().map(|r| r.total_volume), Some(80.0));
}

/// Test that the summary reflects the report
#[test]
fn test_summary_of_headquarters() {
    let summary = VolumeReportVisitor::generate(&headquarters()).summary();

    assert_eq!(summary.level_count, 2);
    assert_eq!(summary.room_count, 2);
    assert_eq!(summary.empty_level_count, 1);
    assert_eq!(summary.total_volume, 80.0);
    assert_eq!(summary.average_room_volume, 40.0);
    assert_eq!(summary.largest_room.and_then(|r| r.room_name), Some("Lobby".to_string()));
}
