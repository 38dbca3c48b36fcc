//! Double-dispatch traversal over the facility hierarchy
//!
//! Entities implement [`Visitable`]; anything that wants to walk a building
//! implements [`FacilityVisitor`]. The entities never learn what the visitor
//! does with them.
//!
//! Traversal order is fixed: the building first, then for each level in list
//! order the level itself followed by each of its rooms in list order, before
//! moving on to the next level. Every reachable node is visited exactly once
//! and there is no way to stop early.

use crate::facility::{Building, Level, Room};

/// Callback target notified once per node during a traversal
pub trait FacilityVisitor {
    /// Called when traversal reaches a building
    fn visit_building(&mut self, building: &Building);

    /// Called when traversal reaches a level
    fn visit_level(&mut self, level: &Level);

    /// Called when traversal reaches a room
    fn visit_room(&mut self, room: &Room);
}

/// A node that can dispatch a visitor to itself and its children
pub trait Visitable {
    /// Notify `visitor` of this node, then propagate to every child in order
    fn accept<V: FacilityVisitor + ?Sized>(&self, visitor: &mut V);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::FacilityNode;

    fn label<'a>(node: impl Into<FacilityNode<'a>>) -> String {
        let node = node.into();
        format!("{}:{}", node.kind(), node.id().unwrap_or("-"))
    }

    /// Records the order in which nodes are visited
    #[derive(Default)]
    struct TraceVisitor {
        trace: Vec<String>,
    }

    impl FacilityVisitor for TraceVisitor {
        fn visit_building(&mut self, building: &Building) {
            self.trace.push(label(building));
        }

        fn visit_level(&mut self, level: &Level) {
            self.trace.push(label(level));
        }

        fn visit_room(&mut self, room: &Room) {
            self.trace.push(label(room));
        }
    }

    fn two_level_building() -> Building {
        Building::new("B1", "HQ")
            .with_level(
                Level::new("L1", "Ground")
                    .with_room(Room::new("R1", "Lobby", 50.0))
                    .with_room(Room::new("R2", "Hall", 30.0)),
            )
            .with_level(Level::new("L2", "Roof"))
            .with_level(Level::new("L3", "Penthouse").with_room(Room::new("R3", "Suite", 12.0)))
    }

    #[test]
    fn test_traversal_order() {
        let mut visitor = TraceVisitor::default();
        two_level_building().accept(&mut visitor);

        assert_eq!(
            visitor.trace,
            vec![
                "building:B1",
                "level:L1",
                "room:R1",
                "room:R2",
                "level:L2",
                "level:L3",
                "room:R3",
            ]
        );
    }

    #[test]
    fn test_traversal_from_level_and_room() {
        let building = two_level_building();

        let mut visitor = TraceVisitor::default();
        building.levels[0].accept(&mut visitor);
        assert_eq!(visitor.trace, vec!["level:L1", "room:R1", "room:R2"]);

        let mut visitor = TraceVisitor::default();
        building.levels[2].rooms[0].accept(&mut visitor);
        assert_eq!(visitor.trace, vec!["room:R3"]);
    }

    #[test]
    fn test_accept_through_trait_object() {
        let building = two_level_building();
        let mut visitor = TraceVisitor::default();
        {
            let dyn_visitor: &mut dyn FacilityVisitor = &mut visitor;
            building.accept(dyn_visitor);
        }
        assert_eq!(visitor.trace.len(), 7);
    }

    #[test]
    fn test_empty_building_visits_only_root() {
        let mut visitor = TraceVisitor::default();
        Building::new("B0", "Empty").accept(&mut visitor);
        assert_eq!(visitor.trace, vec!["building:B0"]);
    }
}
