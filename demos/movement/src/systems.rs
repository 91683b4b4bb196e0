//! Demo systems.

use anyhow::Result;
use components::{Name, Position, Speed};
use minecs_component::{Component, EntityFilter};
use minecs_world::{EntityManager, System};
use tracing::info;

/// Adds each entity's [`Speed`] to its [`Position`].
pub struct Movement;

impl System for Movement {
    fn process(&mut self, manager: &mut EntityManager) -> Result<()> {
        let moving = EntityFilter::new().with::<Position>().with::<Speed>();
        for entity in manager.query_mut(&moving) {
            let Some(speed) = entity.get::<Speed>().copied() else {
                continue;
            };
            entity.update::<Position, _>(|pos| {
                pos.x += speed.x;
                pos.y += speed.y;
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "movement"
    }
}

/// Logs every positioned entity.
pub struct LogPositions;

impl System for LogPositions {
    fn process(&mut self, manager: &mut EntityManager) -> Result<()> {
        for entity in manager.find_by_component_names(&[Position::kind()]) {
            let Some(pos) = entity.get::<Position>() else {
                continue;
            };
            let name = entity.get::<Name>().map_or("-", |n| n.0.as_str());
            info!(entity = %entity.id(), name, x = pos.x, y = pos.y, "position");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log_positions"
    }
}

#[cfg(test)]
mod tests {
    use components::Health;
    use minecs_world::World;

    use super::*;

    #[test]
    fn test_movement_needs_both_position_and_speed() {
        let mut world = World::new();
        let moving = world
            .create_entity((Position::new(10.0, 5.0), Speed::new(1.0, 2.0), Health(100)))
            .unwrap()
            .id();
        let parked = world.create_entity((Position::new(3.0, 3.0),)).unwrap().id();
        let drifting = world.create_entity((Speed::new(9.0, 9.0),)).unwrap().id();
        world.add_system(Movement);

        world.process().unwrap();

        let entity = world.find_by_id(moving).unwrap();
        assert_eq!(entity.get::<Position>(), Some(&Position::new(11.0, 7.0)));
        assert_eq!(entity.get::<Health>(), Some(&Health(100)));
        assert_eq!(
            world.find_by_id(parked).unwrap().get::<Position>(),
            Some(&Position::new(3.0, 3.0))
        );
        assert!(!world.find_by_id(drifting).unwrap().has::<Position>());
    }
}
