//! End-to-end behaviour of a world driving systems over entities.

use minecs_component::{Component, ComponentKind, EcsError, SharedAllocator};
use minecs_world::{EntityManager, System, TickConfig, World, WorldError};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position {
    x: i32,
    y: i32,
}

impl Component for Position {
    fn type_name() -> &'static str {
        "Position"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Speed {
    x: i32,
    y: i32,
}

impl Component for Speed {
    fn type_name() -> &'static str {
        "Speed"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Health(u32);

impl Component for Health {
    fn type_name() -> &'static str {
        "Health"
    }
}

struct Movement;

impl System for Movement {
    fn process(&mut self, manager: &mut EntityManager) -> anyhow::Result<()> {
        for entity in manager.find_by_component_names_mut(&[Speed::kind()]) {
            let speed = *entity.get::<Speed>().expect("matched on Speed");
            entity.update::<Position, _>(|p| {
                p.x += speed.x;
                p.y += speed.y;
            })?;
        }
        Ok(())
    }
}

fn kinds_of(world: &World, id: minecs_component::EntityId) -> Vec<String> {
    world
        .find_by_id(id)
        .unwrap()
        .kinds()
        .iter()
        .map(|k| k.name().to_string())
        .collect()
}

#[test]
fn test_movement_scenario() {
    let mut world = World::new();
    let a = world
        .create_entity((Position { x: 0, y: 0 }, Speed { x: 5, y: 10 }))
        .unwrap()
        .id();
    let b = world
        .create_entity((Position { x: 10, y: 5 }, Speed { x: 1, y: 2 }, Health(100)))
        .unwrap()
        .id();
    world.add_system(Movement);

    world.process().unwrap();

    let entity_a = world.find_by_id(a).unwrap();
    assert_eq!(entity_a.get::<Position>(), Some(&Position { x: 5, y: 10 }));
    let entity_b = world.find_by_id(b).unwrap();
    assert_eq!(entity_b.get::<Position>(), Some(&Position { x: 11, y: 7 }));
    assert_eq!(entity_b.get::<Health>(), Some(&Health(100)));

    assert_eq!(kinds_of(&world, a), vec!["Position", "Speed"]);
    assert_eq!(kinds_of(&world, b), vec!["Health", "Position", "Speed"]);
}

#[test]
fn test_removed_system_leaves_no_trace() {
    let mut world = World::new();
    let a = world
        .create_entity((Position { x: 0, y: 0 }, Speed { x: 1, y: 1 }))
        .unwrap()
        .id();
    world.add_system(Movement);
    world.add_system(Movement);
    world.process().unwrap();
    assert_eq!(world.find_by_id(a).unwrap().get::<Position>(), Some(&Position { x: 2, y: 2 }));

    assert_eq!(world.remove_system::<Movement>(), 2);
    world.process().unwrap();
    assert_eq!(world.find_by_id(a).unwrap().get::<Position>(), Some(&Position { x: 2, y: 2 }));
}

#[test]
fn test_missing_component_aborts_tick() {
    struct Counter(u32);
    impl System for Counter {
        fn process(&mut self, _: &mut EntityManager) -> anyhow::Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    let mut world = World::new();
    // Speed without Position: Movement's update fails.
    let lonely = world.create_entity((Speed { x: 1, y: 1 },)).unwrap().id();
    world.add_system(Movement);
    world.add_system(Counter(0));

    let Err(WorldError::SystemFailed { source, tick_id, .. }) = world.process() else {
        panic!("expected SystemFailed");
    };
    assert_eq!(tick_id, 1);
    assert_eq!(
        source.downcast_ref::<EcsError>(),
        Some(&EcsError::MissingComponent {
            entity: lonely,
            kind: "Position".to_string()
        })
    );
}

#[test]
fn test_union_query_through_world() {
    let mut world = World::new();
    let e1 = world.create_entity((Position { x: 0, y: 0 },)).unwrap().id();
    let e2 = world.create_entity((Speed { x: 0, y: 0 },)).unwrap().id();
    let e3 = world
        .create_entity((Position { x: 0, y: 0 }, Speed { x: 0, y: 0 }))
        .unwrap()
        .id();
    world.create_entity((Health(1),)).unwrap();

    let ids = |found: Vec<&minecs_component::Entity>| found.iter().map(|e| e.id()).collect::<Vec<_>>();
    assert_eq!(
        ids(world.find_by_component_names(&[Position::kind(), Speed::kind()])),
        vec![e1, e2, e3]
    );
    assert_eq!(ids(world.find_by_component_names(&[Position::kind()])), vec![e1, e3]);
    assert_eq!(ids(world.find_by_names(&["Speed"]).unwrap()), vec![e2, e3]);
}

#[test]
fn test_has_component_rejects_instances() {
    let mut world = World::new();
    let id = world.create_entity((Health(3),)).unwrap().id();
    let entity = world.find_by_id(id).unwrap();
    assert_eq!(entity.has_component("Health"), Ok(true));
    let rendered = format!("{:?}", Health(3));
    assert_eq!(
        entity.has_component(&rendered),
        Err(EcsError::InvalidName { found: rendered.clone() })
    );
    assert!(ComponentKind::named(&rendered).is_err());
}

#[test]
fn test_worlds_sharing_an_id_sequence() {
    let ids = SharedAllocator::new();
    let mut first = World::with_id_source(ids.clone());
    let mut second = World::with_id_source(ids.clone());
    let a = first.create_entity(()).unwrap().id();
    let b = second.create_entity(()).unwrap().id();
    let c = first.create_entity(()).unwrap().id();
    assert!(a < b && b < c);
    assert_eq!(ids.count(), 3);
}

#[test]
fn test_independent_worlds_have_independent_ids() {
    let mut first = World::new();
    let mut second = World::new();
    let a = first.create_entity(()).unwrap().id();
    let b = second.create_entity(()).unwrap().id();
    assert_eq!(a, b);
}

#[test]
fn test_run_single_tick_moves_once() {
    let mut world = World::new();
    let a = world
        .create_entity((Position { x: 0, y: 0 }, Speed { x: 5, y: 10 }))
        .unwrap()
        .id();
    world.add_system(Movement);
    assert_eq!(world.run(&TickConfig::new(60.0, 1)).unwrap(), 1);
    assert_eq!(world.find_by_id(a).unwrap().get::<Position>(), Some(&Position { x: 5, y: 10 }));
}

#[test]
fn test_run_with_unusable_rate_leaves_world_untouched() {
    let mut world = World::new();
    let a = world
        .create_entity((Position { x: 0, y: 0 }, Speed { x: 5, y: 10 }))
        .unwrap()
        .id();
    world.add_system(Movement);
    for rate in [1e-30, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            world.run(&TickConfig::new(rate, 1)),
            Err(WorldError::InvalidTickRate { .. })
        ));
    }
    assert_eq!(world.tick_id(), 0);
    assert_eq!(world.find_by_id(a).unwrap().get::<Position>(), Some(&Position { x: 0, y: 0 }));
}
