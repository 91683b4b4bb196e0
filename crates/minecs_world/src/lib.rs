//! # minecs_world
//!
//! Entity storage, systems, and the tick-driven [`World`] that ties them
//! together.
//!
//! ## Usage
//!
//! ```rust
//! use minecs_component::Component;
//! use minecs_world::{EntityManager, System, World};
//!
//! #[derive(Debug, PartialEq)]
//! struct Position { x: i32, y: i32 }
//! impl Component for Position { fn type_name() -> &'static str { "Position" } }
//!
//! #[derive(Debug)]
//! struct Speed { x: i32, y: i32 }
//! impl Component for Speed { fn type_name() -> &'static str { "Speed" } }
//!
//! struct Movement;
//! impl System for Movement {
//!     fn process(&mut self, manager: &mut EntityManager) -> anyhow::Result<()> {
//!         for entity in manager.find_by_component_names_mut(&[Speed::kind()]) {
//!             let Some(speed) = entity.get::<Speed>() else { continue };
//!             let (dx, dy) = (speed.x, speed.y);
//!             entity.update::<Position, _>(|p| { p.x += dx; p.y += dy; })?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut world = World::new();
//! let id = world.create_entity((Position { x: 0, y: 0 }, Speed { x: 5, y: 10 })).unwrap().id();
//! world.add_system(Movement);
//! world.process().unwrap();
//! assert_eq!(world.find_by_id(id).unwrap().get::<Position>(), Some(&Position { x: 5, y: 10 }));
//! ```

pub mod error;
pub mod manager;
pub mod registry;
pub mod system;
pub mod tick;
pub mod world;

pub use error::WorldError;
pub use manager::EntityManager;
pub use registry::{RegisteredSystem, SystemRegistry};
pub use system::System;
pub use tick::TickConfig;
pub use world::World;
