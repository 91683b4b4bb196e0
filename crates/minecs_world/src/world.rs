//! The [`World`] facade: one entity manager plus the systems that run over it.
//!
//! Entity operations are forwarded to the owned [`EntityManager`] through
//! explicit wrappers; the full manager surface is reachable through
//! [`World::manager`] and [`World::manager_mut`].

use minecs_component::{Bundle, ComponentKind, EcsError, Entity, EntityFilter, EntityId, IdSource};
use tracing::{debug, warn};

use crate::error::WorldError;
use crate::manager::EntityManager;
use crate::registry::SystemRegistry;
use crate::system::System;

/// Top-level ECS container.
#[derive(Debug, Default)]
pub struct World {
    manager: EntityManager,
    systems: SystemRegistry,
    tick_id: u64,
}

impl World {
    /// Create an empty world with its own id sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty world drawing entity ids from `source`.
    #[must_use]
    pub fn with_id_source(source: impl IdSource + 'static) -> Self {
        Self {
            manager: EntityManager::with_id_source(source),
            ..Self::default()
        }
    }

    /// Returns the number of ticks started so far.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Returns the entity manager.
    #[must_use]
    pub fn manager(&self) -> &EntityManager {
        &self.manager
    }

    /// Returns the entity manager mutably.
    pub fn manager_mut(&mut self) -> &mut EntityManager {
        &mut self.manager
    }

    // -- Systems --

    /// Register `system` to run after every system already registered.
    pub fn add_system<S: System>(&mut self, system: S) {
        self.systems.register(system);
    }

    /// Remove every registered system of type `S`. Returns how many were removed.
    pub fn remove_system<S: System>(&mut self) -> usize {
        self.systems.unregister::<S>()
    }

    /// Number of registered systems.
    #[must_use]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Names of registered systems in execution order.
    #[must_use]
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.names()
    }

    /// Run one tick: every registered system once, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::SystemFailed`] for the first system that fails.
    /// Systems after it do not run this tick; changes made before the
    /// failure are kept.
    pub fn process(&mut self) -> Result<(), WorldError> {
        self.tick_id += 1;
        debug!(
            tick_id = self.tick_id,
            systems = self.systems.len(),
            entities = self.manager.len(),
            "tick start"
        );

        for entry in self.systems.iter_mut() {
            if let Err(source) = entry.system.process(&mut self.manager) {
                warn!(
                    tick_id = self.tick_id,
                    system = entry.name,
                    error = %source,
                    "system failed, aborting tick"
                );
                return Err(WorldError::SystemFailed {
                    system: entry.name,
                    tick_id: self.tick_id,
                    source,
                });
            }
        }
        Ok(())
    }

    // -- Forwarded to the entity manager --

    /// See [`EntityManager::create_entity`].
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::DuplicateComponent`] if the bundle repeats a kind.
    pub fn create_entity<B: Bundle>(&mut self, bundle: B) -> Result<&mut Entity, EcsError> {
        self.manager.create_entity(bundle)
    }

    /// See [`EntityManager::find_by_id`].
    #[must_use]
    pub fn find_by_id(&self, id: EntityId) -> Option<&Entity> {
        self.manager.find_by_id(id)
    }

    /// See [`EntityManager::find_by_id_mut`].
    pub fn find_by_id_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.manager.find_by_id_mut(id)
    }

    /// See [`EntityManager::find_by_component_names`].
    #[must_use]
    pub fn find_by_component_names(&self, kinds: &[ComponentKind]) -> Vec<&Entity> {
        self.manager.find_by_component_names(kinds)
    }

    /// See [`EntityManager::find_by_component_names_mut`].
    pub fn find_by_component_names_mut(&mut self, kinds: &[ComponentKind]) -> Vec<&mut Entity> {
        self.manager.find_by_component_names_mut(kinds)
    }

    /// See [`EntityManager::find_by_names`].
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::InvalidName`] if any name is not a kind name.
    pub fn find_by_names(&self, names: &[&str]) -> Result<Vec<&Entity>, EcsError> {
        self.manager.find_by_names(names)
    }

    /// See [`EntityManager::query`].
    #[must_use]
    pub fn query(&self, filter: &EntityFilter) -> Vec<&Entity> {
        self.manager.query(filter)
    }

    /// See [`EntityManager::remove_by_id`].
    pub fn remove_by_id(&mut self, id: EntityId) -> usize {
        self.manager.remove_by_id(id)
    }
}
