//! Authoritative entity storage.
//!
//! The [`EntityManager`] owns every live [`Entity`] in insertion order. It is
//! the single source of truth: entities are never copied elsewhere, and
//! systems only borrow the manager for the duration of one `process` call.

use minecs_component::{
    Bundle, ComponentKind, EcsError, Entity, EntityFactory, EntityFilter, EntityId, IdSource,
};
use tracing::debug;

/// Owns all entities and answers lookups over them.
#[derive(Debug, Default)]
pub struct EntityManager {
    factory: EntityFactory,
    entities: Vec<Entity>,
}

impl EntityManager {
    /// Create an empty manager with its own id sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager drawing ids from `source`.
    #[must_use]
    pub fn with_id_source(source: impl IdSource + 'static) -> Self {
        Self {
            factory: EntityFactory::with_id_source(source),
            entities: Vec::new(),
        }
    }

    /// Build an entity from `bundle`, store it, and return it.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::DuplicateComponent`] if the bundle holds two
    /// components of the same kind. Nothing is stored in that case.
    pub fn create_entity<B: Bundle>(&mut self, bundle: B) -> Result<&mut Entity, EcsError> {
        let entity = self.factory.create(bundle)?;
        self.entities.push(entity);
        let index = self.entities.len() - 1;
        Ok(&mut self.entities[index])
    }

    /// Returns the entity with `id`, if it is alive.
    #[must_use]
    pub fn find_by_id(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// Returns the entity with `id` mutably, if it is alive.
    pub fn find_by_id_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    /// Returns every entity holding at least one of `kinds`, in creation order.
    ///
    /// An empty `kinds` slice matches nothing.
    #[must_use]
    pub fn find_by_component_names(&self, kinds: &[ComponentKind]) -> Vec<&Entity> {
        self.query(&EntityFilter::any_of(kinds.iter().cloned()))
    }

    /// Mutable variant of [`find_by_component_names`](Self::find_by_component_names).
    pub fn find_by_component_names_mut(&mut self, kinds: &[ComponentKind]) -> Vec<&mut Entity> {
        self.query_mut(&EntityFilter::any_of(kinds.iter().cloned()))
    }

    /// Like [`find_by_component_names`](Self::find_by_component_names), with
    /// kinds given by name.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::InvalidName`] if any name is not a kind name.
    pub fn find_by_names(&self, names: &[&str]) -> Result<Vec<&Entity>, EcsError> {
        let kinds = names
            .iter()
            .map(|name| ComponentKind::named(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.find_by_component_names(&kinds))
    }

    /// Returns every entity matching `filter`, in creation order.
    #[must_use]
    pub fn query(&self, filter: &EntityFilter) -> Vec<&Entity> {
        self.entities.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Returns every entity matching `filter` mutably, in creation order.
    pub fn query_mut(&mut self, filter: &EntityFilter) -> Vec<&mut Entity> {
        self.entities
            .iter_mut()
            .filter(|e| filter.matches(e))
            .collect()
    }

    /// Remove every entity with `id`. Returns how many were removed; removing
    /// an unknown id is a no-op.
    pub fn remove_by_id(&mut self, id: EntityId) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| e.id() != id);
        let removed = before - self.entities.len();
        if removed > 0 {
            debug!(entity = %id, "removed entity");
        }
        removed
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if there are no live entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all entities in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate mutably over all entities in creation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }
}
