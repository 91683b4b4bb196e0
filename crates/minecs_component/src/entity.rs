//! The [`Entity`] type: an identity plus a set of components.
//!
//! An entity holds at most one component per [`ComponentKind`]. Components
//! are owned solely by their entity; dropping the entity drops them.

use std::collections::{BTreeMap, HashMap};
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::component::{Component, ComponentKind, ComponentTypeId, ErasedComponent};
use crate::error::EcsError;
use crate::id::EntityId;

/// An entity and the components attached to it.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    components: HashMap<ComponentTypeId, Box<dyn ErasedComponent>>,
}

impl Entity {
    /// Create an entity with no components.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            components: HashMap::new(),
        }
    }

    /// Returns this entity's identifier.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the component of type `T`, if present.
    #[must_use]
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&ComponentTypeId::of::<T>())
            .and_then(|c| c.downcast_ref())
    }

    /// Returns the component of type `T` mutably, if present.
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&ComponentTypeId::of::<T>())
            .and_then(|c| c.downcast_mut())
    }

    /// Returns the component of the given kind, if present.
    #[must_use]
    pub fn get_kind(&self, kind: &ComponentKind) -> Option<&dyn ErasedComponent> {
        self.components.get(&kind.id()).map(|c| &**c)
    }

    /// Attach a component.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::DuplicateComponent`] if the entity already has a
    /// component of the same kind. The existing component is left untouched.
    pub fn add<T: Component>(&mut self, component: T) -> Result<(), EcsError> {
        self.add_boxed(Box::new(component))
    }

    /// Attach a type-erased component.
    ///
    /// Kinds are keyed by name, so two Rust types sharing a `type_name` occupy
    /// the same slot. That is a programming error; debug builds assert on it.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::DuplicateComponent`] if the entity already has a
    /// component of the same kind.
    pub fn add_boxed(&mut self, component: Box<dyn ErasedComponent>) -> Result<(), EcsError> {
        let kind = component.component_kind();
        match self.components.entry(kind.id()) {
            Entry::Occupied(existing) => {
                debug_assert_eq!(
                    existing.get().as_any().type_id(),
                    component.as_any().type_id(),
                    "two component types share the kind name `{kind}`"
                );
                Err(EcsError::DuplicateComponent {
                    kind: kind.name().to_string(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(component);
                Ok(())
            }
        }
    }

    /// Detach and return the component of type `T`. Absent is not an error.
    ///
    /// A component of another type stored under the same kind name stays put.
    pub fn remove<T: Component>(&mut self) -> Option<T> {
        if !self.has::<T>() {
            return None;
        }
        self.components
            .remove(&ComponentTypeId::of::<T>())
            .and_then(|c| c.downcast().ok())
    }

    /// Detach and return the component of the given kind. Absent is not an error.
    pub fn remove_kind(&mut self, kind: &ComponentKind) -> Option<Box<dyn ErasedComponent>> {
        self.components.remove(&kind.id())
    }

    /// Apply `mutator` to the component of type `T` in place and return it.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::MissingComponent`] if the entity has no `T`; the
    /// mutator is not called.
    pub fn update<T, F>(&mut self, mutator: F) -> Result<&mut T, EcsError>
    where
        T: Component,
        F: FnOnce(&mut T),
    {
        let entity = self.id;
        let component = self
            .get_mut::<T>()
            .ok_or_else(|| EcsError::MissingComponent {
                entity,
                kind: T::type_name().to_string(),
            })?;
        mutator(&mut *component);
        Ok(component)
    }

    /// Returns `true` if the entity has a component of type `T`. Agrees with
    /// [`Entity::get`]; use [`Entity::has_kind`] to test the kind slot alone.
    #[must_use]
    pub fn has<T: Component>(&self) -> bool {
        self.get::<T>().is_some()
    }

    /// Returns `true` if the entity has a component of the given kind.
    #[must_use]
    pub fn has_kind(&self, kind: &ComponentKind) -> bool {
        self.components.contains_key(&kind.id())
    }

    /// Returns `true` if the entity has a component whose kind is named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::InvalidName`] if `name` is not a kind name, for
    /// example a rendered component value.
    pub fn has_component(&self, name: &str) -> Result<bool, EcsError> {
        let kind = ComponentKind::named(name)?;
        Ok(self.has_kind(&kind))
    }

    /// Returns the kinds held by this entity, sorted by name.
    #[must_use]
    pub fn kinds(&self) -> Vec<ComponentKind> {
        let mut kinds: Vec<_> = self
            .components
            .values()
            .map(|c| c.component_kind())
            .collect();
        kinds.sort_by(|a, b| a.name().cmp(b.name()));
        kinds
    }

    /// Number of components attached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if no components are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// A serialisable view of this entity for logging and inspection.
    #[must_use]
    pub fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            id: self.id,
            components: self
                .components
                .values()
                .map(|c| (c.component_kind().name().to_string(), format!("{c:?}")))
                .collect(),
        }
    }
}

/// Point-in-time rendering of an entity: its id and each component's `Debug`
/// output keyed by kind name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub components: BTreeMap<String, String>,
}
