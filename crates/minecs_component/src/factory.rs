//! Entity construction.

use tracing::debug;

use crate::bundle::Bundle;
use crate::entity::Entity;
use crate::error::EcsError;
use crate::id::{EntityAllocator, IdSource};

/// Builds fresh entities, drawing ids from an injected [`IdSource`].
pub struct EntityFactory {
    ids: Box<dyn IdSource>,
}

impl EntityFactory {
    /// A factory with its own [`EntityAllocator`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_source(EntityAllocator::new())
    }

    /// A factory drawing ids from `source`.
    #[must_use]
    pub fn with_id_source(source: impl IdSource + 'static) -> Self {
        Self {
            ids: Box::new(source),
        }
    }

    /// Create an entity holding every component in `bundle`.
    ///
    /// The id is taken before the components are merged, so a failed
    /// construction still consumes one id.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::DuplicateComponent`] if two components in the
    /// bundle share a kind. Colliding kinds are never silently overwritten.
    pub fn create<B: Bundle>(&mut self, bundle: B) -> Result<Entity, EcsError> {
        let mut entity = Entity::new(self.ids.next_id());
        for component in bundle.into_components() {
            entity.add_boxed(component)?;
        }
        debug!(entity = %entity.id(), components = entity.len(), "created entity");
        Ok(entity)
    }
}

impl Default for EntityFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EntityFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityFactory").finish_non_exhaustive()
    }
}
