//! Entity and component error types.

use crate::id::EntityId;

/// Errors raised by entity construction and component operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcsError {
    /// The entity already holds a component of this kind.
    #[error("entity already has a component of kind `{kind}`")]
    DuplicateComponent { kind: String },

    /// The entity holds no component of this kind.
    #[error("entity {entity} has no component of kind `{kind}`")]
    MissingComponent { entity: EntityId, kind: String },

    /// A value was passed where a component kind name was expected.
    #[error("`{found}` is not a component kind name")]
    InvalidName { found: String },
}
