//! Entity filters: which component kinds an entity must, may, or must not hold.
//!
//! An [`EntityFilter`] combines three sets of kinds:
//!
//! - `any_of`: the entity holds at least one of these;
//! - `all_of`: the entity holds every one of these;
//! - `none_of`: the entity holds none of these.
//!
//! A filter with both `any_of` and `all_of` empty matches nothing. The
//! name-based lookup on the entity manager is `EntityFilter::any_of(kinds)`.

use serde::Serialize;

use crate::component::{Component, ComponentKind};
use crate::entity::Entity;

/// Describes which entities a query selects.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntityFilter {
    /// Kinds of which at least one must be present.
    pub any_of: Vec<ComponentKind>,
    /// Kinds that must all be present.
    pub all_of: Vec<ComponentKind>,
    /// Kinds that must all be absent.
    pub none_of: Vec<ComponentKind>,
}

impl EntityFilter {
    /// Create a new empty filter. It matches nothing until kinds are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter matching entities holding at least one of `kinds`.
    #[must_use]
    pub fn any_of(kinds: impl IntoIterator<Item = ComponentKind>) -> Self {
        Self {
            any_of: kinds.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Require component `T`.
    #[must_use]
    pub fn with<T: Component>(self) -> Self {
        self.with_kind(T::kind())
    }

    /// Require a component of `kind`.
    #[must_use]
    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.all_of.push(kind);
        self
    }

    /// Accept entities holding `T`, or any other `either` kind.
    #[must_use]
    pub fn either<T: Component>(mut self) -> Self {
        self.any_of.push(T::kind());
        self
    }

    /// Exclude entities holding component `T`.
    #[must_use]
    pub fn without<T: Component>(self) -> Self {
        self.without_kind(T::kind())
    }

    /// Exclude entities holding a component of `kind`.
    #[must_use]
    pub fn without_kind(mut self, kind: ComponentKind) -> Self {
        self.none_of.push(kind);
        self
    }

    /// Returns `true` if the filter can never match.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        self.any_of.is_empty() && self.all_of.is_empty()
    }

    /// Checks whether `entity` satisfies this filter.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        if self.is_vacuous() {
            return false;
        }
        if !self.any_of.is_empty() && !self.any_of.iter().any(|k| entity.has_kind(k)) {
            return false;
        }
        self.all_of.iter().all(|k| entity.has_kind(k))
            && !self.none_of.iter().any(|k| entity.has_kind(k))
    }
}
