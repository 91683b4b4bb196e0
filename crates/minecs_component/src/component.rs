//! Core [`Component`] trait, component kinds, and type-erased instances.
//!
//! Every piece of data attached to an entity implements [`Component`]. The
//! trait requires `Send + Sync + 'static` so a world can be moved between
//! threads, and `Debug` so entities can be inspected and logged.
//!
//! ## Kind Identity
//!
//! A component's *kind* is identified by [`ComponentTypeId`], derived from the
//! component's **string name** using the FNV-1a 64-bit hash algorithm. The
//! same id can be computed from a Rust type ([`ComponentKind::of`]) or from a
//! bare name ([`ComponentKind::named`]), so name-based queries and typed
//! queries agree on which entities match.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::EcsError;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Hashed kind name: the key entities store their components under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    /// FNV-1a (64-bit) of the UTF-8 bytes of `name`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(
            name.bytes()
                .fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)),
        )
    }

    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::from_name(T::type_name())
    }
}

/// A component kind: the type-level tag distinguishing component shapes.
///
/// Two kinds are equal when their [`ComponentTypeId`]s are equal; the name is
/// carried along for error messages and snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentKind {
    id: ComponentTypeId,
    name: Cow<'static, str>,
}

impl ComponentKind {
    /// The kind of the Rust component type `T`.
    ///
    /// `T::type_name()` must be a kind identifier; debug builds assert it.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        debug_assert!(
            is_kind_identifier(T::type_name()),
            "component type name {:?} is not a kind identifier",
            T::type_name()
        );
        Self {
            id: ComponentTypeId::of::<T>(),
            name: Cow::Borrowed(T::type_name()),
        }
    }

    /// Resolve a kind from its name.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::InvalidName`] if `name` is not a kind identifier:
    /// an uppercase ASCII letter followed by ASCII alphanumerics or `_`.
    /// Rendered component values such as `"Position { x: 1.0, y: 2.0 }"` are
    /// rejected.
    pub fn named(name: &str) -> Result<Self, EcsError> {
        if !is_kind_identifier(name) {
            return Err(EcsError::InvalidName {
                found: name.to_string(),
            });
        }
        Ok(Self {
            id: ComponentTypeId::from_name(name),
            name: Cow::Owned(name.to_string()),
        })
    }

    /// Returns the hashed kind identifier.
    #[must_use]
    pub fn id(&self) -> ComponentTypeId {
        self.id
    }

    /// Returns the kind's name (e.g. `"Position"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for ComponentKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentKind {}

impl Hash for ComponentKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn is_kind_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// The core component trait.
///
/// # Examples
///
/// ```rust
/// use minecs_component::Component;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
/// ```
pub trait Component: Any + Send + Sync + fmt::Debug + Sized {
    /// The kind name. Must be a kind identifier (see [`ComponentKind::named`]),
    /// otherwise name-based lookups can never find the component. Debug
    /// builds panic on the first use of a malformed name.
    fn type_name() -> &'static str;

    /// Returns the [`ComponentKind`] for this component type.
    fn kind() -> ComponentKind {
        ComponentKind::of::<Self>()
    }
}

/// Object-safe view of a [`Component`], used to store components of different
/// kinds side by side on an entity.
pub trait ErasedComponent: Any + Send + Sync + fmt::Debug {
    /// The kind of the concrete component behind this object.
    fn component_kind(&self) -> ComponentKind;

    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;

    #[doc(hidden)]
    fn as_any_mut(&mut self) -> &mut dyn Any;

    #[doc(hidden)]
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Component> ErasedComponent for T {
    fn component_kind(&self) -> ComponentKind {
        ComponentKind::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn ErasedComponent {
    /// Returns the component as `&T` if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Returns the component as `&mut T` if it is a `T`.
    #[must_use]
    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Unboxes the component as `T`, handing the box back on mismatch.
    ///
    /// # Errors
    ///
    /// Returns the original box if the component is not a `T`.
    pub fn downcast<T: Component>(self: Box<Self>) -> Result<T, Box<Self>> {
        if self.as_any().is::<T>() {
            match self.into_any().downcast::<T>() {
                Ok(value) => Ok(*value),
                Err(_) => unreachable!("type checked above"),
            }
        } else {
            Err(self)
        }
    }
}
