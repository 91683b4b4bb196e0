//! The [`System`] trait: one unit of per-tick logic.

use std::any::Any;

use crate::manager::EntityManager;

/// Per-tick logic run against the entity manager.
///
/// A system typically queries the manager for entities holding the kinds it
/// cares about and mutates their components in place. The manager is only
/// borrowed for the duration of the call.
///
/// # Examples
///
/// ```rust
/// use minecs_component::Component;
/// use minecs_world::{EntityManager, System};
///
/// #[derive(Debug)]
/// struct Age(u32);
///
/// impl Component for Age {
///     fn type_name() -> &'static str { "Age" }
/// }
///
/// struct Aging;
///
/// impl System for Aging {
///     fn process(&mut self, manager: &mut EntityManager) -> anyhow::Result<()> {
///         for entity in manager.find_by_component_names_mut(&[Age::kind()]) {
///             entity.update::<Age, _>(|age| age.0 += 1)?;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait System: Any + Send {
    /// Run this system once.
    ///
    /// # Errors
    ///
    /// Any error aborts the current tick; systems registered after this one
    /// do not run.
    fn process(&mut self, manager: &mut EntityManager) -> anyhow::Result<()>;

    /// Name used in logs and errors. Defaults to the Rust type name.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
