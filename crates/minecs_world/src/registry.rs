//! System registry: the ordered list of systems a world runs each tick.
//!
//! Registration order is execution order. The same system type may be
//! registered more than once; unregistering a type removes every instance.

use std::any::TypeId;

use tracing::debug;

use crate::system::System;

/// A registered system together with its runtime type.
pub struct RegisteredSystem {
    /// Runtime type of the boxed system, used for removal by type.
    pub type_id: TypeId,
    /// The system's name (see [`System::name`]).
    pub name: &'static str,
    /// The system itself.
    pub system: Box<dyn System>,
}

impl std::fmt::Debug for RegisteredSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredSystem")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered registry of systems.
#[derive(Debug, Default)]
pub struct SystemRegistry {
    systems: Vec<RegisteredSystem>,
}

impl SystemRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `system` to the end of the execution order.
    pub fn register<S: System>(&mut self, system: S) {
        let name = system.name();
        debug!(system = name, position = self.systems.len(), "registered system");
        self.systems.push(RegisteredSystem {
            type_id: TypeId::of::<S>(),
            name,
            system: Box::new(system),
        });
    }

    /// Remove every registered system of type `S`.
    ///
    /// Returns how many were removed.
    pub fn unregister<S: System>(&mut self) -> usize {
        let target = TypeId::of::<S>();
        let before = self.systems.len();
        self.systems.retain(|s| s.type_id != target);
        let removed = before - self.systems.len();
        if removed > 0 {
            debug!(system = std::any::type_name::<S>(), removed, "unregistered system");
        }
        removed
    }

    /// Names of all registered systems, in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name).collect()
    }

    /// Iterate over registered systems in execution order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RegisteredSystem> {
        self.systems.iter_mut()
    }

    /// Number of registered systems, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns `true` if no systems are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::EntityManager;

    struct Physics;
    impl System for Physics {
        fn process(&mut self, _: &mut EntityManager) -> anyhow::Result<()> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            "physics"
        }
    }

    struct Ai;
    impl System for Ai {
        fn process(&mut self, _: &mut EntityManager) -> anyhow::Result<()> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            "ai"
        }
    }

    #[test]
    fn test_register_preserves_order() {
        let mut registry = SystemRegistry::new();
        registry.register(Physics);
        registry.register(Ai);
        registry.register(Physics);
        assert_eq!(registry.names(), vec!["physics", "ai", "physics"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unregister_removes_every_instance() {
        let mut registry = SystemRegistry::new();
        registry.register(Physics);
        registry.register(Ai);
        registry.register(Physics);
        assert_eq!(registry.unregister::<Physics>(), 2);
        assert_eq!(registry.names(), vec!["ai"]);
    }

    #[test]
    fn test_unregister_unknown_type_is_noop() {
        let mut registry = SystemRegistry::new();
        registry.register(Ai);
        assert_eq!(registry.unregister::<Physics>(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_name_is_type_name() {
        struct Unnamed;
        impl System for Unnamed {
            fn process(&mut self, _: &mut EntityManager) -> anyhow::Result<()> {
                Ok(())
            }
        }
        let mut registry = SystemRegistry::new();
        registry.register(Unnamed);
        assert!(registry.names()[0].ends_with("Unnamed"));
    }
}
