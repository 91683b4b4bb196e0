//! Sample component definitions for the minecs demos.
//!
//! These show the whole contract of [`Component`]: plain data plus a stable
//! kind name.

use minecs_component::Component;

/// A 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Component for Position {
    fn type_name() -> &'static str {
        "Position"
    }
}

/// Displacement applied to a [`Position`] every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Speed {
    pub x: f32,
    pub y: f32,
}

impl Speed {
    /// Create a new speed.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Component for Speed {
    fn type_name() -> &'static str {
        "Speed"
    }
}

/// Hit points. No demo system touches it; it rides along to show that a tick
/// leaves unrelated components alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health(pub u32);

impl Component for Health {
    fn type_name() -> &'static str {
        "Health"
    }
}

/// A display name, handy in logs.
#[derive(Debug, Clone, PartialEq)]
pub struct Name(pub String);

impl Name {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Component for Name {
    fn type_name() -> &'static str {
        "Name"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_valid() {
        for kind in [Position::kind(), Speed::kind(), Health::kind(), Name::kind()] {
            assert!(minecs_component::ComponentKind::named(kind.name()).is_ok());
        }
    }
}
