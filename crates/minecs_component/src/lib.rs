//! # minecs_component
//!
//! The "E" and "C" in ECS: what a component is, how entities hold them, and
//! how entities are built.
//!
//! This crate provides:
//!
//! - [`Component`] trait: the contract all entity data must satisfy.
//! - [`ComponentKind`]: the tag that keeps components unique per entity.
//! - [`Entity`]: an [`EntityId`] plus its components.
//! - [`IdSource`], [`EntityAllocator`], [`SharedAllocator`]: id generation.
//! - [`EntityFactory`] and [`Bundle`]: building entities from component lists.
//! - [`EntityFilter`]: selecting entities by component presence.

pub mod bundle;
pub mod component;
pub mod entity;
pub mod error;
pub mod factory;
pub mod id;
pub mod query;

pub use bundle::Bundle;
pub use component::{Component, ComponentKind, ComponentTypeId, ErasedComponent};
pub use entity::{Entity, EntitySnapshot};
pub use error::EcsError;
pub use factory::EntityFactory;
pub use id::{EntityAllocator, EntityId, IdSource, SharedAllocator};
pub use query::EntityFilter;
