//! Minimal entity/component store.
//!
//! Just enough ECS for the layout engine: versioned entity keys from a
//! [`slotmap::SlotMap`], one secondary map per component type, and an
//! ordered parent/child relation that layout systems query with
//! [`World::children_of`].

mod column;
mod entity;
mod error;
mod world;

pub use entity::Entity;
pub use error::HierarchyError;
pub use world::World;
