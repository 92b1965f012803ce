use std::fmt;

use super::Entity;

/// Misuse of the parent/child relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyError {
    /// The handle refers to a despawned (or never spawned) entity.
    DeadEntity(Entity),
    /// An entity cannot be its own parent.
    SelfParent(Entity),
    /// Attaching `child` under `parent` would make `child` its own ancestor.
    Cycle { child: Entity, parent: Entity },
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeadEntity(e) => write!(f, "entity {e} is not alive"),
            Self::SelfParent(e) => write!(f, "entity {e} cannot be its own parent"),
            Self::Cycle { child, parent } => {
                write!(f, "attaching {child} under {parent} would create a cycle")
            }
        }
    }
}

impl std::error::Error for HierarchyError {}
