//! Trellis engine crate.
//!
//! Owns the pieces every higher layer shares: geometry, the entity store,
//! and logger bootstrap.

pub mod coords;
pub mod ecs;
pub mod logging;
