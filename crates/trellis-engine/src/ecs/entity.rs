use std::fmt;

use slotmap::Key;

slotmap::new_key_type! {
    /// Handle to an entity in a [`World`](super::World).
    ///
    /// Slots are recycled after despawn; the key's version tells a stale
    /// handle apart from the slot's current occupant.
    pub struct Entity;
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data())
    }
}
