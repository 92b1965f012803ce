use std::any::Any;

use slotmap::SecondaryMap;

use super::Entity;

/// Type-erased component column, so the world can drop an entity's
/// components without knowing their types.
pub(crate) trait Column: Any {
    fn evict(&mut self, e: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> Column for SecondaryMap<Entity, T> {
    fn evict(&mut self, e: Entity) {
        self.remove(e);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
