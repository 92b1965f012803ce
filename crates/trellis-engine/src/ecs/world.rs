use std::any::TypeId;
use std::collections::HashMap;

use slotmap::{SecondaryMap, SlotMap};

use super::column::Column;
use super::entity::Entity;
use super::error::HierarchyError;

// ── World ─────────────────────────────────────────────────────────────────

/// Per-entity relation links.
#[derive(Debug, Default)]
struct Node {
    parent: Option<Entity>,
    children: Vec<Entity>,
}

/// Entity/component store with an ordered parent/child relation.
///
/// Components are plain `'static` values stored in one secondary map per
/// type. The relation keeps each parent's children in insertion order; that
/// order is what layout systems see through [`World::children_of`].
#[derive(Default)]
pub struct World {
    nodes: SlotMap<Entity, Node>,
    columns: HashMap<TypeId, Box<dyn Column>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // ── entities ──────────────────────────────────────────────────────────

    /// Allocate a new entity with no components and no parent.
    pub fn spawn(&mut self) -> Entity {
        self.nodes.insert(Node::default())
    }

    /// `true` if `e` refers to the slot's current, live occupant.
    #[inline]
    pub fn is_alive(&self, e: Entity) -> bool {
        self.nodes.contains_key(e)
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Despawn `e` and, recursively, all of its descendants.
    ///
    /// Returns `false` if `e` was already dead.
    pub fn despawn(&mut self, e: Entity) -> bool {
        if !self.is_alive(e) {
            return false;
        }
        self.detach(e);

        let mut stack = vec![e];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
            }
            for column in self.columns.values_mut() {
                column.evict(current);
            }
        }
        true
    }

    // ── components ────────────────────────────────────────────────────────

    /// Attach `component` to `e`, returning the value it replaced.
    ///
    /// Inserting on a dead entity is a no-op that hands the value back.
    pub fn insert<T: 'static>(&mut self, e: Entity, component: T) -> Option<T> {
        if !self.is_alive(e) {
            log::debug!("insert on dead entity {e} ignored");
            return Some(component);
        }
        self.column_or_default::<T>().insert(e, component)
    }

    pub fn remove<T: 'static>(&mut self, e: Entity) -> Option<T> {
        self.column_mut::<T>()?.remove(e)
    }

    pub fn get<T: 'static>(&self, e: Entity) -> Option<&T> {
        self.column::<T>()?.get(e)
    }

    pub fn get_mut<T: 'static>(&mut self, e: Entity) -> Option<&mut T> {
        self.column_mut::<T>()?.get_mut(e)
    }

    #[inline]
    pub fn has<T: 'static>(&self, e: Entity) -> bool {
        self.column::<T>().is_some_and(|c| c.contains_key(e))
    }

    /// All live entities carrying a `T`, in slot order.
    pub fn query<T: 'static>(&self) -> Vec<Entity> {
        self.column::<T>()
            .map(|c| c.keys().filter(|e| self.is_alive(*e)).collect())
            .unwrap_or_default()
    }

    fn column<T: 'static>(&self) -> Option<&SecondaryMap<Entity, T>> {
        self.columns
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref())
    }

    fn column_mut<T: 'static>(&mut self) -> Option<&mut SecondaryMap<Entity, T>> {
        self.columns
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| c.as_any_mut().downcast_mut())
    }

    fn column_or_default<T: 'static>(&mut self) -> &mut SecondaryMap<Entity, T> {
        self.columns
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(SecondaryMap::<Entity, T>::new()))
            .as_any_mut()
            .downcast_mut()
            .unwrap_or_else(|| unreachable!("column keyed by TypeId::of::<T>() holds T"))
    }

    // ── relation ──────────────────────────────────────────────────────────

    /// Make `child` the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn set_parent(&mut self, child: Entity, parent: Entity) -> Result<(), HierarchyError> {
        if !self.is_alive(child) {
            return Err(HierarchyError::DeadEntity(child));
        }
        if !self.is_alive(parent) {
            return Err(HierarchyError::DeadEntity(parent));
        }
        if child == parent {
            return Err(HierarchyError::SelfParent(child));
        }
        if self.ancestors(parent).any(|a| a == child) {
            return Err(HierarchyError::Cycle { child, parent });
        }

        self.detach(child);
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
        Ok(())
    }

    /// Detach `child` from its parent, making it a root. Returns the old parent.
    pub fn remove_parent(&mut self, child: Entity) -> Result<Option<Entity>, HierarchyError> {
        if !self.is_alive(child) {
            return Err(HierarchyError::DeadEntity(child));
        }
        Ok(self.detach(child))
    }

    #[inline]
    pub fn parent_of(&self, e: Entity) -> Option<Entity> {
        self.nodes.get(e)?.parent
    }

    /// Children of `e` in insertion order. Empty for dead entities.
    #[inline]
    pub fn children_of(&self, e: Entity) -> &[Entity] {
        self.nodes.get(e).map_or(&[], |n| n.children.as_slice())
    }

    /// Live entities without a parent, in slot order.
    pub fn roots(&self) -> Vec<Entity> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(e, _)| e)
            .collect()
    }

    /// Number of ancestors above `e` (roots have depth 0).
    pub fn depth_of(&self, e: Entity) -> usize {
        self.ancestors(e).count()
    }

    /// Walks parent links upward from `e`, excluding `e` itself.
    pub fn ancestors(&self, e: Entity) -> impl Iterator<Item = Entity> + '_ {
        std::iter::successors(self.parent_of(e), move |p| self.parent_of(*p))
    }

    fn detach(&mut self, child: Entity) -> Option<Entity> {
        let parent = self.nodes.get_mut(child)?.parent.take()?;
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|c| *c != child);
        }
        Some(parent)
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.len())
            .field("component_types", &self.columns.len())
            .finish()
    }
}
