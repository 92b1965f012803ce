use trellis_engine::coords::Rect;
use trellis_engine::ecs::{Entity, HierarchyError, World};

use crate::container::UiContainer;
use crate::layout::{AnchorLayout, DockLayout, DockSide, FlexItem, FlexLayout, GridLayout};

type Extra = Box<dyn FnOnce(&mut World, Entity)>;

/// Builder that spawns one UI element with its rect and layout records.
///
/// Setting a container layout (`flex` / `grid`) also marks the entity as a
/// [`UiContainer`] unless one was given explicitly.
///
/// # Example
/// ```rust
/// use trellis_ui::prelude::*;
///
/// let mut world = World::new();
/// let panel = UiNode::new(Rect::sized(640.0, 480.0))
///     .container("panel")
///     .grid(GridLayout::columns(3).gap(4.0))
///     .spawn(&mut world);
/// assert!(world.has::<UiContainer>(panel));
/// ```
pub struct UiNode {
    rect: Rect,
    container: Option<UiContainer>,
    flex: Option<FlexLayout>,
    item: Option<FlexItem>,
    grid: Option<GridLayout>,
    anchor: Option<AnchorLayout>,
    dock: Option<DockLayout>,
    extras: Vec<Extra>,
}

impl UiNode {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            container: None,
            flex: None,
            item: None,
            grid: None,
            anchor: None,
            dock: None,
            extras: Vec::new(),
        }
    }

    pub fn container(mut self, id: impl Into<String>) -> Self {
        self.container = Some(UiContainer::new(id));
        self
    }

    pub fn clip_children(mut self) -> Self {
        let container = self.container.take().unwrap_or_default();
        self.container = Some(container.clip_children(true));
        self
    }

    pub fn flex(mut self, layout: FlexLayout) -> Self {
        self.flex = Some(layout);
        self
    }

    pub fn item(mut self, item: FlexItem) -> Self {
        self.item = Some(item);
        self
    }

    pub fn grid(mut self, layout: GridLayout) -> Self {
        self.grid = Some(layout);
        self
    }

    pub fn anchor(mut self, layout: AnchorLayout) -> Self {
        self.anchor = Some(layout);
        self
    }

    pub fn dock(mut self, side: DockSide) -> Self {
        self.dock = Some(DockLayout::new(side));
        self
    }

    /// Attach any other component when the node is spawned.
    pub fn insert<T: 'static>(mut self, component: T) -> Self {
        self.extras.push(Box::new(move |world, e| {
            world.insert(e, component);
        }));
        self
    }

    /// Spawn as a root element.
    pub fn spawn(self, world: &mut World) -> Entity {
        let e = world.spawn();

        let needs_container = self.flex.is_some() || self.grid.is_some();
        let container = match self.container {
            Some(c) => Some(c),
            None if needs_container => Some(UiContainer::default()),
            None => None,
        };

        world.insert(e, self.rect);
        if let Some(c) = container {
            world.insert(e, c);
        }
        if let Some(flex) = self.flex {
            world.insert(e, flex);
        }
        if let Some(item) = self.item {
            world.insert(e, item);
        }
        if let Some(grid) = self.grid {
            world.insert(e, grid);
        }
        if let Some(anchor) = self.anchor {
            world.insert(e, anchor);
        }
        if let Some(dock) = self.dock {
            world.insert(e, dock);
        }
        for extra in self.extras {
            extra(world, e);
        }
        e
    }

    /// Spawn as the last child of `parent`.
    ///
    /// On error nothing is left behind in the world.
    pub fn spawn_child(self, world: &mut World, parent: Entity) -> Result<Entity, HierarchyError> {
        if !world.is_alive(parent) {
            return Err(HierarchyError::DeadEntity(parent));
        }
        let e = self.spawn(world);
        if let Err(err) = world.set_parent(e, parent) {
            world.despawn(e);
            return Err(err);
        }
        Ok(e)
    }
}

impl std::fmt::Debug for UiNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiNode")
            .field("rect", &self.rect)
            .field("container", &self.container)
            .field("flex", &self.flex)
            .field("item", &self.item)
            .field("grid", &self.grid)
            .field("anchor", &self.anchor)
            .field("dock", &self.dock)
            .field("extras", &self.extras.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Margin;

    #[test]
    fn leaf_node_has_no_container() {
        let mut w = World::new();
        let e = UiNode::new(Rect::sized(1.0, 2.0)).spawn(&mut w);
        assert_eq!(w.get::<Rect>(e), Some(&Rect::sized(1.0, 2.0)));
        assert!(!w.has::<UiContainer>(e));
    }

    #[test]
    fn layout_implies_container() {
        let mut w = World::new();
        let e = UiNode::new(Rect::default()).flex(FlexLayout::column()).spawn(&mut w);
        assert_eq!(w.get::<UiContainer>(e), Some(&UiContainer::default()));
    }

    #[test]
    fn explicit_container_and_clip() {
        let mut w = World::new();
        let e = UiNode::new(Rect::default()).container("list").clip_children().spawn(&mut w);
        let c = w.get::<UiContainer>(e).unwrap();
        assert_eq!(c.id, "list");
        assert!(c.clip_children);
    }

    #[test]
    fn extra_components_are_inserted() {
        let mut w = World::new();
        let e = UiNode::new(Rect::default()).insert(Margin::all(3.0)).spawn(&mut w);
        assert_eq!(w.get::<Margin>(e), Some(&Margin::all(3.0)));
    }

    #[test]
    fn spawn_child_appends_in_order() {
        let mut w = World::new();
        let root = UiNode::new(Rect::default()).container("root").spawn(&mut w);
        let a = UiNode::new(Rect::default()).spawn_child(&mut w, root).unwrap();
        let b = UiNode::new(Rect::default()).spawn_child(&mut w, root).unwrap();
        assert_eq!(w.children_of(root), &[a, b]);
    }

    #[test]
    fn spawn_child_of_dead_parent_leaves_nothing() {
        let mut w = World::new();
        let root = w.spawn();
        w.despawn(root);
        let err = UiNode::new(Rect::default()).spawn_child(&mut w, root).unwrap_err();
        assert_eq!(err, HierarchyError::DeadEntity(root));
        assert!(w.is_empty());
    }
}
