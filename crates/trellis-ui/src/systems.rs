//! World-facing layout passes.
//!
//! Each `apply_*` function lays out the direct children of one container:
//! it copies the container rect and parameters out of the [`World`], runs
//! the matching pure algorithm, and writes child rects back. The
//! `*_system` functions run one pass over every qualifying container,
//! outermost first.

use trellis_engine::coords::Rect;
use trellis_engine::ecs::{Entity, World};

use crate::container::UiContainer;
use crate::layout::{
    AnchorLayout, DockLayout, FlexChild, FlexItem, FlexLayout, GridLayout, layout_anchor,
    layout_dock, layout_flex, layout_grid,
};

/// Counts for one pass or tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    /// Containers whose children were laid out.
    pub containers: usize,
    /// Child rects written.
    pub children: usize,
}

impl LayoutStats {
    pub(crate) fn record(&mut self, placed: usize) {
        if placed > 0 {
            self.containers += 1;
            self.children += placed;
        }
    }
}

// ── per-container passes ──────────────────────────────────────────────────

/// Lay out `container`'s children with its [`FlexLayout`]. Returns the
/// number of child rects written.
pub fn apply_flex(world: &mut World, container: Entity) -> usize {
    let Some((rect, layout)) = container_params::<FlexLayout>(world, container) else {
        return 0;
    };

    let mut targets = Vec::new();
    let mut inputs = Vec::new();
    for &child in world.children_of(container) {
        let Some(&child_rect) = world.get::<Rect>(child) else {
            log::trace!("flex {container}: child {child} has no rect, skipped");
            continue;
        };
        let item = world.get::<FlexItem>(child).copied().unwrap_or_default();
        targets.push(child);
        inputs.push(FlexChild::new(child_rect, item));
    }

    let rects = layout_flex(rect, &layout, &inputs);
    write_back(world, &targets, &rects)
}

/// Lay out `container`'s children into the cells of its [`GridLayout`].
pub fn apply_grid(world: &mut World, container: Entity) -> usize {
    let Some((rect, layout)) = container_params::<GridLayout>(world, container) else {
        return 0;
    };

    let targets: Vec<Entity> = world
        .children_of(container)
        .iter()
        .copied()
        .filter(|child| world.has::<Rect>(*child))
        .collect();

    let rects = layout_grid(rect, &layout, targets.len());
    write_back(world, &targets, &rects)
}

/// Position every child of `container` that carries an [`AnchorLayout`].
pub fn apply_anchor(world: &mut World, container: Entity) -> usize {
    let Some(&rect) = container_rect(world, container) else {
        return 0;
    };

    let mut targets = Vec::new();
    let mut rects = Vec::new();
    for &child in world.children_of(container) {
        let Some(&child_rect) = world.get::<Rect>(child) else {
            continue;
        };
        let Some(anchor) = world.get::<AnchorLayout>(child) else {
            continue;
        };
        targets.push(child);
        rects.push(layout_anchor(rect, child_rect, anchor));
    }

    write_back(world, &targets, &rects)
}

/// Dock every child of `container` that carries a [`DockLayout`], in
/// relation order.
pub fn apply_dock(world: &mut World, container: Entity) -> usize {
    let Some(&rect) = container_rect(world, container) else {
        return 0;
    };

    let mut targets = Vec::new();
    let mut inputs = Vec::new();
    for &child in world.children_of(container) {
        let Some(&child_rect) = world.get::<Rect>(child) else {
            continue;
        };
        let Some(dock) = world.get::<DockLayout>(child) else {
            continue;
        };
        targets.push(child);
        inputs.push((child_rect, dock.side));
    }

    let rects = layout_dock(rect, &inputs);
    write_back(world, &targets, &rects)
}

// ── whole-world passes ────────────────────────────────────────────────────

/// Run [`apply_flex`] on every flex container, outermost first.
pub fn flex_layout_system(world: &mut World) -> LayoutStats {
    let containers = containers_with::<FlexLayout>(world);
    run_over(world, containers, apply_flex)
}

/// Run [`apply_grid`] on every grid container, outermost first.
pub fn grid_layout_system(world: &mut World) -> LayoutStats {
    let containers = containers_with::<GridLayout>(world);
    run_over(world, containers, apply_grid)
}

/// Run [`apply_anchor`] on every container, outermost first.
pub fn anchor_layout_system(world: &mut World) -> LayoutStats {
    let containers = containers_with::<UiContainer>(world);
    run_over(world, containers, apply_anchor)
}

/// Run [`apply_dock`] on every container, outermost first.
pub fn dock_layout_system(world: &mut World) -> LayoutStats {
    let containers = containers_with::<UiContainer>(world);
    run_over(world, containers, apply_dock)
}

/// Containers carrying `T`, sorted by depth so parents come before their
/// descendants. Ties keep slot order.
pub(crate) fn containers_with<T: 'static>(world: &World) -> Vec<Entity> {
    let mut found: Vec<(usize, Entity)> = world
        .query::<T>()
        .into_iter()
        .filter(|e| world.has::<UiContainer>(*e))
        .map(|e| (world.depth_of(e), e))
        .collect();
    found.sort_by_key(|(depth, _)| *depth);
    found.into_iter().map(|(_, e)| e).collect()
}

fn run_over(
    world: &mut World,
    containers: Vec<Entity>,
    pass: fn(&mut World, Entity) -> usize,
) -> LayoutStats {
    let mut stats = LayoutStats::default();
    for container in containers {
        stats.record(pass(world, container));
    }
    stats
}

// ── helpers ───────────────────────────────────────────────────────────────

fn container_rect(world: &World, container: Entity) -> Option<&Rect> {
    let rect = world.get::<Rect>(container);
    if rect.is_none() {
        log::debug!("container {container} has no rect, skipped");
    }
    rect
}

fn container_params<T: Copy + 'static>(world: &World, container: Entity) -> Option<(Rect, T)> {
    let params = *world.get::<T>(container)?;
    let rect = *container_rect(world, container)?;
    Some((rect, params))
}

fn write_back(world: &mut World, targets: &[Entity], rects: &[Rect]) -> usize {
    let mut written = 0;
    for (&child, &rect) in targets.iter().zip(rects) {
        if let Some(slot) = world.get_mut::<Rect>(child) {
            *slot = rect;
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{Edges, SizeConstraints};
    use crate::layout::{Align, Anchor, DockSide, FlexDirection};

    fn container(world: &mut World, rect: Rect) -> Entity {
        let e = world.spawn();
        world.insert(e, rect);
        world.insert(e, UiContainer::new("test"));
        e
    }

    fn child_of(world: &mut World, parent: Entity, rect: Rect) -> Entity {
        let e = world.spawn();
        world.insert(e, rect);
        world.set_parent(e, parent).unwrap();
        e
    }

    fn rect(world: &World, e: Entity) -> Rect {
        *world.get::<Rect>(e).unwrap()
    }

    // ── flex ──────────────────────────────────────────────────────────────

    #[test]
    fn flex_order_sort_is_stable_through_the_relation() {
        let mut w = World::new();
        let root = container(&mut w, Rect::sized(300.0, 50.0));
        w.insert(root, FlexLayout::row().gap(10.0).align_items(Align::Start));
        let a = child_of(&mut w, root, Rect::sized(20.0, 20.0));
        let b = child_of(&mut w, root, Rect::sized(20.0, 20.0));
        let c = child_of(&mut w, root, Rect::sized(20.0, 20.0));
        w.insert(b, FlexItem::new().order(-1));

        let stats = flex_layout_system(&mut w);
        assert_eq!(stats, LayoutStats { containers: 1, children: 3 });

        let mut by_x = [(rect(&w, a).x, "A"), (rect(&w, b).x, "B"), (rect(&w, c).x, "C")];
        by_x.sort_by(|l, r| l.0.total_cmp(&r.0));
        assert_eq!(by_x.map(|(_, n)| n), ["B", "A", "C"]);
    }

    #[test]
    fn flex_skips_children_without_rect() {
        let mut w = World::new();
        let root = container(&mut w, Rect::sized(100.0, 20.0));
        w.insert(root, FlexLayout::row());
        let ghost = w.spawn();
        w.set_parent(ghost, root).unwrap();
        let real = child_of(&mut w, root, Rect::sized(30.0, 5.0));

        assert_eq!(apply_flex(&mut w, root), 1);
        assert_eq!(rect(&w, real), Rect::new(0.0, 0.0, 30.0, 20.0));
        assert!(!w.has::<Rect>(ghost));
    }

    #[test]
    fn flex_max_clamp_redistribution() {
        let mut w = World::new();
        let root = container(&mut w, Rect::sized(400.0, 40.0));
        w.insert(root, FlexLayout::row());
        let capped = child_of(&mut w, root, Rect::default());
        let free = child_of(&mut w, root, Rect::default());
        w.insert(
            capped,
            FlexItem::new()
                .basis(100.0)
                .grow(1.0)
                .constraints(SizeConstraints::none().max_width(150.0)),
        );
        w.insert(free, FlexItem::new().basis(100.0).grow(1.0));

        apply_flex(&mut w, root);
        assert!((rect(&w, capped).width - 150.0).abs() < 0.01);
        assert!((rect(&w, free).width - 250.0).abs() < 0.01);
    }

    #[test]
    fn container_without_rect_is_skipped() {
        let mut w = World::new();
        let root = w.spawn();
        w.insert(root, UiContainer::new("no-rect"));
        w.insert(root, FlexLayout::column());
        let kid = child_of(&mut w, root, Rect::sized(5.0, 5.0));

        assert_eq!(flex_layout_system(&mut w), LayoutStats::default());
        assert_eq!(rect(&w, kid), Rect::sized(5.0, 5.0));
    }

    #[test]
    fn flex_without_ui_container_is_ignored() {
        let mut w = World::new();
        let root = w.spawn();
        w.insert(root, Rect::sized(100.0, 100.0));
        w.insert(root, FlexLayout::row().direction(FlexDirection::RowReverse));
        let kid = child_of(&mut w, root, Rect::sized(5.0, 5.0));

        flex_layout_system(&mut w);
        assert_eq!(rect(&w, kid), Rect::sized(5.0, 5.0));
    }

    #[test]
    fn flex_leaves_container_rect_alone() {
        let mut w = World::new();
        let root = container(&mut w, Rect::new(5.0, 5.0, 50.0, 50.0));
        w.insert(root, FlexLayout::row().padding(Edges::all(100.0)));
        child_of(&mut w, root, Rect::sized(10.0, 10.0));
        apply_flex(&mut w, root);
        assert_eq!(rect(&w, root), Rect::new(5.0, 5.0, 50.0, 50.0));
    }

    // ── grid ──────────────────────────────────────────────────────────────

    #[test]
    fn grid_partition() {
        let mut w = World::new();
        let root = container(&mut w, Rect::sized(220.0, 220.0));
        w.insert(root, GridLayout::new(2, 2).gap(20.0).padding(Edges::all(10.0)));
        let kids: Vec<_> = (0..4).map(|_| child_of(&mut w, root, Rect::default())).collect();

        assert_eq!(grid_layout_system(&mut w).children, 4);
        assert_eq!(rect(&w, kids[0]), Rect::new(10.0, 10.0, 90.0, 90.0));
        assert_eq!(rect(&w, kids[1]), Rect::new(120.0, 10.0, 90.0, 90.0));
        assert_eq!(rect(&w, kids[2]), Rect::new(10.0, 120.0, 90.0, 90.0));
        assert_eq!(rect(&w, kids[3]), Rect::new(120.0, 120.0, 90.0, 90.0));
    }

    #[test]
    fn grid_index_ignores_rectless_children() {
        let mut w = World::new();
        let root = container(&mut w, Rect::sized(100.0, 50.0));
        w.insert(root, GridLayout::columns(2));
        let ghost = w.spawn();
        w.set_parent(ghost, root).unwrap();
        let a = child_of(&mut w, root, Rect::default());
        let b = child_of(&mut w, root, Rect::default());

        apply_grid(&mut w, root);
        assert_eq!(rect(&w, a).x, 0.0);
        assert_eq!(rect(&w, b).x, 50.0);
    }

    // ── anchor & dock ─────────────────────────────────────────────────────

    #[test]
    fn anchor_only_moves_anchored_children() {
        let mut w = World::new();
        let root = container(&mut w, Rect::sized(200.0, 200.0));
        let pinned = child_of(&mut w, root, Rect::sized(50.0, 40.0));
        let loose = child_of(&mut w, root, Rect::new(1.0, 2.0, 3.0, 4.0));
        w.insert(pinned, AnchorLayout::new(Anchor::Center));

        assert_eq!(anchor_layout_system(&mut w).children, 1);
        assert_eq!(rect(&w, pinned), Rect::new(75.0, 80.0, 50.0, 40.0));
        assert_eq!(rect(&w, loose), Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn dock_sequence() {
        let mut w = World::new();
        let root = container(&mut w, Rect::sized(300.0, 200.0));
        let left = child_of(&mut w, root, Rect::sized(50.0, 0.0));
        let top = child_of(&mut w, root, Rect::sized(0.0, 30.0));
        let fill = child_of(&mut w, root, Rect::default());
        w.insert(left, DockLayout::new(DockSide::Left));
        w.insert(top, DockLayout::new(DockSide::Top));
        w.insert(fill, DockLayout::new(DockSide::Fill));

        dock_layout_system(&mut w);
        assert_eq!(rect(&w, left), Rect::new(0.0, 0.0, 50.0, 200.0));
        assert_eq!(rect(&w, top), Rect::new(50.0, 0.0, 250.0, 30.0));
        assert_eq!(rect(&w, fill), Rect::new(50.0, 30.0, 250.0, 170.0));
    }

    #[test]
    fn containers_are_visited_outer_to_inner() {
        let mut w = World::new();
        // Spawn the inner container first so slot order disagrees with depth.
        let inner = w.spawn();
        let outer = container(&mut w, Rect::sized(10.0, 10.0));
        w.insert(inner, Rect::default());
        w.insert(inner, UiContainer::new("inner"));
        w.set_parent(inner, outer).unwrap();

        assert_eq!(containers_with::<UiContainer>(&w), vec![outer, inner]);
    }
}
