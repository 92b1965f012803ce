//! Per-tick driver for the layout passes.

use trellis_engine::ecs::{Entity, World};

use crate::container::UiContainer;
use crate::layout::{FlexLayout, GridLayout};
use crate::systems::{
    LayoutStats, apply_anchor, apply_dock, apply_flex, apply_grid, containers_with,
};

/// One of the four layout strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutPass {
    Flex,
    Grid,
    Dock,
    Anchor,
}

impl LayoutPass {
    /// Default per-container order: sizing strategies first, then the
    /// positional ones that may override them.
    pub const ALL: [LayoutPass; 4] =
        [LayoutPass::Flex, LayoutPass::Grid, LayoutPass::Dock, LayoutPass::Anchor];

    /// Run this pass on `container` if it applies there.
    pub fn apply(self, world: &mut World, container: Entity) -> usize {
        match self {
            LayoutPass::Flex if world.has::<FlexLayout>(container) => apply_flex(world, container),
            LayoutPass::Grid if world.has::<GridLayout>(container) => apply_grid(world, container),
            LayoutPass::Dock => apply_dock(world, container),
            LayoutPass::Anchor => apply_anchor(world, container),
            _ => 0,
        }
    }
}

/// Runs the enabled passes over every [`UiContainer`] once per tick.
///
/// Containers are visited outermost first, and all passes for a container
/// finish before any of its descendants run. A nested container therefore
/// always reads a rect its ancestors already finalized this tick.
///
/// # Example
/// ```rust
/// use trellis_ui::prelude::*;
///
/// let mut world = World::new();
/// let root = UiNode::new(Rect::sized(300.0, 200.0))
///     .flex(FlexLayout::row())
///     .spawn(&mut world);
/// let child = UiNode::new(Rect::sized(50.0, 10.0))
///     .item(FlexItem::new().grow(1.0))
///     .spawn_child(&mut world, root)
///     .unwrap();
///
/// let mut schedule = LayoutSchedule::new();
/// schedule.run(&mut world);
/// assert_eq!(world.get::<Rect>(child).unwrap().width, 300.0);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutSchedule {
    passes: Vec<LayoutPass>,
    ticks: u64,
}

impl LayoutSchedule {
    pub fn new() -> Self {
        Self::with_passes(&LayoutPass::ALL)
    }

    /// Schedule running only `passes`, in the given order. Duplicates are dropped.
    pub fn with_passes(passes: &[LayoutPass]) -> Self {
        let mut unique = Vec::with_capacity(passes.len());
        for pass in passes {
            if !unique.contains(pass) {
                unique.push(*pass);
            }
        }
        Self { passes: unique, ticks: 0 }
    }

    pub fn passes(&self) -> &[LayoutPass] {
        &self.passes
    }

    /// Number of completed [`run`](Self::run) calls.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Lay out the whole world once.
    pub fn run(&mut self, world: &mut World) -> LayoutStats {
        let mut stats = LayoutStats::default();
        for container in containers_with::<UiContainer>(world) {
            let mut placed = 0;
            for pass in &self.passes {
                placed += pass.apply(world, container);
            }
            stats.record(placed);
        }

        self.ticks += 1;
        log::trace!(
            "layout tick {}: {} containers, {} child rects",
            self.ticks,
            stats.containers,
            stats.children
        );
        stats
    }
}

impl Default for LayoutSchedule {
    fn default() -> Self {
        Self::new()
    }
}
