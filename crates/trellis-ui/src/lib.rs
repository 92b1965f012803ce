//! Trellis UI: ECS-driven layout on top of `trellis-engine`.
//!
//! Elements are entities carrying a [`Rect`](trellis_engine::coords::Rect).
//! A [`UiContainer`](container::UiContainer) hosts children; which algorithm
//! places them is chosen by the layout components attached to the container
//! (flex, grid) or to the children themselves (anchor, dock).
//!
//! # Quick start
//!
//! ```rust
//! use trellis_ui::prelude::*;
//!
//! let mut world = World::new();
//! let window = UiNode::new(Rect::sized(800.0, 600.0)).container("window").spawn(&mut world);
//!
//! let toolbar = UiNode::new(Rect::sized(0.0, 40.0))
//!     .dock(DockSide::Top)
//!     .flex(FlexLayout::row().gap(4.0).align_items(Align::Center))
//!     .spawn_child(&mut world, window)
//!     .unwrap();
//! let content = UiNode::new(Rect::default())
//!     .dock(DockSide::Fill)
//!     .spawn_child(&mut world, window)
//!     .unwrap();
//!
//! LayoutSchedule::new().run(&mut world);
//! assert_eq!(*world.get::<Rect>(toolbar).unwrap(), Rect::new(0.0, 0.0, 800.0, 40.0));
//! assert_eq!(*world.get::<Rect>(content).unwrap(), Rect::new(0.0, 40.0, 800.0, 560.0));
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`constraints`] | `Edges` (padding/margin), `SizeConstraints`, `Axis` |
//! | [`layout`] | Layout records and the pure flex/grid/anchor/dock algorithms |
//! | [`systems`] | Per-container passes that read and write the `World` |
//! | [`schedule`] | `LayoutSchedule`, the outer-to-inner per-tick driver |
//! | [`node`] | `UiNode` spawn builder |

pub mod constraints;
pub mod container;
pub mod layout;
pub mod node;
pub mod schedule;
pub mod systems;

/// Everything needed to build and lay out a UI tree.
pub mod prelude {
    pub use crate::constraints::{Axis, Edges, Margin, Padding, SizeConstraints};
    pub use crate::container::UiContainer;
    pub use crate::layout::{
        Align, Anchor, AnchorLayout, DockLayout, DockSide, FlexDirection, FlexItem, FlexLayout,
        FlexWrap, GridAutoFlow, GridLayout, JustifyContent,
    };
    pub use crate::node::UiNode;
    pub use crate::schedule::{LayoutPass, LayoutSchedule};
    pub use crate::systems::LayoutStats;

    pub use trellis_engine::coords::{Rect, Vec2};
    pub use trellis_engine::ecs::{Entity, HierarchyError, World};
}
