//! The four layout strategies.
//!
//! Each submodule holds its parameter records plus a pure function that maps
//! a container rect and child inputs to child rects. World access lives in
//! [`crate::systems`].

pub mod anchor;
pub mod dock;
pub mod flex;
pub mod grid;

pub use anchor::{Anchor, AnchorLayout, layout_anchor};
pub use dock::{DockLayout, DockSide, layout_dock};
pub use flex::{
    Align, FlexChild, FlexDirection, FlexItem, FlexLayout, FlexWrap, JustifyContent, layout_flex,
};
pub use grid::{GridAutoFlow, GridLayout, layout_grid};
