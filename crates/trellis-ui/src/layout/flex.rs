//! Single-line flexbox layout.
//!
//! [`layout_flex`] is a pure function over a container rect, its
//! [`FlexLayout`] and the container's children in relation order. It never
//! touches the container's own rect.

use trellis_engine::coords::{Rect, non_negative};

use crate::constraints::{Axis, Padding, SizeConstraints, inset_rect};

// ── FlexDirection ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    #[inline]
    pub fn main_axis(self) -> Axis {
        match self {
            FlexDirection::Row | FlexDirection::RowReverse => Axis::Horizontal,
            FlexDirection::Column | FlexDirection::ColumnReverse => Axis::Vertical,
        }
    }

    #[inline]
    pub fn is_reverse(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }
}

// ── JustifyContent ────────────────────────────────────────────────────────

/// Main-axis distribution of leftover space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    /// Leading offset and extra per-gap spacing for `remaining` free space
    /// shared among `n` children.
    ///
    /// `remaining` may be negative, in which case the `Space*` modes pull
    /// children together and let them overlap.
    fn distribute(self, remaining: f32, n: usize) -> (f32, f32) {
        let nf = n as f32;
        match self {
            JustifyContent::Start => (0.0, 0.0),
            JustifyContent::Center => (remaining * 0.5, 0.0),
            JustifyContent::End => (remaining, 0.0),
            JustifyContent::SpaceBetween if n > 1 => (0.0, remaining / (nf - 1.0)),
            JustifyContent::SpaceBetween => (0.0, 0.0),
            JustifyContent::SpaceAround => {
                let share = remaining / nf;
                (share * 0.5, share)
            }
            JustifyContent::SpaceEvenly => {
                let share = remaining / (nf + 1.0);
                (share, share)
            }
        }
    }
}

// ── Align ─────────────────────────────────────────────────────────────────

/// Cross-axis alignment, used both container-wide (`align_items`) and per
/// child (`align_self`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// On a child: defer to the container. On a container: same as `Stretch`.
    #[default]
    Auto,
    Start,
    Center,
    End,
    Stretch,
}

impl Align {
    /// Effective alignment of a child with `align_self = self` inside a
    /// container with `align_items = items`.
    #[inline]
    pub fn resolve(self, items: Align) -> Align {
        match (self, items) {
            (Align::Auto, Align::Auto) => Align::Stretch,
            (Align::Auto, items) => items,
            (own, _) => own,
        }
    }
}

// ── FlexWrap ──────────────────────────────────────────────────────────────

/// Line-wrapping mode. Only single-line layout is implemented; `Wrap` and
/// `WrapReverse` are accepted and laid out as one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

// ── FlexLayout ────────────────────────────────────────────────────────────

/// Flex container parameters.
///
/// # Example
/// ```rust
/// use trellis_ui::prelude::*;
///
/// let toolbar = FlexLayout::row()
///     .gap(8.0)
///     .padding(Edges::all(4.0))
///     .justify(JustifyContent::SpaceBetween)
///     .align_items(Align::Center);
/// assert_eq!(toolbar.direction, FlexDirection::Row);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlexLayout {
    pub direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: Align,
    pub wrap: FlexWrap,
    pub gap: f32,
    pub padding: Padding,
}

impl FlexLayout {
    pub fn new(direction: FlexDirection) -> Self {
        Self { direction, ..Self::default() }
    }

    pub fn row() -> Self {
        Self::new(FlexDirection::Row)
    }

    pub fn column() -> Self {
        Self::new(FlexDirection::Column)
    }

    pub fn direction(mut self, d: FlexDirection) -> Self {
        self.direction = d;
        self
    }

    pub fn justify(mut self, j: JustifyContent) -> Self {
        self.justify_content = j;
        self
    }

    pub fn align_items(mut self, a: Align) -> Self {
        self.align_items = a;
        self
    }

    pub fn wrap(mut self, w: FlexWrap) -> Self {
        self.wrap = w;
        self
    }

    pub fn gap(mut self, v: f32) -> Self {
        self.gap = v;
        self
    }

    pub fn padding(mut self, p: Padding) -> Self {
        self.padding = p;
        self
    }
}

// ── FlexItem ──────────────────────────────────────────────────────────────

/// Per-child flex overrides. Children without one use [`FlexItem::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexItem {
    pub grow: f32,
    pub shrink: f32,
    /// Initial main-axis size. `None` uses the child's current extent.
    pub basis: Option<f32>,
    pub align_self: Align,
    /// Sort key; ties keep relation order.
    pub order: i32,
    pub constraints: SizeConstraints,
}

impl Default for FlexItem {
    fn default() -> Self {
        Self {
            grow: 0.0,
            shrink: 1.0,
            basis: None,
            align_self: Align::Auto,
            order: 0,
            constraints: SizeConstraints::default(),
        }
    }
}

impl FlexItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grow(mut self, v: f32) -> Self {
        self.grow = v;
        self
    }

    pub fn shrink(mut self, v: f32) -> Self {
        self.shrink = v;
        self
    }

    pub fn basis(mut self, v: f32) -> Self {
        self.basis = Some(v);
        self
    }

    pub fn align_self(mut self, a: Align) -> Self {
        self.align_self = a;
        self
    }

    pub fn order(mut self, v: i32) -> Self {
        self.order = v;
        self
    }

    pub fn constraints(mut self, c: SizeConstraints) -> Self {
        self.constraints = c;
        self
    }
}

// ── algorithm ─────────────────────────────────────────────────────────────

/// One child as seen by [`layout_flex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexChild {
    pub rect: Rect,
    pub item: FlexItem,
}

impl FlexChild {
    pub fn new(rect: Rect, item: FlexItem) -> Self {
        Self { rect, item }
    }
}

/// Lay out `children` inside `container`.
///
/// Returns one rect per child, in the same order as `children` (not in
/// `order`-sorted order).
pub fn layout_flex(container: Rect, layout: &FlexLayout, children: &[FlexChild]) -> Vec<Rect> {
    let n = children.len();
    if n == 0 {
        return Vec::new();
    }
    if layout.wrap != FlexWrap::NoWrap {
        log::debug!("flex wrap {:?} is not supported; laying out a single line", layout.wrap);
    }

    let main = layout.direction.main_axis();
    let cross = main.cross();
    let content = inset_rect(container, layout.padding.non_negative());

    let main_size = main.of(content.size());
    let cross_size = cross.of(content.size());
    let main_start = main.of(content.origin());
    let cross_start = cross.of(content.origin());

    let gap = non_negative(layout.gap);
    let gaps = gap * (n - 1) as f32;

    let bases: Vec<f32> = children
        .iter()
        .map(|c| non_negative(c.item.basis.unwrap_or_else(|| main.of(c.rect.size()))))
        .collect();

    // Slice sorting is stable: equal `order` keeps relation order.
    let mut sorted: Vec<usize> = (0..n).collect();
    sorted.sort_by_key(|&i| children[i].item.order);

    let total_base: f32 = bases.iter().sum();
    let available = main_size - total_base - gaps;
    let sizes = resolve_main_sizes(main, children, &bases, available);

    let used: f32 = sizes.iter().sum::<f32>() + gaps;
    let (lead, extra_gap) = layout.justify_content.distribute(main_size - used, n);
    let step_gap = gap + extra_gap;

    let mut out = vec![Rect::default(); n];
    let mut cursor = if layout.direction.is_reverse() {
        main_start + main_size - lead
    } else {
        main_start + lead
    };

    for &i in &sorted {
        let child = &children[i];
        let size = sizes[i];

        let pos = if layout.direction.is_reverse() {
            let pos = cursor - size;
            cursor = pos - step_gap;
            pos
        } else {
            let pos = cursor;
            cursor += size + step_gap;
            pos
        };

        let child_cross = cross.of(child.rect.size());
        let (cross_pos, cross_extent) = match child.item.align_self.resolve(layout.align_items) {
            Align::Start | Align::Auto => (cross_start, child_cross),
            Align::Center => (cross_start + (cross_size - child_cross) * 0.5, child_cross),
            Align::End => (cross_start + cross_size - child_cross, child_cross),
            Align::Stretch => (cross_start, cross_size),
        };

        let rect = Rect::from_origin_size(main.pack(pos, cross_pos), main.pack(size, cross_extent))
            .with_non_negative_size();
        log::trace!("flex child #{i} -> {rect:?}");
        out[i] = rect;
    }

    out
}

/// Resolve each child's final main-axis size from its base and the signed
/// free space.
fn resolve_main_sizes(
    main: Axis,
    children: &[FlexChild],
    bases: &[f32],
    available: f32,
) -> Vec<f32> {
    let clamp = |i: usize, v: f32| children[i].item.constraints.clamp_along(main, v);
    let mut sizes: Vec<f32> = (0..children.len()).map(|i| clamp(i, bases[i])).collect();

    if available > 0.0 {
        grow(children, bases, available, &mut sizes, clamp);
    } else if available < 0.0 {
        let shrink_sum: f32 = children.iter().map(|c| non_negative(c.item.shrink)).sum();
        if shrink_sum > 0.0 {
            let deficit = -available;
            for (i, child) in children.iter().enumerate() {
                let deduct = deficit * (non_negative(child.item.shrink) / shrink_sum);
                sizes[i] = clamp(i, non_negative(bases[i] - deduct));
            }
        }
    }

    sizes
}

/// Distribute positive free space by grow weight, re-running whenever a
/// child hits its max so the others absorb what it could not take.
fn grow(
    children: &[FlexChild],
    bases: &[f32],
    available: f32,
    sizes: &mut [f32],
    clamp: impl Fn(usize, f32) -> f32,
) {
    let weight = |i: usize| non_negative(children[i].item.grow);

    let mut pool: Vec<usize> = (0..children.len()).filter(|&i| weight(i) > 0.0).collect();
    let mut remaining = available;
    let mut remaining_grow: f32 = pool.iter().map(|&i| weight(i)).sum();

    // Each pass either clamps nobody (and ends) or drops at least one child.
    loop {
        if pool.is_empty() || remaining_grow <= 0.0 {
            return;
        }

        let mut clamped = Vec::new();
        for &i in &pool {
            let tentative = bases[i] + remaining * weight(i) / remaining_grow;
            let bounded = clamp(i, tentative);
            if bounded < tentative {
                clamped.push((i, bounded));
            }
        }
        if clamped.is_empty() {
            break;
        }

        for (i, bounded) in clamped {
            sizes[i] = bounded;
            remaining -= bounded - bases[i];
            remaining_grow -= weight(i);
            pool.retain(|&p| p != i);
        }
    }

    for &i in &pool {
        sizes[i] = clamp(i, bases[i] + remaining * weight(i) / remaining_grow);
    }
}
