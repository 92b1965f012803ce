use trellis_engine::coords::{Rect, Vec2, non_negative};

// ── Axis ──────────────────────────────────────────────────────────────────

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Component of `v` along this axis.
    #[inline]
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Build a vector from a value on this axis and one on the cross axis.
    #[inline]
    pub fn pack(self, along: f32, across: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(along, across),
            Axis::Vertical => Vec2::new(across, along),
        }
    }
}

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Inner spacing of a container.
pub type Padding = Edges;

/// Outer spacing of an element.
pub type Margin = Edges;

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    #[inline]
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub fn total_horizontal(self) -> f32 {
        self.left + self.right
    }

    #[inline]
    pub fn total_vertical(self) -> f32 {
        self.top + self.bottom
    }

    /// Total inset along `axis`.
    #[inline]
    pub fn total(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.total_horizontal(),
            Axis::Vertical => self.total_vertical(),
        }
    }

    /// Inset at the start (left or top) of `axis`.
    #[inline]
    pub fn start(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Copy with every edge clamped to `>= 0`.
    #[inline]
    #[must_use]
    pub fn non_negative(self) -> Self {
        Self {
            top: non_negative(self.top),
            right: non_negative(self.right),
            bottom: non_negative(self.bottom),
            left: non_negative(self.left),
        }
    }
}

// ── SizeConstraints ───────────────────────────────────────────────────────

/// Optional min/max bounds on a flex child's size.
///
/// When both bounds on an axis are set and `min > max`, `max` wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeConstraints {
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
}

impl SizeConstraints {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn min_width(mut self, v: f32) -> Self {
        self.min_width = Some(v);
        self
    }

    pub fn max_width(mut self, v: f32) -> Self {
        self.max_width = Some(v);
        self
    }

    pub fn min_height(mut self, v: f32) -> Self {
        self.min_height = Some(v);
        self
    }

    pub fn max_height(mut self, v: f32) -> Self {
        self.max_height = Some(v);
        self
    }

    #[inline]
    pub fn clamp_width(&self, w: f32) -> f32 {
        clamp_opt(w, self.min_width, self.max_width)
    }

    #[inline]
    pub fn clamp_height(&self, h: f32) -> f32 {
        clamp_opt(h, self.min_height, self.max_height)
    }

    /// Clamp a size measured along `axis`.
    #[inline]
    pub fn clamp_along(&self, axis: Axis, v: f32) -> f32 {
        match axis {
            Axis::Horizontal => self.clamp_width(v),
            Axis::Vertical => self.clamp_height(v),
        }
    }

    #[inline]
    #[must_use]
    pub fn clamp_size(&self, size: Vec2) -> Vec2 {
        Vec2::new(self.clamp_width(size.x), self.clamp_height(size.y))
    }
}

#[inline]
fn clamp_opt(v: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let min = match (min, max) {
        (Some(lo), Some(hi)) => Some(lo.min(hi)),
        (lo, _) => lo,
    };
    let mut out = v;
    if let Some(lo) = min {
        out = out.max(lo);
    }
    if let Some(hi) = max {
        out = out.min(hi);
    }
    out
}

// ── rect helper ──────────────────────────────────────────────────────────

/// Shrink a rect by `edges` (padding/inset).
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.x + edges.left,
        rect.y + edges.top,
        non_negative(rect.width - edges.total_horizontal()),
        non_negative(rect.height - edges.total_vertical()),
    )
}
