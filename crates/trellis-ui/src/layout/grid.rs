use trellis_engine::coords::{Rect, non_negative};

use crate::constraints::{Padding, inset_rect};

/// Placement order for grid cells.
///
/// Only `Row` is implemented. `Column` and `Dense` are reported at debug
/// level and placed row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAutoFlow {
    #[default]
    Row,
    Column,
    Dense,
}

/// Uniform grid container parameters.
///
/// A zero `columns` or `rows` is derived from the child count and the other
/// dimension. When both are zero the grid is a single column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub column_gap: f32,
    pub row_gap: f32,
    pub padding: Padding,
    pub auto_flow: GridAutoFlow,
}

impl GridLayout {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows, ..Self::default() }
    }

    /// Fixed column count, rows derived from the child count.
    pub fn columns(columns: u32) -> Self {
        Self::new(columns, 0)
    }

    pub fn gap(mut self, v: f32) -> Self {
        self.column_gap = v;
        self.row_gap = v;
        self
    }

    pub fn column_gap(mut self, v: f32) -> Self {
        self.column_gap = v;
        self
    }

    pub fn row_gap(mut self, v: f32) -> Self {
        self.row_gap = v;
        self
    }

    pub fn padding(mut self, p: Padding) -> Self {
        self.padding = p;
        self
    }

    pub fn auto_flow(mut self, flow: GridAutoFlow) -> Self {
        self.auto_flow = flow;
        self
    }

    /// Resolved `(columns, rows)` for `count` children. Both are at least 1.
    pub fn tracks(&self, count: usize) -> (usize, usize) {
        let derive = |known: usize| count.div_ceil(known).max(1);
        match (self.columns as usize, self.rows as usize) {
            (0, 0) => (1, count.max(1)),
            (c, 0) => (c, derive(c)),
            (0, r) => (derive(r), r),
            (c, r) => (c, r),
        }
    }
}

/// Cell rects for `count` children, in relation order.
///
/// Every cell has the same size. Children past `columns * rows` keep
/// flowing into further rows below the grid.
pub fn layout_grid(container: Rect, layout: &GridLayout, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    if layout.auto_flow != GridAutoFlow::Row {
        log::debug!("grid auto-flow {:?} is not supported; placing row-major", layout.auto_flow);
    }

    let (columns, rows) = layout.tracks(count);
    let content = inset_rect(container, layout.padding.non_negative());
    let column_gap = non_negative(layout.column_gap);
    let row_gap = non_negative(layout.row_gap);

    let total_column_gap = if columns > 1 { column_gap * (columns - 1) as f32 } else { 0.0 };
    let total_row_gap = if rows > 1 { row_gap * (rows - 1) as f32 } else { 0.0 };

    let cell_width = non_negative((content.width - total_column_gap) / columns as f32);
    let cell_height = non_negative((content.height - total_row_gap) / rows as f32);

    (0..count)
        .map(|i| {
            let col = i % columns;
            let row = i / columns;
            Rect::new(
                content.x + col as f32 * (cell_width + column_gap),
                content.y + row as f32 * (cell_height + row_gap),
                cell_width,
                cell_height,
            )
        })
        .collect()
}
