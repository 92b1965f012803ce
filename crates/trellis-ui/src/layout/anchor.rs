use trellis_engine::coords::{Rect, Vec2};

/// One of nine reference points on a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Fractions of the free space `(container - child)` on each axis:
    /// 0 = start, 0.5 = middle, 1 = end.
    #[inline]
    fn factors(self) -> (f32, f32) {
        match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::TopCenter => (0.5, 0.0),
            Anchor::TopRight => (1.0, 0.0),
            Anchor::CenterLeft => (0.0, 0.5),
            Anchor::Center => (0.5, 0.5),
            Anchor::CenterRight => (1.0, 0.5),
            Anchor::BottomLeft => (0.0, 1.0),
            Anchor::BottomCenter => (0.5, 1.0),
            Anchor::BottomRight => (1.0, 1.0),
        }
    }
}

/// Pins a child to an anchor point of its container, plus a pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorLayout {
    pub anchor: Anchor,
    pub offset: Vec2,
}

impl AnchorLayout {
    pub fn new(anchor: Anchor) -> Self {
        Self { anchor, offset: Vec2::zero() }
    }

    pub fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset = Vec2::new(dx, dy);
        self
    }
}

/// Position `child` inside `container`. Only x/y change; the child keeps its size.
pub fn layout_anchor(container: Rect, child: Rect, layout: &AnchorLayout) -> Rect {
    let (fx, fy) = layout.anchor.factors();
    let x = container.x + (container.width - child.width) * fx + layout.offset.x;
    let y = container.y + (container.height - child.height) * fy + layout.offset.y;
    Rect::new(x, y, child.width, child.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(anchor: Anchor) -> Vec2 {
        let container = Rect::new(10.0, 20.0, 200.0, 100.0);
        layout_anchor(container, Rect::sized(50.0, 40.0), &AnchorLayout::new(anchor)).origin()
    }

    #[test]
    fn center_of_square_container() {
        let layout = AnchorLayout::new(Anchor::Center);
        let out = layout_anchor(Rect::sized(200.0, 200.0), Rect::sized(50.0, 40.0), &layout);
        assert_eq!(out, Rect::new(75.0, 80.0, 50.0, 40.0));
    }

    #[test]
    fn all_nine_points() {
        assert_eq!(place(Anchor::TopLeft), Vec2::new(10.0, 20.0));
        assert_eq!(place(Anchor::TopCenter), Vec2::new(85.0, 20.0));
        assert_eq!(place(Anchor::TopRight), Vec2::new(160.0, 20.0));
        assert_eq!(place(Anchor::CenterLeft), Vec2::new(10.0, 50.0));
        assert_eq!(place(Anchor::Center), Vec2::new(85.0, 50.0));
        assert_eq!(place(Anchor::CenterRight), Vec2::new(160.0, 50.0));
        assert_eq!(place(Anchor::BottomLeft), Vec2::new(10.0, 80.0));
        assert_eq!(place(Anchor::BottomCenter), Vec2::new(85.0, 80.0));
        assert_eq!(place(Anchor::BottomRight), Vec2::new(160.0, 80.0));
    }

    #[test]
    fn offset_is_added_after_anchoring() {
        let layout = AnchorLayout::new(Anchor::BottomRight).offset(-8.0, -4.0);
        let child = Rect::new(3.0, 3.0, 20.0, 10.0);
        let out = layout_anchor(Rect::sized(100.0, 100.0), child, &layout);
        assert_eq!(out, Rect::new(72.0, 86.0, 20.0, 10.0));
    }

    #[test]
    fn child_larger_than_container_overhangs() {
        let layout = AnchorLayout::new(Anchor::Center);
        let out = layout_anchor(Rect::sized(10.0, 10.0), Rect::sized(30.0, 30.0), &layout);
        assert_eq!(out.origin(), Vec2::new(-10.0, -10.0));
    }
}
