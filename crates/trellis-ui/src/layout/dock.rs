use trellis_engine::coords::{Rect, non_negative};

/// The edge a docked child claims, or `Fill` for whatever is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockSide {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DockLayout {
    pub side: DockSide,
}

impl DockLayout {
    pub fn new(side: DockSide) -> Self {
        Self { side }
    }
}

/// Dock `children` (current rect + side) into `container` in order.
///
/// Each side child takes a strip as wide (or tall) as its current rect,
/// capped at what remains. `Fill` takes the whole remaining rect without
/// consuming it.
pub fn layout_dock(container: Rect, children: &[(Rect, DockSide)]) -> Vec<Rect> {
    let mut remaining = container.with_non_negative_size();

    children
        .iter()
        .map(|&(child, side)| {
            let placed = match side {
                DockSide::Left => {
                    let w = non_negative(child.width).min(remaining.width);
                    let r = Rect::new(remaining.x, remaining.y, w, remaining.height);
                    remaining.x += w;
                    remaining.width -= w;
                    r
                }
                DockSide::Right => {
                    let w = non_negative(child.width).min(remaining.width);
                    remaining.width -= w;
                    Rect::new(remaining.right(), remaining.y, w, remaining.height)
                }
                DockSide::Top => {
                    let h = non_negative(child.height).min(remaining.height);
                    let r = Rect::new(remaining.x, remaining.y, remaining.width, h);
                    remaining.y += h;
                    remaining.height -= h;
                    r
                }
                DockSide::Bottom => {
                    let h = non_negative(child.height).min(remaining.height);
                    remaining.height -= h;
                    Rect::new(remaining.x, remaining.bottom(), remaining.width, h)
                }
                DockSide::Fill => remaining,
            };
            log::trace!("dock {side:?} -> {placed:?}, remaining {remaining:?}");
            placed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_consumption() {
        let kids = [
            (Rect::sized(50.0, 10.0), DockSide::Left),
            (Rect::sized(10.0, 30.0), DockSide::Top),
            (Rect::default(), DockSide::Fill),
        ];
        let out = layout_dock(Rect::sized(300.0, 200.0), &kids);
        assert_eq!(out[0], Rect::new(0.0, 0.0, 50.0, 200.0));
        assert_eq!(out[1], Rect::new(50.0, 0.0, 250.0, 30.0));
        assert_eq!(out[2], Rect::new(50.0, 30.0, 250.0, 170.0));
    }

    #[test]
    fn right_and_bottom_claim_far_edges() {
        let kids = [
            (Rect::sized(40.0, 0.0), DockSide::Right),
            (Rect::sized(0.0, 25.0), DockSide::Bottom),
            (Rect::default(), DockSide::Fill),
        ];
        let out = layout_dock(Rect::new(10.0, 10.0, 200.0, 100.0), &kids);
        assert_eq!(out[0], Rect::new(170.0, 10.0, 40.0, 100.0));
        assert_eq!(out[1], Rect::new(10.0, 85.0, 160.0, 25.0));
        assert_eq!(out[2], Rect::new(10.0, 10.0, 160.0, 75.0));
    }

    #[test]
    fn fill_does_not_consume() {
        let kids = [
            (Rect::default(), DockSide::Fill),
            (Rect::sized(20.0, 0.0), DockSide::Left),
        ];
        let out = layout_dock(Rect::sized(100.0, 50.0), &kids);
        assert_eq!(out[0], Rect::sized(100.0, 50.0));
        assert_eq!(out[1], Rect::new(0.0, 0.0, 20.0, 50.0));
    }

    #[test]
    fn oversized_strip_is_capped_at_remaining() {
        let kids = [
            (Rect::sized(80.0, 0.0), DockSide::Left),
            (Rect::sized(80.0, 0.0), DockSide::Left),
            (Rect::default(), DockSide::Fill),
        ];
        let out = layout_dock(Rect::sized(100.0, 50.0), &kids);
        assert_eq!(out[1], Rect::new(80.0, 0.0, 20.0, 50.0));
        assert_eq!(out[2], Rect::new(100.0, 0.0, 0.0, 50.0));
    }

    #[test]
    fn rerun_is_idempotent() {
        let container = Rect::sized(300.0, 200.0);
        let mut kids = vec![
            (Rect::sized(50.0, 0.0), DockSide::Left),
            (Rect::sized(0.0, 30.0), DockSide::Top),
            (Rect::default(), DockSide::Fill),
        ];
        let first = layout_dock(container, &kids);
        for (k, r) in kids.iter_mut().zip(&first) {
            k.0 = *r;
        }
        assert_eq!(layout_dock(container, &kids), first);
    }
}
