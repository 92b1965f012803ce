//! Coordinate and geometry types shared by the entity store and the layout engine.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;

/// `max(v, 0)` that also maps NaN to zero.
#[inline]
pub fn non_negative(v: f32) -> f32 {
    if v > 0.0 { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_clamps_and_swallows_nan() {
        assert_eq!(non_negative(3.5), 3.5);
        assert_eq!(non_negative(-2.0), 0.0);
        assert_eq!(non_negative(f32::NAN), 0.0);
    }
}
