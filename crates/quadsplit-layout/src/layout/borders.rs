//! Split dividers produced by the layout pass.
//!
//! Each split node yields one `SplitBorder` describing where its divider
//! runs. Hosts use them to draw separators, and `hit_test` tells whether
//! a pointer sits on one.

use quadsplit_common::{Point, Rect, SplitAxis};

/// A divider between the two children of a split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitBorder {
    /// Axis of the split (Horizontal = vertical divider line).
    pub axis: SplitAxis,
    /// Centre of the divider along `axis` (x for horizontal, y for vertical).
    pub position: f64,
    /// Start of the divider line on the cross axis.
    pub start: f64,
    /// End of the divider line on the cross axis.
    pub end: f64,
    /// 0 for the top-level split, 1 for nested splits.
    pub level: usize,
    /// Bounds of the region the split divides.
    pub bounds: Rect,
}

impl SplitBorder {
    /// Half-width of the hit zone on each side of the border.
    pub const HIT_HALF_WIDTH: f64 = 6.0;

    /// Test whether `p` is within the drag zone of this border.
    pub fn hit_test(&self, p: Point) -> bool {
        let (along, across) = match self.axis {
            SplitAxis::Horizontal => (p.x, p.y),
            SplitAxis::Vertical => (p.y, p.x),
        };
        (along - self.position).abs() <= Self::HIT_HALF_WIDTH
            && across >= self.start
            && across <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn hit_test_horizontal_border() {
        let border = SplitBorder {
            axis: SplitAxis::Horizontal,
            position: 400.0,
            start: 0.0,
            end: 600.0,
            level: 0,
            bounds: viewport(),
        };
        // On the border
        assert!(border.hit_test(Point::new(400.0, 300.0)));
        // Just within hit zone (6 units)
        assert!(border.hit_test(Point::new(405.0, 300.0)));
        assert!(border.hit_test(Point::new(395.0, 300.0)));
        // Outside hit zone
        assert!(!border.hit_test(Point::new(410.0, 300.0)));
        // Outside vertical span
        assert!(!border.hit_test(Point::new(400.0, -1.0)));
        assert!(!border.hit_test(Point::new(400.0, 601.0)));
    }

    #[test]
    fn hit_test_vertical_border() {
        let border = SplitBorder {
            axis: SplitAxis::Vertical,
            position: 300.0,
            start: 0.0,
            end: 800.0,
            level: 1,
            bounds: viewport(),
        };
        assert!(border.hit_test(Point::new(400.0, 300.0)));
        assert!(border.hit_test(Point::new(400.0, 305.0)));
        assert!(!border.hit_test(Point::new(400.0, 310.0)));
    }
}
