use crate::math::PixelPoint;

/// An axis-aligned rectangle on the pixel grid.
///
/// `right` and `bottom` are exclusive edges, so `width = right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    #[must_use]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle spanning `half_width`/`half_height` on each side of
    /// `center`.
    #[must_use]
    pub fn around(center: PixelPoint, half_width: i32, half_height: i32) -> Self {
        Self::new(
            center.x.saturating_sub(half_width),
            center.y.saturating_sub(half_height),
            center.x.saturating_add(half_width),
            center.y.saturating_add(half_height),
        )
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Horizontal center, rounded toward negative infinity.
    #[must_use]
    pub fn center_x(&self) -> i32 {
        midpoint(self.left, self.right)
    }

    /// Vertical center, rounded toward negative infinity.
    #[must_use]
    pub fn center_y(&self) -> i32 {
        midpoint(self.top, self.bottom)
    }

    #[must_use]
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.center_x(), self.center_y())
    }

    /// Returns whether the rectangle encloses no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }
}

#[allow(clippy::cast_possible_truncation)]
fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) >> 1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn around_builds_symmetric_rect() {
        let r = PixelRect::around(PixelPoint::new(10, 20), 6, 3);
        assert_eq!(r, PixelRect::new(4, 17, 16, 23));
        assert_eq!(r.width(), 12);
        assert_eq!(r.height(), 6);
        assert_eq!(r.center(), PixelPoint::new(10, 20));
    }

    #[test]
    fn zero_height_rect_is_empty_but_valid() {
        let r = PixelRect::around(PixelPoint::new(5, 5), 4, 0);
        assert_eq!(r.height(), 0);
        assert!(r.is_empty());
        assert_eq!(r.width(), 8);
    }

    #[test]
    fn center_of_extreme_rect_does_not_overflow() {
        let r = PixelRect::new(i32::MAX - 2, 0, i32::MAX, 0);
        assert_eq!(r.center_x(), i32::MAX - 1);
    }
}
