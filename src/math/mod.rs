/// 2D point type for sub-pixel values.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D point type on the integer pixel grid.
pub type PixelPoint = nalgebra::Point2<i32>;

/// Converts a float to a pixel coordinate, truncating toward zero.
///
/// Out-of-range values saturate at the `i32` bounds and NaN maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_to_pixel(value: f64) -> i32 {
    value as i32
}

/// Widens a pixel point to a sub-pixel point.
#[must_use]
pub fn to_point2(p: PixelPoint) -> Point2 {
    Point2::new(f64::from(p.x), f64::from(p.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_goes_toward_zero() {
        assert_eq!(truncate_to_pixel(35.355), 35);
        assert_eq!(truncate_to_pixel(-35.9), -35);
    }

    #[test]
    fn truncation_saturates() {
        assert_eq!(truncate_to_pixel(1e20), i32::MAX);
        assert_eq!(truncate_to_pixel(-1e20), i32::MIN);
        assert_eq!(truncate_to_pixel(f64::NAN), 0);
    }
}
