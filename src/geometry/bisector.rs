use std::f64::consts::SQRT_2;

use crate::math::{to_point2, truncate_to_pixel, PixelPoint};

use super::{ContainerSize, Corner};

/// Distance from the corner vertex, along each container edge, at which the
/// 45° bisector of the band crosses the container boundary.
///
/// Computed as `trunc(√2 · (distance + thickness / 2))` with integer halving
/// of the thickness. Truncation is toward zero on every platform.
#[must_use]
pub fn intersect_offset(distance: i32, thickness: i32) -> i32 {
    truncate_to_pixel(SQRT_2 * (f64::from(distance) + f64::from(thickness / 2)))
}

/// The segment along which the ribbon band is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BisectorSegment {
    /// Endpoint with the smaller x coordinate.
    pub start: PixelPoint,
    /// Endpoint with the larger x coordinate.
    pub end: PixelPoint,
}

impl BisectorSegment {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: PixelPoint, end: PixelPoint) -> Self {
        Self { start, end }
    }

    /// Returns the segment with its direction reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&to_point2(self.start), &to_point2(self.end))
    }

    /// Returns whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Computes the bisector segment for a corner of a container.
#[derive(Debug)]
pub struct ComputeBisector {
    size: ContainerSize,
    corner: Corner,
    distance: i32,
    thickness: i32,
}

impl ComputeBisector {
    /// Creates a new bisector computation.
    #[must_use]
    pub fn new(size: ContainerSize, corner: Corner, distance: i32, thickness: i32) -> Self {
        Self {
            size,
            corner,
            distance,
            thickness,
        }
    }

    /// Executes the computation.
    ///
    /// Left-hand corners start on the vertical edge and end on the horizontal
    /// one; right-hand corners start on the horizontal edge. Either way the
    /// segment runs left to right.
    #[must_use]
    pub fn execute(&self) -> BisectorSegment {
        let offset = intersect_offset(self.distance, self.thickness);
        let convention = self.corner.convention();
        let on_vertical_edge = convention.offset_from_anchor(self.size, 0, offset);
        let on_horizontal_edge = convention.offset_from_anchor(self.size, offset, 0);

        if convention.horizontal_sign > 0 {
            BisectorSegment::new(on_vertical_edge, on_horizontal_edge)
        } else {
            BisectorSegment::new(on_horizontal_edge, on_vertical_edge)
        }
    }
}
