use std::f64::consts::SQRT_2;

use nalgebra::Rotation2;

use crate::math::{to_point2, truncate_to_pixel, Point2, PixelPoint};

use super::{
    BisectorSegment, ComputeBisector, ContainerSize, Corner, FitImage, PixelRect, StrokeStyle,
};

/// How the ribbon band is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BandStyle {
    /// A thick line stroked along the bisector.
    Stroke,
    /// A rectangle rotated about the band center.
    #[default]
    RotatedRect,
}

/// A band rendered as a single stroked segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeBand {
    pub path: BisectorSegment,
    pub style: StrokeStyle,
}

/// A band rendered as a rectangle rotated about its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedBand {
    /// Rotation pivot, also the center of `frame`.
    pub center: PixelPoint,
    /// Half the band length along the bisector.
    pub half_width: i32,
    /// Half the band thickness.
    pub half_height: i32,
    /// Clockwise rotation in degrees, applied about `center`.
    pub rotation_degrees: f64,
    /// Unrotated label rectangle.
    pub frame: PixelRect,
    /// Unrotated rectangle actually filled. Equal to `frame` for flat fills.
    pub bounds: PixelRect,
}

impl RotatedBand {
    /// Returns the corners of `bounds` after rotation, clockwise from the
    /// top-left corner of the unrotated rectangle.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let rotation = Rotation2::new(self.rotation_degrees.to_radians());
        let pivot = to_point2(self.center);
        let b = &self.bounds;
        [
            (b.left, b.top),
            (b.right, b.top),
            (b.right, b.bottom),
            (b.left, b.bottom),
        ]
        .map(|(x, y)| {
            let local = Point2::new(f64::from(x), f64::from(y)) - pivot;
            pivot + rotation * local
        })
    }
}

/// The region the ribbon background occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandRegion {
    Stroke(StrokeBand),
    Rotated(RotatedBand),
}

/// Distance from the corner vertex, along each edge, to the band center.
///
/// Computed as `trunc((distance + thickness / 2) / √2)`.
#[must_use]
pub fn center_offset(distance: i32, thickness: i32) -> i32 {
    truncate_to_pixel((f64::from(distance) + f64::from(thickness / 2)) / SQRT_2)
}

/// Computes the band region for a corner of a container.
#[derive(Debug)]
pub struct ComputeBand {
    size: ContainerSize,
    corner: Corner,
    distance: i32,
    thickness: i32,
    style: BandStyle,
    image: Option<(i32, i32)>,
}

impl ComputeBand {
    /// Creates a new band computation using the rotated-rectangle style and a
    /// flat fill.
    #[must_use]
    pub fn new(size: ContainerSize, corner: Corner, distance: i32, thickness: i32) -> Self {
        Self {
            size,
            corner,
            distance,
            thickness,
            style: BandStyle::default(),
            image: None,
        }
    }

    /// Selects the band style.
    #[must_use]
    pub fn with_style(mut self, style: BandStyle) -> Self {
        self.style = style;
        self
    }

    /// Fits an image of the given intrinsic size into the band.
    ///
    /// Images always use the rotated-rectangle style.
    #[must_use]
    pub fn with_image(mut self, intrinsic_width: i32, intrinsic_height: i32) -> Self {
        self.image = Some((intrinsic_width, intrinsic_height));
        self
    }

    /// Executes the computation.
    #[must_use]
    pub fn execute(&self) -> BandRegion {
        let region = match (self.style, self.image) {
            (BandStyle::Stroke, None) => BandRegion::Stroke(self.stroke_band()),
            _ => BandRegion::Rotated(self.rotated_band()),
        };
        tracing::trace!(corner = %self.corner, ?region, "computed band region");
        region
    }

    fn stroke_band(&self) -> StrokeBand {
        StrokeBand {
            path: ComputeBisector::new(self.size, self.corner, self.distance, self.thickness)
                .execute(),
            style: StrokeStyle::new(f64::from(self.thickness)),
        }
    }

    fn rotated_band(&self) -> RotatedBand {
        let convention = self.corner.convention();
        let offset = center_offset(self.distance, self.thickness);
        let center = convention.offset_from_anchor(self.size, offset, offset);

        let half_width = self.distance.saturating_add(self.thickness);
        let half_height = self.thickness / 2;
        let frame = PixelRect::around(center, half_width, half_height);

        let bounds = match self.image {
            Some((w, h)) => FitImage::new(w, h, frame).execute(),
            None => frame,
        };

        RotatedBand {
            center,
            half_width,
            half_height,
            rotation_degrees: convention.rotation_degrees,
            frame,
            bounds,
        }
    }
}
