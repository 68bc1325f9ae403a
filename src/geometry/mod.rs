mod band;
mod bisector;
mod corner;
mod fit;
mod rect;
mod stroke_style;
mod text_offset;

pub use band::{center_offset, BandRegion, BandStyle, ComputeBand, RotatedBand, StrokeBand};
pub use bisector::{intersect_offset, BisectorSegment, ComputeBisector};
pub use corner::{Corner, CornerConvention};
pub use fit::FitImage;
pub use rect::PixelRect;
pub use stroke_style::{LineCap, LineJoin, StrokeStyle};
pub use text_offset::{ComputeTextOffsets, TextBounds, TextOffsets};

/// Measured size of the container hosting the ribbon, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerSize {
    pub width: i32,
    pub height: i32,
}

impl ContainerSize {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
