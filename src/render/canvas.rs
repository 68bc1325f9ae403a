use crate::error::Result;
use crate::geometry::{BisectorSegment, RotatedBand, StrokeStyle, TextBounds, TextOffsets};
use crate::label::{ImageBackground, Rgba};

/// Size and color used to draw label text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    pub size: f64,
    pub color: Rgba,
}

/// External text measurement service.
pub trait TextMeasure {
    /// Returns the bounding box of `text` rendered at `size` pixels.
    fn measure(&self, text: &str, size: f64) -> TextBounds;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f64) -> TextBounds,
{
    fn measure(&self, text: &str, size: f64) -> TextBounds {
        self(text, size)
    }
}

/// Minimal 2D drawing surface the ribbon is rendered onto.
///
/// Coordinates are container pixels with the origin at the top-left corner
/// and y pointing down. Rotations are clockwise in degrees.
pub trait LabelCanvas {
    /// Strokes a segment with the given width, caps and joins.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    fn stroke_segment(
        &mut self,
        segment: &BisectorSegment,
        style: &StrokeStyle,
        color: Rgba,
    ) -> Result<()>;

    /// Fills `band.bounds` rotated by `band.rotation_degrees` about
    /// `band.center`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    fn fill_rotated_rect(&mut self, band: &RotatedBand, color: Rgba) -> Result<()>;

    /// Draws `image` scaled into `band.bounds`, rotated like
    /// [`LabelCanvas::fill_rotated_rect`].
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw or does not know the image.
    fn draw_image(&mut self, band: &RotatedBand, image: &ImageBackground) -> Result<()>;

    /// Draws `text` following `path`, displaced by `offsets`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &BisectorSegment,
        offsets: TextOffsets,
        paint: &TextPaint,
    ) -> Result<()>;
}
