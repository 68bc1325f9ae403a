use crate::error::Result;
use crate::geometry::{
    BandRegion, BisectorSegment, ComputeBand, ComputeBisector, ComputeTextOffsets, ContainerSize,
    TextOffsets,
};
use crate::label::{Background, LabelSpec, TextDirection};

use super::{LabelCanvas, TextMeasure, TextPaint};

/// Everything needed to draw one frame of a ribbon label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelGeometry {
    /// Bisector segment, running left to right.
    pub bisector: BisectorSegment,
    /// Path handed to the text primitive; reversed for right-to-left text.
    pub text_path: BisectorSegment,
    pub band: BandRegion,
    pub text_offsets: TextOffsets,
    /// Resolved text size in pixels.
    pub text_size: f64,
}

/// Computes the full label geometry from a property snapshot.
#[derive(Debug)]
pub struct LayoutLabel<'a> {
    spec: &'a LabelSpec,
    size: ContainerSize,
}

impl<'a> LayoutLabel<'a> {
    #[must_use]
    pub fn new(spec: &'a LabelSpec, size: ContainerSize) -> Self {
        Self { spec, size }
    }

    /// Executes the layout, measuring the label text with `measure`.
    #[must_use]
    pub fn execute<M>(&self, measure: &M) -> LabelGeometry
    where
        M: TextMeasure + ?Sized,
    {
        let spec = self.spec;
        let (distance, thickness) = (spec.distance(), spec.thickness());

        let bisector =
            ComputeBisector::new(self.size, spec.corner(), distance, thickness).execute();
        let text_path = match spec.text_direction() {
            TextDirection::LeftToRight => bisector,
            TextDirection::RightToLeft => bisector.reversed(),
        };

        let mut band = ComputeBand::new(self.size, spec.corner(), distance, thickness)
            .with_style(spec.band_style());
        if let Background::Image(image) = spec.background() {
            band = band.with_image(image.intrinsic_width, image.intrinsic_height);
        }

        let text_size = spec.text_size().resolve();
        let bounds = measure.measure(spec.text(), text_size);
        let text_offsets = ComputeTextOffsets::new(bounds, distance, thickness).execute();

        LabelGeometry {
            bisector,
            text_path,
            band: band.execute(),
            text_offsets,
            text_size,
        }
    }
}

/// Lays out a label and renders it onto a [`LabelCanvas`].
///
/// The band is drawn first, then the text. Empty text is not drawn.
#[derive(Debug)]
pub struct DrawLabel<'a> {
    spec: &'a LabelSpec,
    size: ContainerSize,
}

impl<'a> DrawLabel<'a> {
    #[must_use]
    pub fn new(spec: &'a LabelSpec, size: ContainerSize) -> Self {
        Self { spec, size }
    }

    /// Executes the draw, returning the geometry that was rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas fails to draw.
    pub fn execute<M, C>(&self, measure: &M, canvas: &mut C) -> Result<LabelGeometry>
    where
        M: TextMeasure + ?Sized,
        C: LabelCanvas + ?Sized,
    {
        let geometry = LayoutLabel::new(self.spec, self.size).execute(measure);

        match (self.spec.background(), &geometry.band) {
            (Background::Color(color), BandRegion::Stroke(band)) => {
                canvas.stroke_segment(&band.path, &band.style, *color)?;
            }
            (Background::Color(color), BandRegion::Rotated(band)) => {
                canvas.fill_rotated_rect(band, *color)?;
            }
            (Background::Image(image), BandRegion::Rotated(band)) => {
                canvas.draw_image(band, image)?;
            }
            // Image backgrounds never lay out as strokes.
            (Background::Image(_), BandRegion::Stroke(_)) => {}
        }

        if !self.spec.text().is_empty() {
            let paint = TextPaint {
                size: geometry.text_size,
                color: self.spec.text_color(),
            };
            canvas.draw_text_on_path(
                self.spec.text(),
                &geometry.text_path,
                geometry.text_offsets,
                &paint,
            )?;
        }

        Ok(geometry)
    }
}
