use crate::error::Result;
use crate::geometry::{BisectorSegment, RotatedBand, StrokeStyle, TextOffsets};
use crate::label::{ImageBackground, Rgba};

use super::{LabelCanvas, TextPaint};

/// A single command captured by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    StrokeSegment {
        segment: BisectorSegment,
        style: StrokeStyle,
        color: Rgba,
    },
    FillRotatedRect {
        band: RotatedBand,
        color: Rgba,
    },
    DrawImage {
        band: RotatedBand,
        image: ImageBackground,
    },
    DrawTextOnPath {
        text: String,
        path: BisectorSegment,
        offsets: TextOffsets,
        paint: TextPaint,
    },
}

/// A drawing surface that records commands instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in draw order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the canvas, returning the recorded commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl LabelCanvas for RecordingCanvas {
    fn stroke_segment(
        &mut self,
        segment: &BisectorSegment,
        style: &StrokeStyle,
        color: Rgba,
    ) -> Result<()> {
        self.commands.push(DrawCommand::StrokeSegment {
            segment: *segment,
            style: *style,
            color,
        });
        Ok(())
    }

    fn fill_rotated_rect(&mut self, band: &RotatedBand, color: Rgba) -> Result<()> {
        self.commands
            .push(DrawCommand::FillRotatedRect { band: *band, color });
        Ok(())
    }

    fn draw_image(&mut self, band: &RotatedBand, image: &ImageBackground) -> Result<()> {
        self.commands.push(DrawCommand::DrawImage {
            band: *band,
            image: image.clone(),
        });
        Ok(())
    }

    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &BisectorSegment,
        offsets: TextOffsets,
        paint: &TextPaint,
    ) -> Result<()> {
        self.commands.push(DrawCommand::DrawTextOnPath {
            text: text.to_owned(),
            path: *path,
            offsets,
            paint: *paint,
        });
        Ok(())
    }
}
