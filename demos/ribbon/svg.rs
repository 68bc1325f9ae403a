//! SVG drawing surface for ribbon labels.

use std::fmt::Write as _;

use ribbon::error::{RenderError, Result};
use ribbon::geometry::{BisectorSegment, LineCap, LineJoin, RotatedBand, StrokeStyle, TextOffsets};
use ribbon::label::{ImageBackground, Rgba};
use ribbon::render::{LabelCanvas, TextPaint};

/// Writes ribbon draw commands as SVG elements into a string buffer.
#[derive(Debug, Default)]
pub struct SvgCanvas {
    body: String,
    next_path_id: usize,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a group translated to `(x, y)` and clipped to a `width × height`
    /// container outlined in gray.
    pub fn begin_panel(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        let id = self.fresh_id("clip");
        write!(
            self.body,
            r##"<g transform="translate({x} {y})"><clipPath id="{id}"><rect width="{width}" height="{height}"/></clipPath><rect width="{width}" height="{height}" fill="#f4f4f4" stroke="#888888"/><g clip-path="url(#{id})">"##
        )
        .map_err(RenderError::from)?;
        Ok(())
    }

    pub fn end_panel(&mut self) -> Result<()> {
        self.body.push_str("</g></g>\n");
        Ok(())
    }

    /// Wraps the collected elements in an `<svg>` document.
    pub fn finish(self, width: i32, height: i32) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n{}</svg>\n",
            self.body
        )
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_path_id += 1;
        format!("{prefix}{}", self.next_path_id)
    }
}

fn fill_attrs(color: Rgba) -> String {
    format!(
        r#"fill="{}" fill-opacity="{:.3}""#,
        color.to_hex_rgb(),
        color.opacity()
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl LabelCanvas for SvgCanvas {
    fn stroke_segment(
        &mut self,
        segment: &BisectorSegment,
        style: &StrokeStyle,
        color: Rgba,
    ) -> Result<()> {
        if !style.is_visible() {
            return Ok(());
        }
        let cap = match style.cap() {
            LineCap::Butt => "butt",
            LineCap::Square => "square",
            LineCap::Round => "round",
        };
        let join = match style.join() {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        };
        write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{:.3}" stroke-width="{}" stroke-linecap="{cap}" stroke-linejoin="{join}"/>"#,
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
            color.to_hex_rgb(),
            color.opacity(),
            style.width(),
        )
        .map_err(RenderError::from)?;
        Ok(())
    }

    fn fill_rotated_rect(&mut self, band: &RotatedBand, color: Rgba) -> Result<()> {
        let points = band
            .corners()
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        write!(self.body, r#"<polygon points="{points}" {}/>"#, fill_attrs(color))
            .map_err(RenderError::from)?;
        Ok(())
    }

    fn draw_image(&mut self, band: &RotatedBand, image: &ImageBackground) -> Result<()> {
        let b = &band.bounds;
        write!(
            self.body,
            r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none" transform="rotate({} {} {})"/>"#,
            escape(&image.key),
            b.left,
            b.top,
            b.width(),
            b.height(),
            band.rotation_degrees,
            band.center.x,
            band.center.y,
        )
        .map_err(RenderError::from)?;
        Ok(())
    }

    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &BisectorSegment,
        offsets: TextOffsets,
        paint: &TextPaint,
    ) -> Result<()> {
        let id = self.fresh_id("path");
        write!(
            self.body,
            r##"<path id="{id}" d="M {} {} L {} {}" fill="none"/><text font-family="sans-serif" font-size="{}" {} dy="{:.2}"><textPath href="#{id}" startOffset="{:.2}">{}</textPath></text>"##,
            path.start.x,
            path.start.y,
            path.end.x,
            path.end.y,
            paint.size,
            fill_attrs(paint.color),
            offsets.perpendicular,
            offsets.along_path,
            escape(text),
        )
        .map_err(RenderError::from)?;
        Ok(())
    }
}
