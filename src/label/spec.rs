use crate::error::LabelError;
use crate::geometry::{BandStyle, Corner};

use super::Rgba;

/// Text size used when none is set, in pixels.
pub const DEFAULT_TEXT_SIZE: f64 = 12.0;

/// Requested text size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextSize {
    /// Use [`DEFAULT_TEXT_SIZE`].
    #[default]
    Unset,
    /// Explicit size in pixels.
    Px(f64),
}

impl TextSize {
    /// Creates an explicit text size.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not positive and finite.
    pub fn px(size: f64) -> Result<Self, LabelError> {
        if size.is_finite() && size > 0.0 {
            Ok(Self::Px(size))
        } else {
            Err(LabelError::InvalidTextSize(size))
        }
    }

    /// Returns the size in pixels, substituting the default when unset.
    #[must_use]
    pub fn resolve(self) -> f64 {
        match self {
            Self::Unset => DEFAULT_TEXT_SIZE,
            Self::Px(size) => size,
        }
    }
}

/// Reading direction of the label text along the bisector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextDirection {
    #[default]
    LeftToRight,
    /// Text runs from the right end of the bisector to the left end.
    RightToLeft,
}

/// An image used as the band background.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageBackground {
    /// Opaque handle passed back to the drawing surface.
    pub key: String,
    pub intrinsic_width: i32,
    pub intrinsic_height: i32,
}

impl ImageBackground {
    #[must_use]
    pub fn new(key: impl Into<String>, intrinsic_width: i32, intrinsic_height: i32) -> Self {
        Self {
            key: key.into(),
            intrinsic_width,
            intrinsic_height,
        }
    }
}

/// Fill of the ribbon band.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Background {
    Color(Rgba),
    Image(ImageBackground),
}

impl Default for Background {
    fn default() -> Self {
        Self::Color(Rgba::TRANSPARENT)
    }
}

impl From<Rgba> for Background {
    fn from(color: Rgba) -> Self {
        Self::Color(color)
    }
}

impl From<ImageBackground> for Background {
    fn from(image: ImageBackground) -> Self {
        Self::Image(image)
    }
}

/// Immutable snapshot of every ribbon label property.
///
/// Changing a property means building a new snapshot, usually through
/// [`LabelSpec::to_builder`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelSpec {
    distance: i32,
    thickness: i32,
    corner: Corner,
    text: String,
    text_size: TextSize,
    text_color: Rgba,
    background: Background,
    text_direction: TextDirection,
    band_style: BandStyle,
}

impl Default for LabelSpec {
    fn default() -> Self {
        Self {
            distance: 0,
            thickness: 0,
            corner: Corner::default(),
            text: String::new(),
            text_size: TextSize::default(),
            text_color: Rgba::BLACK,
            background: Background::default(),
            text_direction: TextDirection::default(),
            band_style: BandStyle::default(),
        }
    }
}

impl LabelSpec {
    /// Returns a builder seeded with the default properties.
    #[must_use]
    pub fn builder() -> LabelSpecBuilder {
        LabelSpecBuilder::default()
    }

    /// Returns a builder seeded with this snapshot's properties.
    #[must_use]
    pub fn to_builder(&self) -> LabelSpecBuilder {
        LabelSpecBuilder { spec: self.clone() }
    }

    /// Gap between the corner vertex and the near edge of the band.
    #[must_use]
    pub fn distance(&self) -> i32 {
        self.distance
    }

    /// Thickness of the band.
    #[must_use]
    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    #[must_use]
    pub fn corner(&self) -> Corner {
        self.corner
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn text_size(&self) -> TextSize {
        self.text_size
    }

    #[must_use]
    pub fn text_color(&self) -> Rgba {
        self.text_color
    }

    #[must_use]
    pub fn background(&self) -> &Background {
        &self.background
    }

    #[must_use]
    pub fn text_direction(&self) -> TextDirection {
        self.text_direction
    }

    #[must_use]
    pub fn band_style(&self) -> BandStyle {
        self.band_style
    }
}

/// Property setters producing a [`LabelSpec`].
///
/// No relation between properties is enforced; negative distances and
/// thicknesses are kept as given.
#[derive(Debug, Clone, Default)]
pub struct LabelSpecBuilder {
    spec: LabelSpec,
}

impl LabelSpecBuilder {
    #[must_use]
    pub fn distance(mut self, distance: i32) -> Self {
        self.spec.distance = distance;
        self
    }

    #[must_use]
    pub fn thickness(mut self, thickness: i32) -> Self {
        self.spec.thickness = thickness;
        self
    }

    #[must_use]
    pub fn corner(mut self, corner: Corner) -> Self {
        self.spec.corner = corner;
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.spec.text = text.into();
        self
    }

    #[must_use]
    pub fn text_size(mut self, text_size: TextSize) -> Self {
        self.spec.text_size = text_size;
        self
    }

    #[must_use]
    pub fn text_color(mut self, text_color: Rgba) -> Self {
        self.spec.text_color = text_color;
        self
    }

    #[must_use]
    pub fn background(mut self, background: impl Into<Background>) -> Self {
        self.spec.background = background.into();
        self
    }

    #[must_use]
    pub fn text_direction(mut self, text_direction: TextDirection) -> Self {
        self.spec.text_direction = text_direction;
        self
    }

    #[must_use]
    pub fn band_style(mut self, band_style: BandStyle) -> Self {
        self.spec.band_style = band_style;
        self
    }

    #[must_use]
    pub fn build(self) -> LabelSpec {
        self.spec
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_defaults() {
        let spec = LabelSpec::default();
        assert_eq!(spec.distance(), 0);
        assert_eq!(spec.thickness(), 0);
        assert_eq!(spec.corner(), Corner::TopLeft);
        assert_eq!(spec.text(), "");
        assert_eq!(spec.text_size(), TextSize::Unset);
        assert_eq!(spec.text_color(), Rgba::BLACK);
        assert_eq!(spec.background(), &Background::Color(Rgba::TRANSPARENT));
        assert_eq!(spec.text_direction(), TextDirection::LeftToRight);
        assert_eq!(spec.band_style(), BandStyle::RotatedRect);
    }

    #[test]
    fn builder_sets_every_property() {
        let spec = LabelSpec::builder()
            .distance(20)
            .thickness(10)
            .corner(Corner::BottomLeft)
            .text("SALE")
            .text_size(TextSize::px(14.0).unwrap())
            .text_color(Rgba::WHITE)
            .background(Rgba::rgb(255, 0, 0))
            .text_direction(TextDirection::RightToLeft)
            .band_style(BandStyle::Stroke)
            .build();
        assert_eq!(spec.distance(), 20);
        assert_eq!(spec.thickness(), 10);
        assert_eq!(spec.corner(), Corner::BottomLeft);
        assert_eq!(spec.text(), "SALE");
        assert!((spec.text_size().resolve() - 14.0).abs() < f64::EPSILON);
        assert_eq!(spec.text_color(), Rgba::WHITE);
        assert_eq!(spec.background(), &Background::Color(Rgba::rgb(255, 0, 0)));
        assert_eq!(spec.text_direction(), TextDirection::RightToLeft);
        assert_eq!(spec.band_style(), BandStyle::Stroke);
    }

    #[test]
    fn to_builder_leaves_original_untouched() {
        let original = LabelSpec::builder().distance(5).text("NEW").build();
        let changed = original.to_builder().distance(9).build();
        assert_eq!(original.distance(), 5);
        assert_eq!(changed.distance(), 9);
        assert_eq!(changed.text(), "NEW");
    }

    #[test]
    fn negative_geometry_is_kept() {
        let spec = LabelSpec::builder().distance(-3).thickness(-8).build();
        assert_eq!(spec.distance(), -3);
        assert_eq!(spec.thickness(), -8);
    }

    #[test]
    fn unset_text_size_resolves_to_default() {
        assert!((TextSize::Unset.resolve() - DEFAULT_TEXT_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn text_size_rejects_non_positive_and_non_finite() {
        assert_eq!(TextSize::px(0.0), Err(LabelError::InvalidTextSize(0.0)));
        assert!(TextSize::px(-1.0).is_err());
        assert!(TextSize::px(f64::INFINITY).is_err());
        assert!(TextSize::px(f64::NAN).is_err());
    }

    #[test]
    fn image_background_converts() {
        let bg: Background = ImageBackground::new("ribbon.png", 64, 16).into();
        assert!(matches!(bg, Background::Image(ref img) if img.key == "ribbon.png"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_partial_json() {
        let spec: LabelSpec = serde_json::from_str(
            r#"{ "distance": 12, "corner": "bottom_right", "text": "HOT",
                 "text_size": { "px": 18.0 },
                 "background": { "color": { "r": 255, "g": 0, "b": 0, "a": 255 } } }"#,
        )
        .unwrap();
        assert_eq!(spec.distance(), 12);
        assert_eq!(spec.thickness(), 0);
        assert_eq!(spec.corner(), Corner::BottomRight);
        assert_eq!(spec.text_size(), TextSize::Px(18.0));
        assert_eq!(spec.background(), &Background::Color(Rgba::rgb(255, 0, 0)));
    }
}
