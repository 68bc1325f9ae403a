use std::fmt;
use std::str::FromStr;

use crate::error::LabelError;
use crate::math::PixelPoint;

use super::ContainerSize;

/// The container corner that hosts the ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Corner {
    #[default]
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// All corners in ordinal order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Resolves an ordinal to a corner.
    ///
    /// Values outside `0..=3` fall back to [`Corner::TopLeft`].
    #[must_use]
    pub fn from_ordinal(ordinal: i64) -> Self {
        match ordinal {
            1 => Self::TopRight,
            2 => Self::BottomRight,
            3 => Self::BottomLeft,
            _ => Self::TopLeft,
        }
    }

    /// Returns the ordinal of this corner.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomRight => 2,
            Self::BottomLeft => 3,
        }
    }

    /// Returns the sign and rotation convention for this corner.
    #[must_use]
    pub fn convention(self) -> CornerConvention {
        let (horizontal_sign, vertical_sign, rotation_degrees) = match self {
            Self::TopLeft => (1, 1, -45.0),
            Self::TopRight => (-1, 1, 45.0),
            Self::BottomRight => (-1, -1, -45.0),
            Self::BottomLeft => (1, -1, 45.0),
        };
        CornerConvention {
            corner: self,
            horizontal_sign,
            vertical_sign,
            rotation_degrees,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomRight => "bottom_right",
            Self::BottomLeft => "bottom_left",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Corner {
    type Err = LabelError;

    /// Parses `top_left`, `TOP-LEFT`, `TopLeft` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(*c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "topleft" => Ok(Self::TopLeft),
            "topright" => Ok(Self::TopRight),
            "bottomright" => Ok(Self::BottomRight),
            "bottomleft" => Ok(Self::BottomLeft),
            _ => Err(LabelError::UnknownCorner(s.to_owned())),
        }
    }
}

/// Direction signs and band rotation associated with a corner.
///
/// Signs point from the corner vertex into the container: `+1` moves right
/// (horizontal) or down (vertical).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerConvention {
    /// The corner this convention describes.
    pub corner: Corner,
    /// `+1` when the vertex is on the left edge, `-1` on the right edge.
    pub horizontal_sign: i32,
    /// `+1` when the vertex is on the top edge, `-1` on the bottom edge.
    pub vertical_sign: i32,
    /// Clockwise rotation of the band about its center, in degrees.
    pub rotation_degrees: f64,
}

impl CornerConvention {
    /// Returns the corner vertex within a container of the given size.
    #[must_use]
    pub fn anchor(&self, size: ContainerSize) -> PixelPoint {
        let x = if self.horizontal_sign > 0 { 0 } else { size.width };
        let y = if self.vertical_sign > 0 { 0 } else { size.height };
        PixelPoint::new(x, y)
    }

    /// Moves `dx` pixels along the horizontal edge and `dy` along the vertical
    /// edge, starting at the anchor.
    #[must_use]
    pub fn offset_from_anchor(&self, size: ContainerSize, dx: i32, dy: i32) -> PixelPoint {
        let anchor = self.anchor(size);
        PixelPoint::new(
            anchor.x.saturating_add(self.horizontal_sign.saturating_mul(dx)),
            anchor.y.saturating_add(self.vertical_sign.saturating_mul(dy)),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_round_trip() {
        for corner in Corner::ALL {
            assert_eq!(Corner::from_ordinal(i64::from(corner.ordinal())), corner);
        }
    }

    #[test]
    fn out_of_range_ordinal_falls_back_to_top_left() {
        assert_eq!(Corner::from_ordinal(4), Corner::TopLeft);
        assert_eq!(Corner::from_ordinal(-1), Corner::TopLeft);
        assert_eq!(Corner::from_ordinal(i64::MAX), Corner::TopLeft);
    }

    #[test]
    fn anchors_sit_on_container_vertices() {
        let size = ContainerSize::new(300, 200);
        let anchors: Vec<_> = Corner::ALL
            .iter()
            .map(|c| c.convention().anchor(size))
            .collect();
        assert_eq!(
            anchors,
            vec![
                PixelPoint::new(0, 0),
                PixelPoint::new(300, 0),
                PixelPoint::new(300, 200),
                PixelPoint::new(0, 200),
            ]
        );
    }

    #[test]
    fn rotation_follows_diagonal_family() {
        assert!((Corner::TopLeft.convention().rotation_degrees + 45.0).abs() < f64::EPSILON);
        assert!((Corner::TopRight.convention().rotation_degrees - 45.0).abs() < f64::EPSILON);
        assert!((Corner::BottomRight.convention().rotation_degrees + 45.0).abs() < f64::EPSILON);
        assert!((Corner::BottomLeft.convention().rotation_degrees - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_moves_into_the_container() {
        let size = ContainerSize::new(100, 80);
        let p = Corner::BottomRight.convention().offset_from_anchor(size, 10, 5);
        assert_eq!(p, PixelPoint::new(90, 75));
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!("top_left".parse::<Corner>().unwrap(), Corner::TopLeft);
        assert_eq!("TOP_RIGHT".parse::<Corner>().unwrap(), Corner::TopRight);
        assert_eq!("bottom-right".parse::<Corner>().unwrap(), Corner::BottomRight);
        assert_eq!("BottomLeft".parse::<Corner>().unwrap(), Corner::BottomLeft);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "middle".parse::<Corner>().unwrap_err();
        assert_eq!(err, LabelError::UnknownCorner("middle".to_owned()));
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(Corner::BottomRight.to_string(), "bottom_right");
    }
}
