/// Shape drawn at the open ends of a stroked segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineCap {
    /// Ends flush with the endpoint.
    Butt,
    /// Ends extended by half the stroke width past the endpoint.
    #[default]
    Square,
    /// Ends capped with a half circle.
    Round,
}

/// Shape drawn where two stroked segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Style parameters for a stroked ribbon band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeStyle {
    width: f64,
    cap: LineCap,
    join: LineJoin,
}

impl StrokeStyle {
    /// Creates a new stroke style with square caps and round joins.
    ///
    /// Any width is accepted; a non-positive width draws nothing.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }

    /// Replaces the end cap.
    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Replaces the join.
    #[must_use]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the stroke width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    #[must_use]
    pub fn cap(&self) -> LineCap {
        self.cap
    }

    #[must_use]
    pub fn join(&self) -> LineJoin {
        self.join
    }

    /// Returns whether the stroke covers any area.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_square_caps_and_round_joins() {
        let style = StrokeStyle::new(2.0);
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        assert!((style.half_width() - 1.0).abs() < f64::EPSILON);
        assert_eq!(style.cap(), LineCap::Square);
        assert_eq!(style.join(), LineJoin::Round);
    }

    #[test]
    fn zero_width_is_accepted_but_invisible() {
        let style = StrokeStyle::new(0.0);
        assert!(!style.is_visible());
    }

    #[test]
    fn negative_width_is_accepted_but_invisible() {
        let style = StrokeStyle::new(-1.0);
        assert!(!style.is_visible());
    }

    #[test]
    fn builders_replace_cap_and_join() {
        let style = StrokeStyle::new(4.0)
            .with_cap(LineCap::Butt)
            .with_join(LineJoin::Bevel);
        assert_eq!(style.cap(), LineCap::Butt);
        assert_eq!(style.join(), LineJoin::Bevel);
    }
}
