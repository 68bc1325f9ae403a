use std::f64::consts::SQRT_2;

use super::intersect_offset;

/// Bounding box of a measured run of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub width: f64,
    pub height: f64,
}

impl TextBounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Displacement applied to text drawn along the bisector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextOffsets {
    /// Offset from the path start, measured along the path.
    pub along_path: f64,
    /// Baseline offset from the path, measured across it.
    pub perpendicular: f64,
}

/// Computes the offsets that center text inside the ribbon band.
#[derive(Debug)]
pub struct ComputeTextOffsets {
    bounds: TextBounds,
    distance: i32,
    thickness: i32,
}

impl ComputeTextOffsets {
    #[must_use]
    pub fn new(bounds: TextBounds, distance: i32, thickness: i32) -> Self {
        Self {
            bounds,
            distance,
            thickness,
        }
    }

    /// Executes the computation.
    ///
    /// The along-path offset centers the text on the midpoint of the bisector.
    /// The perpendicular offset is half the text height while the gap to the
    /// vertex is at least the band thickness; for thicker bands the baseline
    /// is pushed further across the path, reaching the full text height as
    /// the gap shrinks to zero.
    #[must_use]
    pub fn execute(&self) -> TextOffsets {
        let intersect = f64::from(intersect_offset(self.distance, self.thickness));
        let along_path = intersect / SQRT_2 - self.bounds.width / 2.0;

        let perpendicular = if self.distance >= self.thickness || self.thickness == 0 {
            self.bounds.height * 0.5
        } else {
            let t = f64::from(self.thickness);
            let d = f64::from(self.distance);
            self.bounds.height * ((t - d) / t * 0.5 + 0.5)
        };

        let offsets = TextOffsets {
            along_path,
            perpendicular,
        };
        tracing::debug!(
            distance = self.distance,
            thickness = self.thickness,
            along_path,
            perpendicular,
            "computed text offsets"
        );
        offsets
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn offsets(w: f64, h: f64, d: i32, t: i32) -> TextOffsets {
        ComputeTextOffsets::new(TextBounds::new(w, h), d, t).execute()
    }

    #[test]
    fn along_path_centers_text_on_bisector() {
        let o = offsets(30.0, 8.0, 20, 10);
        assert_relative_eq!(o.along_path, 35.0 / SQRT_2 - 15.0, epsilon = 1e-12);
    }

    #[test]
    fn thin_band_uses_half_height() {
        let o = offsets(30.0, 8.0, 20, 10);
        assert_relative_eq!(o.perpendicular, 4.0);
    }

    #[test]
    fn thick_band_pushes_baseline_across() {
        // (20 - 5) / 20 · 0.5 + 0.5 = 0.875
        let o = offsets(30.0, 8.0, 5, 20);
        assert_relative_eq!(o.perpendicular, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_gap_uses_full_height() {
        let o = offsets(30.0, 8.0, 0, 20);
        assert_relative_eq!(o.perpendicular, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn branches_agree_at_boundary() {
        let at = offsets(30.0, 8.0, 12, 12);
        assert_relative_eq!(at.perpendicular, 4.0);
        // Approaching from the thick side converges on the same value.
        let near = offsets(30.0, 8.0, 999, 1000);
        assert_relative_eq!(near.perpendicular, 4.0, epsilon = 0.01);
    }

    #[test]
    fn zero_thickness_does_not_divide_by_zero() {
        let o = offsets(30.0, 8.0, -5, 0);
        assert!(o.perpendicular.is_finite());
        assert_relative_eq!(o.perpendicular, 4.0);
    }

    #[test]
    fn long_text_starts_before_path() {
        let o = offsets(200.0, 8.0, 10, 10);
        assert!(o.along_path < 0.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = offsets(31.5, 9.25, 7, 13);
        let b = offsets(31.5, 9.25, 7, 13);
        assert_eq!(a.along_path.to_bits(), b.along_path.to_bits());
        assert_eq!(a.perpendicular.to_bits(), b.perpendicular.to_bits());
    }
}
