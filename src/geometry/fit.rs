use crate::math::truncate_to_pixel;

use super::PixelRect;

/// Places an image of the given intrinsic size inside `frame`.
///
/// The image is centered unscaled when it already fits in both dimensions.
/// Otherwise it is scaled, preserving its aspect ratio, so the binding
/// dimension matches the frame exactly and the other one stays within it.
/// Images without a positive intrinsic size fill the whole frame.
#[derive(Debug)]
pub struct FitImage {
    intrinsic_width: i32,
    intrinsic_height: i32,
    frame: PixelRect,
}

impl FitImage {
    #[must_use]
    pub fn new(intrinsic_width: i32, intrinsic_height: i32, frame: PixelRect) -> Self {
        Self {
            intrinsic_width,
            intrinsic_height,
            frame,
        }
    }

    /// Executes the fit, returning the bounds the image should be drawn into.
    #[must_use]
    pub fn execute(&self) -> PixelRect {
        let (iw, ih) = (self.intrinsic_width, self.intrinsic_height);
        if iw <= 0 || ih <= 0 {
            return self.frame;
        }

        let (fw, fh) = (self.frame.width(), self.frame.height());
        if iw <= fw && ih <= fh {
            return self.centered(iw, ih);
        }

        let (iw, ih) = (f64::from(iw), f64::from(ih));
        let (fw_f, fh_f) = (f64::from(fw), f64::from(fh));

        // Cross-multiplied `iw / ih >= fw / fh`, valid for a zero-height frame.
        if iw * fh_f >= fw_f * ih {
            self.centered(fw, truncate_to_pixel(fw_f * ih / iw))
        } else {
            self.centered(truncate_to_pixel(fh_f * iw / ih), fh)
        }
    }

    fn centered(&self, width: i32, height: i32) -> PixelRect {
        let left = self.frame.center_x().saturating_sub(width / 2);
        let top = self.frame.center_y().saturating_sub(height / 2);
        PixelRect::new(
            left,
            top,
            left.saturating_add(width),
            top.saturating_add(height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> PixelRect {
        // 100 × 10 centered at (50, 50).
        PixelRect::new(0, 45, 100, 55)
    }

    #[test]
    fn small_image_is_centered_unscaled() {
        let bounds = FitImage::new(40, 6, frame()).execute();
        assert_eq!(bounds, PixelRect::new(30, 47, 70, 53));
    }

    #[test]
    fn wide_image_fills_width() {
        let bounds = FitImage::new(400, 20, frame()).execute();
        assert_eq!(bounds.width(), frame().width());
        assert!(bounds.height() <= frame().height());
        assert_eq!(bounds.height(), 5);
        assert_eq!(bounds.center_x(), 50);
    }

    #[test]
    fn tall_image_fills_height() {
        let bounds = FitImage::new(60, 30, frame()).execute();
        assert_eq!(bounds.height(), frame().height());
        assert!(bounds.width() <= frame().width());
        assert_eq!(bounds.width(), 20);
    }

    #[test]
    fn aspect_ratio_is_compared_in_floating_point() {
        // Image 250 / 24 ≈ 10.42 against frame 105 / 10 = 10.5. Both truncate
        // to 10 as integers, which would pick fill-by-width.
        let wide_frame = PixelRect::new(0, 45, 105, 55);
        let bounds = FitImage::new(250, 24, wide_frame).execute();
        assert_eq!(bounds.height(), 10);
        assert_eq!(bounds.width(), 104);
    }

    #[test]
    fn image_without_intrinsic_size_fills_frame() {
        assert_eq!(FitImage::new(-1, -1, frame()).execute(), frame());
        assert_eq!(FitImage::new(0, 12, frame()).execute(), frame());
    }

    #[test]
    fn zero_height_frame_does_not_panic() {
        let flat = PixelRect::new(0, 50, 100, 50);
        let bounds = FitImage::new(40, 20, flat).execute();
        assert_eq!(bounds.height(), 0);
        assert_eq!(bounds.width(), 0);
    }
}
