use opencv::{
    core::{Mat, Point, Rect, Scalar, Size},
    imgproc,
};

use crate::config::Config;

/// How detected faces are outlined on the frame returned to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationStyle {
    pub enabled: bool,
    /// BGR, like the captured frame.
    pub color: Scalar,
    pub thickness: i32,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Scalar::new(0.0, 0.0, 255.0, 0.0),
            thickness: 4,
        }
    }
}

impl AnnotationStyle {
    /// Reads `[Annotation] enabled`, `color` (`b, g, r`) and `thickness`.
    #[must_use]
    pub fn from_config(cfg: &Config) -> Self {
        let defaults = Self::default();
        let color = match cfg.get_list::<f64>("Annotation", "color").as_deref() {
            Some([b, g, r]) => Scalar::new(*b, *g, *r, 0.0),
            _ => defaults.color,
        };
        Self {
            enabled: cfg.get_bool_or("Annotation", "enabled", defaults.enabled),
            color,
            thickness: cfg
                .get_parsed_or("Annotation", "thickness", defaults.thickness)
                .max(1),
        }
    }

    /// Draws an ellipse around `face`, found on the image downscaled by
    /// `scale`, onto the full resolution `frame`.
    ///
    /// # Errors
    /// Propagates `OpenCV` drawing failures.
    pub fn draw(&self, frame: &mut Mat, face: Rect, scale: i32) -> opencv::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let center = Point::new(
            scale * (face.x + face.width / 2),
            scale * (face.y + face.height / 2),
        );
        let axes = Size::new(scale * face.width / 2, scale * face.height / 2);
        imgproc::ellipse(
            frame,
            center,
            axes,
            0.0,
            0.0,
            360.0,
            self.color,
            self.thickness,
            imgproc::LINE_8,
            0,
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use opencv::{
        core::{CV_8UC3, Vec3b},
        prelude::*,
    };

    fn black(rows: i32, cols: i32) -> Mat {
        Mat::new_rows_cols_with_default(rows, cols, CV_8UC3, Scalar::all(0.0)).unwrap()
    }

    #[test]
    fn draws_red_outline_at_scaled_position() {
        let mut frame = black(100, 100);
        AnnotationStyle::default()
            .draw(&mut frame, Rect::new(10, 10, 20, 20), 2)
            .unwrap();

        // Ellipse centered at (40, 40) with radius 20: the rightmost point is (60, 40).
        let px = *frame.at_2d::<Vec3b>(40, 60).unwrap();
        assert_eq!(px.0, [0, 0, 255]);
        let center = *frame.at_2d::<Vec3b>(40, 40).unwrap();
        assert_eq!(center.0, [0, 0, 0]);
    }

    #[test]
    fn disabled_style_leaves_frame_untouched() {
        let mut frame = black(50, 50);
        let style = AnnotationStyle {
            enabled: false,
            ..AnnotationStyle::default()
        };
        style.draw(&mut frame, Rect::new(5, 5, 20, 20), 1).unwrap();
        let sum = opencv::core::sum_elems(&frame).unwrap();
        assert!(sum.0.iter().all(|c| *c == 0.0));
    }

    #[test]
    fn config_overrides_color_and_thickness() {
        let cfg = Config::parse("[Annotation]\ncolor = 255, 0, 0\nthickness = 0\n");
        let style = AnnotationStyle::from_config(&cfg);
        assert!(style.enabled);
        assert_eq!(style.color, Scalar::new(255.0, 0.0, 0.0, 0.0));
        assert_eq!(style.thickness, 1);
    }
}
