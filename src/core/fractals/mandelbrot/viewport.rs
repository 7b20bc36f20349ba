use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, raster_to_complex_coords,
};

/// Half extents, in pixels, of the rectangle a plain click zooms into.
pub const ZOOM_HALF_WIDTH_PX: f64 = 200.0;
pub const ZOOM_HALF_HEIGHT_PX: f64 = 100.0;

/// Fractions of the current view width added on each side by a zoom out.
pub const ZOOM_OUT_HORIZONTAL_FACTOR: f64 = 0.6;
pub const ZOOM_OUT_VERTICAL_FACTOR: f64 = 0.3;

pub(crate) fn default_region() -> ComplexRect {
    ComplexRect::from_bounds(-3.0, 2.0, -1.25, 1.25)
        .expect("default mandelbrot region is valid")
}

/// The visible rectangle of the complex plane and the gestures that move it.
///
/// Every gesture either installs a valid rectangle or fails with
/// [`ComplexRectError::DegenerateViewport`] and leaves the view unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            region: default_region(),
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(region: ComplexRect) -> Self {
        Self { region }
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point, canvas: PixelRect) -> Complex {
        pixel_to_complex_coords(pixel, canvas, self.region)
    }

    /// Zooms into the 400x200 pixel rectangle centred on `centre`.
    ///
    /// The rectangle may reach past the canvas; its corners are extrapolated.
    pub fn zoom_to_rectangle(
        &mut self,
        centre: Point,
        canvas: PixelRect,
    ) -> Result<(), ComplexRectError> {
        // offsets are applied in f64 so clicks near the i32 limits cannot overflow
        let (x, y) = (centre.x as f64, centre.y as f64);
        let corners = [
            (x - ZOOM_HALF_WIDTH_PX, y + ZOOM_HALF_HEIGHT_PX),
            (x + ZOOM_HALF_WIDTH_PX, y + ZOOM_HALF_HEIGHT_PX),
            (x - ZOOM_HALF_WIDTH_PX, y - ZOOM_HALF_HEIGHT_PX),
            (x + ZOOM_HALF_WIDTH_PX, y - ZOOM_HALF_HEIGHT_PX),
        ]
        .map(|(x, y)| raster_to_complex_coords(x, y, canvas, self.region));

        self.region = ComplexRect::bounding_box(&corners)?;
        Ok(())
    }

    /// Widens the view by 0.6 of its width on the left and right, and by 0.3
    /// of its width on the top and bottom.
    pub fn zoom_out(&mut self) -> Result<(), ComplexRectError> {
        let width = self.region.width();

        self.region = self.region.expanded(
            width * ZOOM_OUT_HORIZONTAL_FACTOR,
            width * ZOOM_OUT_VERTICAL_FACTOR,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_default_region() {
        let region = Viewport::default().region();

        assert_eq!(region.min_x(), -3.0);
        assert_eq!(region.max_x(), 2.0);
        assert_eq!(region.min_y(), -1.25);
        assert_eq!(region.max_y(), 1.25);
    }

    #[test]
    fn test_canvas_corners_map_to_view_corners() {
        let viewport = Viewport::default();
        let canvas = PixelRect::from_size(100, 50).unwrap();
        let step_x = viewport.region().width() / 100.0;
        let step_y = viewport.region().height() / 50.0;

        let top_left = viewport.pixel_to_complex(Point { x: 0, y: 0 }, canvas);
        let bottom_right = viewport.pixel_to_complex(Point { x: 99, y: 49 }, canvas);

        assert_eq!(top_left, Complex { real: -3.0, imag: 1.25 });
        assert_close(bottom_right.real, 2.0 - step_x);
        assert_close(bottom_right.imag, -1.25 + step_y);
    }

    #[test]
    fn test_zoom_to_rectangle_centred_on_click() {
        let mut viewport = Viewport::default();
        let canvas = PixelRect::from_size(1000, 500).unwrap();

        viewport.zoom_to_rectangle(Point { x: 500, y: 250 }, canvas).unwrap();

        let region = viewport.region();
        assert_close(region.min_x(), -1.5);
        assert_close(region.max_x(), 0.5);
        assert_close(region.min_y(), -0.5);
        assert_close(region.max_y(), 0.5);
    }

    #[test]
    fn test_zoom_to_rectangle_near_edge_extrapolates() {
        let mut viewport = Viewport::default();
        let canvas = PixelRect::from_size(1000, 500).unwrap();

        viewport.zoom_to_rectangle(Point { x: 0, y: 0 }, canvas).unwrap();

        let region = viewport.region();
        assert_close(region.min_x(), -4.0);
        assert_close(region.max_x(), -2.0);
        assert_close(region.min_y(), 0.75);
        assert_close(region.max_y(), 1.75);
    }

    #[test]
    fn test_zoom_out_expands_by_width_fractions() {
        let mut viewport = Viewport::default();

        viewport.zoom_out().unwrap();

        let region = viewport.region();
        assert_eq!(region.min_x(), -6.0);
        assert_eq!(region.max_x(), 5.0);
        assert_eq!(region.min_y(), -2.75);
        assert_eq!(region.max_y(), 2.75);
    }

    #[test]
    fn test_zoom_out_overflow_is_degenerate_and_keeps_view() {
        // one more zoom out pushes the width past f64::MAX
        let wide = ComplexRect::from_bounds(-6e307, 6e307, -1.0, 1.0).unwrap();
        let mut viewport = Viewport::new(wide);

        let result = viewport.zoom_out();

        assert!(matches!(result, Err(ComplexRectError::DegenerateViewport { .. })));
        assert_eq!(viewport.region(), wide);
    }

    #[test]
    fn test_zoom_in_beyond_precision_is_degenerate_and_keeps_view() {
        let max = 1.0 + 4.0 * f64::EPSILON;
        let tiny = ComplexRect::from_bounds(1.0, max, 1.0, max).unwrap();
        let mut viewport = Viewport::new(tiny);
        let canvas = PixelRect::from_size(1_000_000, 1_000_000).unwrap();

        let result = viewport.zoom_to_rectangle(Point { x: 500_000, y: 500_000 }, canvas);

        assert!(matches!(result, Err(ComplexRectError::DegenerateViewport { .. })));
        assert_eq!(viewport.region(), tiny);
    }

    #[test]
    fn test_zoom_to_rectangle_near_i32_limits() {
        let canvas = PixelRect::from_size(1000, 500).unwrap();

        for centre in [
            Point { x: i32::MAX - 50, y: 10 },
            Point { x: i32::MIN + 50, y: i32::MAX - 10 },
        ] {
            let mut viewport = Viewport::default();

            viewport.zoom_to_rectangle(centre, canvas).unwrap();

            let region = viewport.region();
            let expected_min_x = (centre.x as f64 - 200.0) / 1000.0 * 5.0 - 3.0;
            assert!((region.min_x() - expected_min_x).abs() < 1e-3);
            assert!((region.width() - 2.0).abs() < 1e-6);
            assert!((region.height() - 1.0).abs() < 1e-6);
        }
    }
}
