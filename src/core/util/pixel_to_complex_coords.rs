use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Linearly maps a raster position onto the complex plane.
///
/// The horizontal source range `[0, width]` maps onto `[min_x, max_x]`. The
/// vertical source range `[0, height]` is flipped to `[-height, -0]` before
/// interpolating onto `[min_y, max_y]`, so row 0 lands on `max_y`.
///
/// Positions outside `pixel_rect` are extrapolated with the same formula.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Complex {
    raster_to_complex_coords(
        pixel_position.x as f64,
        pixel_position.y as f64,
        pixel_rect,
        complex_rect,
    )
}

/// [`pixel_to_complex_coords`] for positions that need not fit in an `i32`,
/// such as gesture geometry offset from a click.
#[must_use]
pub fn raster_to_complex_coords(
    x: f64,
    y: f64,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Complex {
    let src_x = x - pixel_rect.top_left().x as f64;
    let src_y = y - pixel_rect.top_left().y as f64;
    let src_min_x = 0.0;
    let src_max_x = pixel_rect.width() as f64;
    let src_min_y = -(pixel_rect.height() as f64);
    let src_max_y = -0.0;

    let real = (src_x - src_min_x) / (src_max_x - src_min_x) * complex_rect.width()
        + complex_rect.min_x();
    let imag = (-src_y - src_min_y) / (src_max_y - src_min_y) * complex_rect.height()
        + complex_rect.min_y();

    Complex { real, imag }
}
