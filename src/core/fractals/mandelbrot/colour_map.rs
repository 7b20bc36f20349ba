use std::fmt::Debug;

use crate::core::data::colour::RawColour;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

/// Full intensity of one channel before brightness scaling.
pub const CHANNEL_MAX: f64 = 255.0;

/// Colour scheme for escaped points, keyed on the smoothed iteration count.
///
/// Implementations are pure and do not clamp: counts beyond the iteration
/// budget, or a large brightness, push channels past 255.
pub trait MandelbrotColourMap: Debug + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKind;

    fn map(&self, smoothed_count: f64) -> RawColour;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
