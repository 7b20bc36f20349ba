use crate::core::data::colour::RawColour;
use crate::core::fractals::mandelbrot::colour_map::{CHANNEL_MAX, MandelbrotColourMap};
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

const BOUNDARY: f64 = 0.5;

/// Two bands: yellow to red, then red to black.
#[derive(Debug)]
pub struct MandelbrotYellowRedBands {
    max_iterations: u32,
    brightness: f64,
}

impl MandelbrotColourMap for MandelbrotYellowRedBands {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::YellowRed
    }

    fn map(&self, smoothed_count: f64) -> RawColour {
        let max = self.max_iterations as f64;
        let boundary = BOUNDARY * max;
        let full = CHANNEL_MAX * self.brightness;

        if smoothed_count < boundary {
            let level = smoothed_count / boundary * full;
            RawColour { r: full, g: full - level, b: 0.0 }
        } else {
            let level = (smoothed_count - boundary) / (max - boundary) * full;
            RawColour { r: full - level, g: 0.0, b: 0.0 }
        }
    }
}

impl MandelbrotYellowRedBands {
    #[must_use]
    pub fn new(max_iterations: u32, brightness: f64) -> Self {
        Self { max_iterations, brightness }
    }
}
