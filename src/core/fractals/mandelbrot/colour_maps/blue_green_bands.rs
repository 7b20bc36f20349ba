use crate::core::data::colour::RawColour;
use crate::core::fractals::mandelbrot::colour_map::{CHANNEL_MAX, MandelbrotColourMap};
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

const FIRST_BOUNDARY: f64 = 0.33;
const SECOND_BOUNDARY: f64 = 0.66;

/// Three bands: black to blue, blue to cyan, cyan to green.
#[derive(Debug)]
pub struct MandelbrotBlueGreenBands {
    max_iterations: u32,
    brightness: f64,
}

impl MandelbrotColourMap for MandelbrotBlueGreenBands {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::BlueGreen
    }

    fn map(&self, smoothed_count: f64) -> RawColour {
        let max = self.max_iterations as f64;
        let first = FIRST_BOUNDARY * max;
        let second = SECOND_BOUNDARY * max;
        let full = CHANNEL_MAX * self.brightness;
        let level = |start: f64, end: f64| (smoothed_count - start) / (end - start) * full;

        if smoothed_count < first {
            RawColour { r: 0.0, g: 0.0, b: level(0.0, first) }
        } else if smoothed_count < second {
            RawColour { r: 0.0, g: level(first, second), b: full }
        } else {
            RawColour { r: 0.0, g: full, b: full - level(second, max) }
        }
    }
}

impl MandelbrotBlueGreenBands {
    #[must_use]
    pub fn new(max_iterations: u32, brightness: f64) -> Self {
        Self { max_iterations, brightness }
    }
}
