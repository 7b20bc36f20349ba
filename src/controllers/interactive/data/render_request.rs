use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::palette::Palette;

/// Snapshot of everything one render needs, taken from a session.
///
/// Later session edits never reach a request that was already built.
#[derive(Debug)]
pub struct RenderRequest {
    algorithm: MandelbrotAlgorithm,
    palette: Palette,
}

impl RenderRequest {
    #[must_use]
    pub fn new(algorithm: MandelbrotAlgorithm, palette: Palette) -> Self {
        Self { algorithm, palette }
    }

    #[must_use]
    pub fn algorithm(&self) -> &MandelbrotAlgorithm {
        &self.algorithm
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.algorithm.pixel_rect()
    }
}
