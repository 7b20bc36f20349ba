use std::time::Instant;

use log::{debug, info, warn};

use crate::controllers::errors::SessionError;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::palette::{InteriorColour, Palette};
use crate::core::fractals::mandelbrot::params::{ParameterEdits, RenderParameters};
use crate::core::fractals::mandelbrot::viewport::Viewport;

/// One explorer session: the current view plus the render parameters.
///
/// Every operation either succeeds completely or returns an error and leaves
/// the session exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MandelbrotSession {
    viewport: Viewport,
    params: RenderParameters,
}

impl MandelbrotSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    /// Zooms into the 400x200 pixel rectangle centred on the click.
    pub fn plain_click(
        &mut self,
        x: i32,
        y: i32,
        canvas_width: i32,
        canvas_height: i32,
    ) -> Result<(), SessionError> {
        let canvas = PixelRect::from_size(canvas_width, canvas_height)?;

        if let Err(err) = self.viewport.zoom_to_rectangle(Point { x, y }, canvas) {
            warn!("zoom in at ({}, {}) rejected: {}", x, y, err);
            return Err(err.into());
        }

        info!("zoomed in at ({}, {}) to {:?}", x, y, self.viewport.region());
        Ok(())
    }

    /// Zooms out. The click position does not affect the result.
    pub fn modified_click(&mut self, x: i32, y: i32) -> Result<(), SessionError> {
        if let Err(err) = self.viewport.zoom_out() {
            warn!("zoom out at ({}, {}) rejected: {}", x, y, err);
            return Err(err.into());
        }

        info!("zoomed out to {:?}", self.viewport.region());
        Ok(())
    }

    /// Applies the numeric input fields. Blank fields keep their value; any
    /// invalid field rejects the whole edit.
    pub fn apply_parameter_edits(
        &mut self,
        edits: &ParameterEdits<'_>,
    ) -> Result<(), SessionError> {
        match self.params.with_edits(edits) {
            Ok(params) => {
                self.params = params;
                info!(
                    "parameters now: max iterations {}, escape threshold {}, brightness {}",
                    params.max_iterations(),
                    params.escape_threshold(),
                    params.brightness()
                );
                Ok(())
            }
            Err(err) => {
                warn!("parameter edit rejected: {}", err);
                Err(err.into())
            }
        }
    }

    /// Restores the default view and every default render parameter.
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("session reset to defaults");
    }

    pub fn select_palette(&mut self, kind: MandelbrotColourMapKind) {
        self.params.set_colour_map_kind(kind);
        info!("palette set to {}", kind);
    }

    pub fn select_interior_colour(&mut self, interior_colour: InteriorColour) {
        self.params.set_interior_colour(interior_colour);
        info!("interior colour set to {}", interior_colour);
    }

    /// Snapshots the session into a request for a `width` x `height` canvas.
    ///
    /// All validation happens here, so rendering the request cannot fail on
    /// bad input.
    pub fn render_request(&self, width: i32, height: i32) -> Result<RenderRequest, SessionError> {
        let pixel_rect = PixelRect::from_size(width, height)?;
        let algorithm = MandelbrotAlgorithm::new(
            pixel_rect,
            self.viewport.region(),
            self.params.max_iterations(),
            self.params.escape_threshold(),
        )?;

        Ok(RenderRequest::new(algorithm, Palette::from_params(&self.params)))
    }

    /// Renders the current view on the calling thread into an RGBA raster.
    pub fn render(&self, width: i32, height: i32) -> Result<PixelBuffer, SessionError> {
        let request = self.render_request(width, height)?;
        let pixel_rect = request.pixel_rect();

        let start = Instant::now();
        let results = generate_fractal(pixel_rect, request.algorithm())?;
        let interior_pixels = results.iter().filter(|result| result.is_interior()).count();
        let pixel_buffer = generate_pixel_buffer(results, request.palette(), pixel_rect)?;

        debug!(
            "rendered {}x{} in {:?} ({} interior): {}, {} iterations, threshold {}, brightness {}",
            width,
            height,
            start.elapsed(),
            interior_pixels,
            self.params.colour_map_kind(),
            self.params.max_iterations(),
            self.params.escape_threshold(),
            self.params.brightness()
        );

        Ok(pixel_buffer)
    }
}
