mod controllers;
mod core;

pub use crate::controllers::errors::SessionError;
pub use crate::controllers::interactive::InteractiveController;
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::data::render_request::RenderRequest;
pub use crate::controllers::interactive::errors::RenderError;
pub use crate::controllers::interactive::events::render::RenderEvent;
pub use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
pub use crate::controllers::session::MandelbrotSession;

pub use crate::core::data::colour::{Colour, RawColour};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::{EscapeTime, MandelbrotAlgorithm};
pub use crate::core::fractals::mandelbrot::colour_maps::kinds::{
    MandelbrotColourMapKind, UnknownColourMapError,
};
pub use crate::core::fractals::mandelbrot::errors::{
    MandelbrotError, ParameterError, ParameterField,
};
pub use crate::core::fractals::mandelbrot::iteration_result::IterationResult;
pub use crate::core::fractals::mandelbrot::palette::{
    InteriorColour, Palette, UnknownInteriorColourError,
};
pub use crate::core::fractals::mandelbrot::params::{ParameterEdits, RenderParameters};
pub use crate::core::fractals::mandelbrot::viewport::Viewport;
