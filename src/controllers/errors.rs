use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::fractals::mandelbrot::errors::{MandelbrotError, ParameterError};

/// Everything a session operation can reject. Session state is left as it
/// was whenever one of these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Parameter(ParameterError),
    Viewport(ComplexRectError),
    Canvas(PixelRectError),
    Engine(MandelbrotError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(err) => write!(f, "{}", err),
            Self::Viewport(err) => write!(f, "{}", err),
            Self::Canvas(err) => write!(f, "invalid canvas: {}", err),
            Self::Engine(err) => write!(f, "invalid engine parameters: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parameter(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Canvas(err) => Some(err),
            Self::Engine(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ParameterError> for SessionError {
    fn from(err: ParameterError) -> Self {
        Self::Parameter(err)
    }
}

impl From<ComplexRectError> for SessionError {
    fn from(err: ComplexRectError) -> Self {
        Self::Viewport(err)
    }
}

impl From<PixelRectError> for SessionError {
    fn from(err: PixelRectError) -> Self {
        Self::Canvas(err)
    }
}

impl From<MandelbrotError> for SessionError {
    fn from(err: MandelbrotError) -> Self {
        Self::Engine(err)
    }
}

impl From<PixelBufferError> for SessionError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<Infallible> for SessionError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
