use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    DegenerateViewport { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateViewport { width, height } => {
                write!(
                    f,
                    "degenerate viewport, extent must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned rectangle of the complex plane.
///
/// `min` holds the smallest real and imaginary parts, `max` the largest.
/// Both extents are always positive and finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if !is_valid_extent(width) || !is_valid_extent(height) {
            return Err(ComplexRectError::DegenerateViewport { width, height });
        }

        Ok(Self { min, max })
    }

    pub fn from_bounds(
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex {
                real: min_x,
                imag: min_y,
            },
            Complex {
                real: max_x,
                imag: max_y,
            },
        )
    }

    /// Smallest rectangle enclosing every point.
    pub fn bounding_box(points: &[Complex]) -> Result<Self, ComplexRectError> {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for point in points {
            min_x = min_x.min(point.real);
            max_x = max_x.max(point.real);
            min_y = min_y.min(point.imag);
            max_y = max_y.max(point.imag);
        }

        Self::from_bounds(min_x, max_x, min_y, max_y)
    }

    /// Grows the rectangle by `dx` on both horizontal sides and `dy` on both
    /// vertical sides.
    pub fn expanded(&self, dx: f64, dy: f64) -> Result<Self, ComplexRectError> {
        Self::from_bounds(
            self.min.real - dx,
            self.max.real + dx,
            self.min.imag - dy,
            self.max.imag + dy,
        )
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min.real
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max.real
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min.imag
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}

fn is_valid_extent(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}
