use std::convert::Infallible;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::iteration_result::IterationResult;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Extra iterations run after escape to settle the smoothed count.
pub const SMOOTHING_ITERATIONS: u32 = 4;

/// Escape-time engine for `z -> z² + c`, started at `z = c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTime {
    max_iterations: u32,
    escape_threshold: f64,
}

impl EscapeTime {
    pub fn new(max_iterations: u32, escape_threshold: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !escape_threshold.is_finite() || escape_threshold <= 0.0 {
            return Err(MandelbrotError::InvalidEscapeThreshold { escape_threshold });
        }

        Ok(Self {
            max_iterations,
            escape_threshold,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_threshold(&self) -> f64 {
        self.escape_threshold
    }

    /// Iterates `c` and reports whether it escaped, with a smoothed count of
    /// `count - log2(log2(mag))`.
    ///
    /// The starting magnitude is the true modulus of `c`; every later one is
    /// the squared modulus of `z`. Both are compared against the same
    /// threshold.
    #[must_use]
    pub fn iterate(&self, c: Complex) -> IterationResult {
        let mut z = c;
        let mut magnitude = c.magnitude();
        let mut count: u32 = 0;

        while magnitude < self.escape_threshold && count < self.max_iterations {
            z = z * z + c;
            magnitude = z.magnitude_squared();
            count += 1;
        }

        if magnitude >= self.escape_threshold {
            for _ in 0..SMOOTHING_ITERATIONS {
                z = z * z + c;
                magnitude = z.magnitude_squared();
                count += 1;
            }

            IterationResult::Escaped {
                smoothed_count: smoothed_count(count, magnitude),
            }
        } else {
            // also covers a NaN magnitude, which can only come from a NaN `c`
            IterationResult::Bounded {
                smoothed_count: smoothed_count(count, magnitude),
            }
        }
    }
}

fn smoothed_count(count: u32, magnitude: f64) -> f64 {
    count as f64 - magnitude.log2().log2()
}

/// Per-pixel Mandelbrot evaluation over a fixed viewport and canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    region: ComplexRect,
    escape_time: EscapeTime,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = IterationResult;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.region);

        Ok(self.escape_time.iterate(c))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        region: ComplexRect,
        max_iterations: u32,
        escape_threshold: f64,
    ) -> Result<Self, MandelbrotError> {
        let escape_time = EscapeTime::new(max_iterations, escape_threshold)?;

        Ok(Self { pixel_rect, region, escape_time })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }
}
