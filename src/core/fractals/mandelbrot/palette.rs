use std::fmt;
use std::str::FromStr;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::{Colour, RawColour};
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::iteration_result::IterationResult;
use crate::core::fractals::mandelbrot::params::RenderParameters;

/// Fixed colour for points that never escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteriorColour {
    #[default]
    Black,
    White,
}

impl InteriorColour {
    pub const ALL: &'static [Self] = &[Self::Black, Self::White];

    #[must_use]
    pub const fn raw(self) -> RawColour {
        match self {
            Self::Black => RawColour::BLACK,
            Self::White => RawColour::WHITE,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for InteriorColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInteriorColourError {
    pub id: String,
}

impl fmt::Display for UnknownInteriorColourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown interior colour {:?}", self.id)
    }
}

impl std::error::Error for UnknownInteriorColourError {}

impl FromStr for InteriorColour {
    type Err = UnknownInteriorColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|colour| colour.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownInteriorColourError { id: s.to_string() })
    }
}

/// Colours iteration results: the selected scheme for escaped points, the
/// interior colour for everything else.
#[derive(Debug)]
pub struct Palette {
    colour_map: Box<dyn MandelbrotColourMap>,
    interior_colour: InteriorColour,
}

impl Palette {
    #[must_use]
    pub fn new(
        kind: MandelbrotColourMapKind,
        interior_colour: InteriorColour,
        max_iterations: u32,
        brightness: f64,
    ) -> Self {
        Self {
            colour_map: mandelbrot_colour_map_factory(kind, max_iterations, brightness),
            interior_colour,
        }
    }

    #[must_use]
    pub fn from_params(params: &RenderParameters) -> Self {
        Self::new(
            params.colour_map_kind(),
            params.interior_colour(),
            params.max_iterations(),
            params.brightness(),
        )
    }

    #[must_use]
    pub fn kind(&self) -> MandelbrotColourMapKind {
        self.colour_map.kind()
    }

    #[must_use]
    pub fn interior_colour(&self) -> InteriorColour {
        self.interior_colour
    }

    #[must_use]
    pub fn colourize(&self, result: IterationResult) -> RawColour {
        match result {
            IterationResult::Escaped { smoothed_count } => self.colour_map.map(smoothed_count),
            IterationResult::Bounded { .. } => self.interior_colour.raw(),
        }
    }
}

impl ColourMap<IterationResult> for Palette {
    fn map(&self, value: IterationResult) -> Colour {
        self.colourize(value).to_colour()
    }

    fn display_name(&self) -> &str {
        self.colour_map.display_name()
    }
}
