/// A displayable 8-bit RGB colour, as written into the raster.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Unclamped colour produced by the palettes.
///
/// Channels may be negative or exceed 255; they are only saturated when the
/// colour is quantised with [`RawColour::to_colour`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RawColour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RawColour {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Self = Self { r: 255.0, g: 255.0, b: 255.0 };

    /// Quantises like a canvas `Uint8ClampedArray` store: round half to
    /// even, then clamp into `0..=255`. NaN becomes 0.
    #[must_use]
    pub fn to_colour(self) -> Colour {
        Colour {
            r: channel_to_byte(self.r),
            g: channel_to_byte(self.g),
            b: channel_to_byte(self.b),
        }
    }
}

fn channel_to_byte(value: f64) -> u8 {
    // `as` maps NaN to 0
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
