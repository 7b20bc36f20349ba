use crate::core::data::colour::RawColour;
use crate::core::fractals::mandelbrot::colour_map::{CHANNEL_MAX, MandelbrotColourMap};
use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;

/// One output channel: `ramp * level + constant * 255 * brightness`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Channel {
    ramp: f64,
    constant: f64,
}

const RAMP: Channel = Channel { ramp: 1.0, constant: 0.0 };
const OFF: Channel = Channel { ramp: 0.0, constant: 0.0 };
const FULL: Channel = Channel { ramp: 0.0, constant: 1.0 };

const fn scaled(ramp: f64) -> Channel {
    Channel { ramp, constant: 0.0 }
}

/// Single-band scheme: one linear ramp from 0 at count 0 to full intensity
/// at `max_iterations`.
#[derive(Debug)]
pub struct MandelbrotLinearRamp {
    kind: MandelbrotColourMapKind,
    channels: [Channel; 3],
    max_iterations: u32,
    brightness: f64,
}

impl MandelbrotColourMap for MandelbrotLinearRamp {
    fn kind(&self) -> MandelbrotColourMapKind {
        self.kind
    }

    fn map(&self, smoothed_count: f64) -> RawColour {
        let level = smoothed_count / self.max_iterations as f64 * CHANNEL_MAX * self.brightness;
        let full = CHANNEL_MAX * self.brightness;
        let [r, g, b] = self
            .channels
            .map(|channel| channel.ramp * level + channel.constant * full);

        RawColour { r, g, b }
    }
}

impl MandelbrotLinearRamp {
    /// `None` for the banded kinds, which have their own maps.
    #[must_use]
    pub fn new(
        kind: MandelbrotColourMapKind,
        max_iterations: u32,
        brightness: f64,
    ) -> Option<Self> {
        let channels = match kind {
            MandelbrotColourMapKind::Grey => [RAMP, RAMP, RAMP],
            MandelbrotColourMapKind::Yellow => [RAMP, RAMP, OFF],
            MandelbrotColourMapKind::Red => [RAMP, OFF, OFF],
            MandelbrotColourMapKind::Green => [OFF, RAMP, OFF],
            MandelbrotColourMapKind::Pink => [RAMP, scaled(0.75), scaled(0.8)],
            MandelbrotColourMapKind::BlueWhite => [RAMP, RAMP, FULL],
            MandelbrotColourMapKind::BlueGreen | MandelbrotColourMapKind::YellowRed => return None,
        };

        Some(Self {
            kind,
            channels,
            max_iterations,
            brightness,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(kind: MandelbrotColourMapKind) -> MandelbrotLinearRamp {
        MandelbrotLinearRamp::new(kind, 50, 1.0).unwrap()
    }

    #[test]
    fn test_grey_halfway_is_unclamped_mid_grey() {
        let colour = ramp(MandelbrotColourMapKind::Grey).map(25.0);

        assert_eq!(colour, RawColour { r: 127.5, g: 127.5, b: 127.5 });
    }

    #[test]
    fn test_grey_starts_black_and_ends_white() {
        let map = ramp(MandelbrotColourMapKind::Grey);

        assert_eq!(map.map(0.0), RawColour::BLACK);
        assert_eq!(map.map(50.0), RawColour::WHITE);
    }

    #[test]
    fn test_counts_beyond_budget_exceed_255() {
        let colour = ramp(MandelbrotColourMapKind::Red).map(100.0);

        assert_eq!(colour, RawColour { r: 510.0, g: 0.0, b: 0.0 });
    }

    #[test]
    fn test_negative_counts_go_negative() {
        let colour = ramp(MandelbrotColourMapKind::Green).map(-5.0);

        assert_eq!(colour, RawColour { r: 0.0, g: -25.5, b: 0.0 });
    }

    #[test]
    fn test_brightness_scales_every_channel() {
        let map = MandelbrotLinearRamp::new(MandelbrotColourMapKind::BlueWhite, 50, 2.0).unwrap();

        let colour = map.map(25.0);

        assert_eq!(colour, RawColour { r: 255.0, g: 255.0, b: 510.0 });
    }

    #[test]
    fn test_single_band_channel_layouts() {
        assert_eq!(
            ramp(MandelbrotColourMapKind::Yellow).map(50.0),
            RawColour { r: 255.0, g: 255.0, b: 0.0 }
        );
        assert_eq!(
            ramp(MandelbrotColourMapKind::Pink).map(50.0),
            RawColour { r: 255.0, g: 191.25, b: 204.0 }
        );
        assert_eq!(
            ramp(MandelbrotColourMapKind::BlueWhite).map(0.0),
            RawColour { r: 0.0, g: 0.0, b: 255.0 }
        );
    }

    #[test]
    fn test_banded_kinds_are_not_linear_ramps() {
        assert!(MandelbrotLinearRamp::new(MandelbrotColourMapKind::BlueGreen, 50, 1.0).is_none());
        assert!(MandelbrotLinearRamp::new(MandelbrotColourMapKind::YellowRed, 50, 1.0).is_none());
    }
}
