use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::{
    blue_green_bands::MandelbrotBlueGreenBands, kinds::MandelbrotColourMapKind,
    linear_ramp::MandelbrotLinearRamp, yellow_red_bands::MandelbrotYellowRedBands,
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKind,
    max_iterations: u32,
    brightness: f64,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKind::Grey
        | MandelbrotColourMapKind::Yellow
        | MandelbrotColourMapKind::Red
        | MandelbrotColourMapKind::Green
        | MandelbrotColourMapKind::Pink
        | MandelbrotColourMapKind::BlueWhite => {
            match MandelbrotLinearRamp::new(kind, max_iterations, brightness) {
                Some(ramp) => Box::new(ramp),
                None => unreachable!("{} is a single-band kind", kind),
            }
        }
        MandelbrotColourMapKind::BlueGreen => {
            Box::new(MandelbrotBlueGreenBands::new(max_iterations, brightness))
        }
        MandelbrotColourMapKind::YellowRed => {
            Box::new(MandelbrotYellowRedBands::new(max_iterations, brightness))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::RawColour;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in MandelbrotColourMapKind::ALL {
            let map = mandelbrot_colour_map_factory(kind, 50, 1.0);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in MandelbrotColourMapKind::ALL {
            let map = mandelbrot_colour_map_factory(kind, 50, 1.0);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = MandelbrotColourMapKind::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn banded_kinds_get_banded_maps() {
        let blue_green =
            mandelbrot_colour_map_factory(MandelbrotColourMapKind::BlueGreen, 100, 1.0);
        let yellow_red =
            mandelbrot_colour_map_factory(MandelbrotColourMapKind::YellowRed, 100, 1.0);

        assert_eq!(blue_green.map(33.0), RawColour { r: 0.0, g: 0.0, b: 255.0 });
        assert_eq!(yellow_red.map(0.0), RawColour { r: 255.0, g: 255.0, b: 0.0 });
    }

    #[test]
    fn single_band_kinds_get_linear_ramps() {
        for &kind in MandelbrotColourMapKind::ALL {
            let is_banded = matches!(
                kind,
                MandelbrotColourMapKind::BlueGreen | MandelbrotColourMapKind::YellowRed
            );
            let map = mandelbrot_colour_map_factory(kind, 50, 1.0);

            assert_eq!(MandelbrotLinearRamp::new(kind, 50, 1.0).is_some(), !is_banded);
            assert_eq!(map.kind(), kind);
        }
    }
}
