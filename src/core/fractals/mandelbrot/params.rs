use crate::core::fractals::mandelbrot::colour_maps::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::errors::{ParameterError, ParameterField};
use crate::core::fractals::mandelbrot::palette::InteriorColour;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
pub const DEFAULT_ESCAPE_THRESHOLD: f64 = 4.0;
pub const DEFAULT_BRIGHTNESS: f64 = 1.0;

/// Raw text of the three numeric input fields. Blank fields mean "keep".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ParameterEdits<'a> {
    pub max_iterations: &'a str,
    pub escape_threshold: &'a str,
    pub brightness: &'a str,
}

/// Everything besides the viewport that decides how a frame looks.
///
/// Values are only ever stored after validation, so a render can never start
/// from a bad parameter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParameters {
    max_iterations: u32,
    escape_threshold: f64,
    brightness: f64,
    colour_map_kind: MandelbrotColourMapKind,
    interior_colour: InteriorColour,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
            brightness: DEFAULT_BRIGHTNESS,
            colour_map_kind: MandelbrotColourMapKind::default(),
            interior_colour: InteriorColour::default(),
        }
    }
}

impl RenderParameters {
    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_threshold(&self) -> f64 {
        self.escape_threshold
    }

    #[must_use]
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKind {
        self.colour_map_kind
    }

    #[must_use]
    pub fn interior_colour(&self) -> InteriorColour {
        self.interior_colour
    }

    pub fn set_colour_map_kind(&mut self, kind: MandelbrotColourMapKind) {
        self.colour_map_kind = kind;
    }

    pub fn set_interior_colour(&mut self, interior_colour: InteriorColour) {
        self.interior_colour = interior_colour;
    }

    /// Returns a copy with every non-blank field of `edits` applied.
    ///
    /// All fields are parsed before anything is applied; on error `self` is
    /// untouched and the error names the first offending field.
    pub fn with_edits(&self, edits: &ParameterEdits<'_>) -> Result<Self, ParameterError> {
        let max_iterations = parse_max_iterations(edits.max_iterations)?;
        let escape_threshold =
            parse_positive_real(ParameterField::EscapeThreshold, edits.escape_threshold)?;
        let brightness = parse_positive_real(ParameterField::Brightness, edits.brightness)?;

        let mut updated = *self;
        if let Some(max_iterations) = max_iterations {
            updated.max_iterations = max_iterations;
        }
        if let Some(escape_threshold) = escape_threshold {
            updated.escape_threshold = escape_threshold;
        }
        if let Some(brightness) = brightness {
            updated.brightness = brightness;
        }

        Ok(updated)
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(field: ParameterField, text: &str) -> ParameterError {
    ParameterError::InvalidParameter {
        field,
        value: text.to_string(),
    }
}

/// `Ok(None)` for a blank field.
pub fn parse_max_iterations(text: &str) -> Result<Option<u32>, ParameterError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<u32>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(invalid(ParameterField::MaxIterations, text)),
    }
}

/// `Ok(None)` for a blank field.
pub fn parse_positive_real(
    field: ParameterField,
    text: &str,
) -> Result<Option<f64>, ParameterError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if is_positive_finite(value) => Ok(Some(value)),
        _ => Err(invalid(field, text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edits<'a>(
        max_iterations: &'a str,
        escape_threshold: &'a str,
        brightness: &'a str,
    ) -> ParameterEdits<'a> {
        ParameterEdits {
            max_iterations,
            escape_threshold,
            brightness,
        }
    }

    #[test]
    fn test_defaults() {
        let params = RenderParameters::default();

        assert_eq!(params.max_iterations(), 50);
        assert_eq!(params.escape_threshold(), 4.0);
        assert_eq!(params.brightness(), 1.0);
        assert_eq!(params.colour_map_kind(), MandelbrotColourMapKind::Grey);
        assert_eq!(params.interior_colour(), InteriorColour::Black);
    }

    #[test]
    fn test_with_edits_applies_all_fields() {
        let params = RenderParameters::default();

        let updated = params.with_edits(&edits("200", "2.5", "0.5")).unwrap();

        assert_eq!(updated.max_iterations(), 200);
        assert_eq!(updated.escape_threshold(), 2.5);
        assert_eq!(updated.brightness(), 0.5);
    }

    #[test]
    fn test_blank_fields_keep_current_values() {
        let params = RenderParameters::default();

        let updated = params.with_edits(&edits("", "  ", "3")).unwrap();

        assert_eq!(updated.max_iterations(), 50);
        assert_eq!(updated.escape_threshold(), 4.0);
        assert_eq!(updated.brightness(), 3.0);
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        let params = RenderParameters::default();

        let result = params.with_edits(&edits("lots", "", ""));

        assert_eq!(
            result,
            Err(ParameterError::InvalidParameter {
                field: ParameterField::MaxIterations,
                value: "lots".to_string()
            })
        );
    }

    #[test]
    fn test_zero_and_negative_iterations_are_rejected() {
        assert!(parse_max_iterations("0").is_err());
        assert!(parse_max_iterations("-5").is_err());
        assert!(parse_max_iterations("12.5").is_err());
        assert_eq!(parse_max_iterations(" 75 "), Ok(Some(75)));
    }

    #[test]
    fn test_non_positive_or_non_finite_reals_are_rejected() {
        for text in ["0", "-1", "NaN", "inf", "four"] {
            assert_eq!(
                parse_positive_real(ParameterField::EscapeThreshold, text),
                Err(ParameterError::InvalidParameter {
                    field: ParameterField::EscapeThreshold,
                    value: text.to_string()
                })
            );
        }
        assert_eq!(parse_positive_real(ParameterField::Brightness, "1e-1"), Ok(Some(0.1)));
    }

    #[test]
    fn test_one_bad_field_rejects_the_whole_edit() {
        let params = RenderParameters::default();

        let result = params.with_edits(&edits("100", "2", "-3"));

        assert_eq!(
            result,
            Err(ParameterError::InvalidParameter {
                field: ParameterField::Brightness,
                value: "-3".to_string()
            })
        );
        assert_eq!(params.max_iterations(), 50);
    }

    #[test]
    fn test_selection_setters() {
        let mut params = RenderParameters::default();

        params.set_colour_map_kind(MandelbrotColourMapKind::YellowRed);
        params.set_interior_colour(InteriorColour::White);

        assert_eq!(params.colour_map_kind(), MandelbrotColourMapKind::YellowRed);
        assert_eq!(params.interior_colour(), InteriorColour::White);
        assert_eq!(params.max_iterations(), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_edits_keep_selection() {
        let mut params = RenderParameters::default();
        params.set_colour_map_kind(MandelbrotColourMapKind::Pink);

        let updated = params.with_edits(&edits("10", "", "")).unwrap();

        assert_eq!(updated.colour_map_kind(), MandelbrotColourMapKind::Pink);
        assert_eq!(updated.max_iterations(), 10);
    }
}
