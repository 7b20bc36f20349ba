use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidEscapeThreshold { escape_threshold: f64 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeThreshold { escape_threshold } => {
                write!(
                    f,
                    "Escape threshold must be positive and finite, got {}",
                    escape_threshold
                )
            }
        }
    }
}

impl Error for MandelbrotError {}

/// The user-editable numeric render parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParameterField {
    MaxIterations,
    EscapeThreshold,
    Brightness,
}

impl ParameterField {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::MaxIterations => "max iterations",
            Self::EscapeThreshold => "escape threshold",
            Self::Brightness => "brightness",
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    InvalidParameter { field: ParameterField, value: String },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { field, value } => {
                write!(f, "invalid value {:?} for {}", value, field)
            }
        }
    }
}

impl Error for ParameterError {}
