use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKind {
    #[default]
    Grey,
    Yellow,
    Red,
    Green,
    Pink,
    BlueWhite,
    BlueGreen,
    YellowRed,
}

impl MandelbrotColourMapKind {
    pub const ALL: &'static [Self] = &[
        Self::Grey,
        Self::Yellow,
        Self::Red,
        Self::Green,
        Self::Pink,
        Self::BlueWhite,
        Self::BlueGreen,
        Self::YellowRed,
    ];

    /// Stable identifier, as used by palette selectors.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Grey => "grey",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::BlueWhite => "blue-white",
            Self::BlueGreen => "blue-green",
            Self::YellowRed => "yellow-red",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grey => "Grey",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Pink => "Pink",
            Self::BlueWhite => "Blue-white",
            Self::BlueGreen => "Blue-green bands",
            Self::YellowRed => "Yellow-red bands",
        }
    }
}

impl fmt::Display for MandelbrotColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMapError {
    pub id: String,
}

impl fmt::Display for UnknownColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown palette {:?}", self.id)
    }
}

impl std::error::Error for UnknownColourMapError {}

impl FromStr for MandelbrotColourMapKind {
    type Err = UnknownColourMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownColourMapError { id: s.to_string() })
    }
}
