use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Length unit carried alongside every measured value.
///
/// Analysis is unit-agnostic; the unit only travels with the numbers so
/// formatters can present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    Millimeter,
    /// Default: the internal length unit of most CAD hosts.
    #[default]
    Centimeter,
    Meter,
    Inch,
    Foot,
}

impl LengthUnit {
    /// Short symbol used in column headings (`mm`, `in`, ...).
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Inch => "in",
            Self::Foot => "ft",
        }
    }

    fn meters(self) -> f64 {
        match self {
            Self::Millimeter => 0.001,
            Self::Centimeter => 0.01,
            Self::Meter => 1.0,
            Self::Inch => 0.0254,
            Self::Foot => 0.3048,
        }
    }

    /// Converts `value` expressed in `self` into `to`.
    #[must_use]
    pub fn convert(self, value: f64, to: Self) -> f64 {
        if self == to {
            value
        } else {
            value * self.meters() / to.meters()
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => Ok(Self::Millimeter),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Ok(Self::Centimeter),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meter),
            "in" | "inch" | "inches" | "\"" => Ok(Self::Inch),
            "ft" | "foot" | "feet" | "'" => Ok(Self::Foot),
            _ => Err(ConfigError::UnknownUnit(s.to_string())),
        }
    }
}
