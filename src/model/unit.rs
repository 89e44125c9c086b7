//! Measurement units for user height and weight.
//!
//! Stored values are canonical (centimetres for height, kilograms for
//! weight) and conversion always starts from the canonical value. The unit
//! sets are closed enums, so a conversion over them cannot fail; unknown
//! unit strings are rejected at the [`FromStr`] boundary instead.

use crate::error::{PalsError, Result};
use std::{fmt, str::FromStr};

/// Centimetres in one foot.
pub const CENTIMETRES_PER_FOOT: f64 = 30.48;

/// Kilograms in one pound.
pub const KILOGRAMS_PER_POUND: f64 = 0.45359237;

/// Grams in one kilogram.
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightUnit {
    Metre,
    #[default]
    Centimetre,
    Foot,
}

impl HeightUnit {
    /// Express a height stored in centimetres in this unit.
    pub fn from_centimetres(self, value: f64) -> f64 {
        match self {
            HeightUnit::Metre => value / 100.0,
            HeightUnit::Centimetre => value,
            HeightUnit::Foot => value / CENTIMETRES_PER_FOOT,
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeightUnit::Metre => write!(f, "METRE"),
            HeightUnit::Centimetre => write!(f, "CENTIMETRE"),
            HeightUnit::Foot => write!(f, "FOOT"),
        }
    }
}

impl FromStr for HeightUnit {
    type Err = PalsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "METRE" => Ok(HeightUnit::Metre),
            "CENTIMETRE" => Ok(HeightUnit::Centimetre),
            "FOOT" => Ok(HeightUnit::Foot),
            _ => Err(PalsError::UnsupportedUnit(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightUnit {
    #[default]
    Kilogram,
    Gram,
    Pound,
}

impl WeightUnit {
    /// Express a weight stored in kilograms in this unit.
    pub fn from_kilograms(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilogram => value,
            WeightUnit::Gram => value * GRAMS_PER_KILOGRAM,
            WeightUnit::Pound => value / KILOGRAMS_PER_POUND,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kilogram => write!(f, "KILOGRAM"),
            WeightUnit::Gram => write!(f, "GRAM"),
            WeightUnit::Pound => write!(f, "POUND"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = PalsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "KILOGRAM" => Ok(WeightUnit::Kilogram),
            "GRAM" => Ok(WeightUnit::Gram),
            "POUND" => Ok(WeightUnit::Pound),
            _ => Err(PalsError::UnsupportedUnit(s.to_string())),
        }
    }
}
