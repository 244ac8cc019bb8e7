//! Unit conversion utilities
//!
//! Handles conversion between Metric (mm) and Imperial (inch) systems for
//! label dimensions, and between grams and ounces for product weights.
//! Supports decimal and fractional inch parsing and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Grams per avoirdupois ounce.
pub const GRAMS_PER_OUNCE: f64 = 28.3495;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Unit of a single item's weight in product data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Grams
    #[default]
    G,
    /// Ounces
    Oz,
}

impl WeightUnit {
    /// Convert a value in this unit to grams
    pub fn to_grams(self, value: f64) -> f64 {
        match self {
            Self::G => value,
            Self::Oz => value * GRAMS_PER_OUNCE,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::G => write!(f, "g"),
            Self::Oz => write!(f, "oz"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Self::G),
            "oz" | "ounce" | "ounces" => Ok(Self::Oz),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1}", value_mm),
        MeasurementSystem::Imperial => format!("{:.3}", value_mm / MM_PER_INCH),
    }
}

/// Parse length string to millimeters
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => input.parse::<f64>().map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                let inches = input.parse::<f64>().map_err(|e| e.to_string())?;
                return Ok(inches * MM_PER_INCH);
            }

            // Mixed numbers such as "1 1/2"
            let mut total_inches = 0.0;
            for part in input.split_whitespace() {
                match part.split_once('/') {
                    Some((num, den)) => {
                        let num = num.parse::<f64>().map_err(|_| "Invalid numerator")?;
                        let den = den.parse::<f64>().map_err(|_| "Invalid denominator")?;
                        if den == 0.0 {
                            return Err("Division by zero".to_string());
                        }
                        total_inches += num / den;
                    }
                    None => {
                        total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                    }
                }
            }
            Ok(total_inches * MM_PER_INCH)
        }
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
