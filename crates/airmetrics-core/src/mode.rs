//! Measurement modes addressable in a metrics store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};

/// Closed set of measurement channels.
///
/// Declaration order is the canonical enumeration order; `Ord` follows it, so
/// ordered maps keyed by `Mode` iterate in the same order as `Mode::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Altitude,
    Direction,
    Speed,
    FuelQuantity,
    OutsideAirTemperature,
    WindSpeed,
}

impl Mode {
    /// Every mode, in canonical enumeration order.
    pub const ALL: [Mode; 6] = [
        Mode::Altitude,
        Mode::Direction,
        Mode::Speed,
        Mode::FuelQuantity,
        Mode::OutsideAirTemperature,
        Mode::WindSpeed,
    ];

    /// Fixed integer value of the mode.
    pub fn ordinal(self) -> u8 {
        match self {
            Mode::Altitude => 0,
            Mode::Direction => 1,
            Mode::Speed => 2,
            Mode::FuelQuantity => 3,
            Mode::OutsideAirTemperature => 4,
            Mode::WindSpeed => 5,
        }
    }

    /// Upper-case identifier, e.g. `FUEL_QUANTITY`.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Altitude => "ALTITUDE",
            Mode::Direction => "DIRECTION",
            Mode::Speed => "SPEED",
            Mode::FuelQuantity => "FUEL_QUANTITY",
            Mode::OutsideAirTemperature => "OUTSIDE_AIR_TEMPERATURE",
            Mode::WindSpeed => "WIND_SPEED",
        }
    }

    /// Human-readable label for console output.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Altitude => "Altitude",
            Mode::Direction => "Direction",
            Mode::Speed => "Speed",
            Mode::FuelQuantity => "Fuel Quantity",
            Mode::OutsideAirTemperature => "Outside Air Temperature",
            Mode::WindSpeed => "Wind Speed",
        }
    }

    /// Range check applied before any write.
    ///
    /// - DIRECTION must lie in `[0, 360)`.
    /// - ALTITUDE, SPEED and FUEL_QUANTITY must be non-negative.
    /// - NaN is never a storable value.
    pub fn validate(self, value: f64) -> Result<()> {
        if value.is_nan() {
            return Err(MetricsError::InvalidArgument(format!(
                "{} must be a number",
                self.name()
            )));
        }
        match self {
            Mode::Direction => {
                if !(0.0..360.0).contains(&value) {
                    return Err(MetricsError::InvalidArgument(
                        "DIRECTION must be in [0, 360)".into(),
                    ));
                }
            }
            Mode::Altitude | Mode::Speed | Mode::FuelQuantity => {
                if value < 0.0 {
                    return Err(MetricsError::InvalidArgument(format!(
                        "{} must be non-negative",
                        self.name()
                    )));
                }
            }
            Mode::OutsideAirTemperature | Mode::WindSpeed => {}
        }
        Ok(())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = MetricsError;

    /// Case-insensitive lookup by identifier.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Mode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MetricsError::InvalidArgument(format!("unknown mode: {s}")))
    }
}
