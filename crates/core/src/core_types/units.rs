//! Semantic unit types for the synthetic weather variables
//!
//! Newtype wrappers keep rainfall, temperature, wind and radiation values from
//! being mixed up when a row is assembled or aggregated.
//!
//! # Design Philosophy
//! - Every type wraps `f64`, matching the precision of the aggregation layer
//! - Total ordering via `Ord` (NaN sorts above all values, as `total_cmp` does)
//! - `Deref` to the raw value so formulas read naturally (`*rainfall / 3.0`)
//! - Serde support, serialized transparently as plain numbers
//!
//! # Usage
//! ```
//! use hotspot_core::core_types::units::{Degrees, Millimeters};
//!
//! let rain = Millimeters::new(-4.0).floor_zero();
//! assert_eq!(*rain, 0.0);
//!
//! let heading = Degrees::new(-30.0).normalized();
//! assert_eq!(*heading, 330.0);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Shared boilerplate: total ordering, `Deref<Target = f64>`, raw conversions.
macro_rules! unit_newtype {
    ($name:ident) => {
        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl $name {
            /// Get the raw f64 value
            #[inline]
            #[must_use]
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Air temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Celsius(f64);

unit_newtype!(Celsius);

impl Celsius {
    /// Create a new Celsius temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }

    /// Degrees above `reference`, or zero when at or below it
    #[inline]
    #[must_use]
    pub fn excess_over(self, reference: f64) -> f64 {
        (self.0 - reference).max(0.0)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

// ============================================================================
// PRECIPITATION
// ============================================================================

/// Rainfall depth in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Millimeters(f64);

unit_newtype!(Millimeters);

impl Millimeters {
    /// Create a new rainfall amount
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Millimeters(value)
    }

    /// Floor at zero; rainfall cannot be negative
    #[inline]
    #[must_use]
    pub fn floor_zero(self) -> Self {
        Millimeters(self.0.max(0.0))
    }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mm", self.0)
    }
}

// ============================================================================
// WIND
// ============================================================================

/// Wind speed in meters per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

unit_newtype!(MetersPerSecond);

impl MetersPerSecond {
    /// Create a new wind speed
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }

    /// Floor at zero; a speed is a magnitude
    #[inline]
    #[must_use]
    pub fn floor_zero(self) -> Self {
        MetersPerSecond(self.0.max(0.0))
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m/s", self.0)
    }
}

/// Compass bearing in degrees (0 = North, 90 = East)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Degrees(f64);

unit_newtype!(Degrees);

impl Degrees {
    /// One full turn
    pub const FULL_TURN: f64 = 360.0;

    /// Create a new bearing (not normalized)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Wrap into `[0, 360)`
    ///
    /// `rem_euclid` can round a tiny negative input up to exactly 360.0, so
    /// that case folds back to 0.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        let wrapped = self.0.rem_euclid(Self::FULL_TURN);
        if wrapped >= Self::FULL_TURN {
            Degrees(0.0)
        } else {
            Degrees(wrapped)
        }
    }

    /// 16-point compass label (N, NNE, NE, ...)
    #[must_use]
    pub fn compass_point(self) -> &'static str {
        const POINTS: [&str; 16] = [
            "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
            "NW", "NNW",
        ];
        let sector = Self::FULL_TURN / 16.0;
        let index = ((self.normalized().0 + sector / 2.0) / sector).floor() as usize % 16;
        POINTS[index]
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

// ============================================================================
// HUMIDITY
// ============================================================================

/// Percentage value (0-100 scale)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Percent(f64);

unit_newtype!(Percent);

impl Percent {
    /// Create a new percentage
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Clamp into `[min, max]` percentage points
    #[inline]
    #[must_use]
    pub fn clamp_to(self, min: f64, max: f64) -> Self {
        Percent(self.0.clamp(min, max))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

// ============================================================================
// RADIATION
// ============================================================================

/// Irradiance in W/m²
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct WattsPerSquareMeter(f64);

unit_newtype!(WattsPerSquareMeter);

impl WattsPerSquareMeter {
    /// Create a new irradiance value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        WattsPerSquareMeter(value)
    }
}

impl fmt::Display for WattsPerSquareMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} W/m²", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_normalize_wraps_both_directions() {
        assert_eq!(*Degrees::new(370.0).normalized(), 10.0);
        assert_eq!(*Degrees::new(-90.0).normalized(), 270.0);
        assert_eq!(*Degrees::new(360.0).normalized(), 0.0);
        assert_eq!(*Degrees::new(0.0).normalized(), 0.0);
    }

    #[test]
    fn test_degrees_normalize_tiny_negative_stays_below_full_turn() {
        let wrapped = Degrees::new(-1e-17).normalized();
        assert!((0.0..360.0).contains(&*wrapped), "got {wrapped}");
    }

    #[test]
    fn test_compass_points() {
        assert_eq!(Degrees::new(0.0).compass_point(), "N");
        assert_eq!(Degrees::new(120.0).compass_point(), "ESE");
        assert_eq!(Degrees::new(135.0).compass_point(), "SE");
        assert_eq!(Degrees::new(240.0).compass_point(), "WSW");
        assert_eq!(Degrees::new(355.0).compass_point(), "N");
    }

    #[test]
    fn test_floor_and_clamp_helpers() {
        assert_eq!(*Millimeters::new(-12.5).floor_zero(), 0.0);
        assert_eq!(*MetersPerSecond::new(-0.3).floor_zero(), 0.0);
        assert_eq!(*Percent::new(120.0).clamp_to(40.0, 95.0), 95.0);
        assert_eq!(*Percent::new(12.0).clamp_to(40.0, 95.0), 40.0);
        assert_eq!(Celsius::new(25.0).excess_over(26.0), 0.0);
        assert!((Celsius::new(27.5).excess_over(26.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_total_ordering() {
        let mut temps = vec![Celsius::new(28.0), Celsius::new(26.5), Celsius::new(27.1)];
        temps.sort();
        assert_eq!(temps, vec![Celsius::new(26.5), Celsius::new(27.1), Celsius::new(28.0)]);
    }

    #[test]
    fn test_display_units() {
        assert_eq!(Millimeters::new(12.34).to_string(), "12.3 mm");
        assert_eq!(Celsius::new(27.5).to_string(), "27.5°C");
        assert_eq!(WattsPerSquareMeter::new(450.0).to_string(), "450 W/m²");
    }
}
