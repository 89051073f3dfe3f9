// SPDX-License-Identifier: MPL-2.0
//! Localized distance formatting.
//!
//! A distance in meters is rendered under a chosen measurement system: the
//! system picks the unit (meters stay meters below a kilometer, imperial
//! switches from feet to miles, and so on), the value is converted, and the
//! locale-aware number renderer produces the final string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::locale::{normalize_tag, LocaleSource, SystemLocaleSource};
use crate::number::{LocaleNumberFormatter, UnitNumberFormatter};

pub const METERS_PER_KILOMETER: f64 = 1_000.0;
pub const METERS_PER_MILE: f64 = 1_609.344;
pub const FEET_PER_METER: f64 = 3.280_84;
pub const YARDS_PER_METER: f64 = 1.093_613;

/// A family of units used to pick a unit for a distance value.
///
/// Serialized names match the conventional camelCase spellings `metric`,
/// `imperial`, and `imperialWithYards`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceSystem {
    #[default]
    Metric,
    Imperial,
    ImperialWithYards,
}

impl DistanceSystem {
    fn name(self) -> &'static str {
        match self {
            DistanceSystem::Metric => "metric",
            DistanceSystem::Imperial => "imperial",
            DistanceSystem::ImperialWithYards => "imperialWithYards",
        }
    }
}

impl fmt::Display for DistanceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "metric" => Ok(DistanceSystem::Metric),
            "imperial" => Ok(DistanceSystem::Imperial),
            "imperialWithYards" => Ok(DistanceSystem::ImperialWithYards),
            other => Err(Error::UnsupportedSystem(other.to_string())),
        }
    }
}

/// A distance unit with a fixed conversion factor from meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureUnit {
    Meter,
    Kilometer,
    Foot,
    Yard,
    Mile,
}

impl MeasureUnit {
    /// Short CLDR-style symbol for the unit.
    pub fn symbol(self) -> &'static str {
        match self {
            MeasureUnit::Meter => "m",
            MeasureUnit::Kilometer => "km",
            MeasureUnit::Foot => "ft",
            MeasureUnit::Yard => "yd",
            MeasureUnit::Mile => "mi",
        }
    }

    /// Converts a meter count into this unit.
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            MeasureUnit::Meter => meters,
            MeasureUnit::Kilometer => meters / METERS_PER_KILOMETER,
            MeasureUnit::Foot => meters * FEET_PER_METER,
            MeasureUnit::Yard => meters * YARDS_PER_METER,
            MeasureUnit::Mile => meters / METERS_PER_MILE,
        }
    }
}

// Thresholds are strictly exclusive: exactly 1000 m stays in meters,
// exactly 289 m stays in feet, exactly 300 m stays in yards.
fn select_unit(meters: f64, system: DistanceSystem) -> MeasureUnit {
    match system {
        DistanceSystem::Metric => {
            if meters > 1_000.0 {
                MeasureUnit::Kilometer
            } else {
                MeasureUnit::Meter
            }
        }
        DistanceSystem::Imperial => {
            if meters > 289.0 {
                MeasureUnit::Mile
            } else {
                MeasureUnit::Foot
            }
        }
        DistanceSystem::ImperialWithYards => {
            if meters > 300.0 {
                MeasureUnit::Mile
            } else {
                MeasureUnit::Yard
            }
        }
    }
}

/// Formats meter counts as localized unit strings.
///
/// The locale tag is read once, at construction, and held for the
/// formatter's lifetime. Number rendering is delegated to a
/// [`UnitNumberFormatter`]; the default is [`LocaleNumberFormatter`].
#[derive(Debug, Clone)]
pub struct DistanceFormatter<F = LocaleNumberFormatter> {
    locale: String,
    numbers: F,
}

impl DistanceFormatter<LocaleNumberFormatter> {
    /// Creates a formatter bound to the system locale.
    pub fn new() -> Self {
        Self::with_locale_source(&SystemLocaleSource)
    }

    /// Creates a formatter reading its locale from the given source.
    pub fn with_locale_source(source: &dyn LocaleSource) -> Self {
        Self::with_parts(source, LocaleNumberFormatter)
    }
}

impl Default for DistanceFormatter<LocaleNumberFormatter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: UnitNumberFormatter> DistanceFormatter<F> {
    /// Creates a formatter from a locale source and a number renderer.
    pub fn with_parts(source: &dyn LocaleSource, numbers: F) -> Self {
        Self {
            locale: normalize_tag(&source.current()),
            numbers,
        }
    }

    /// The normalized locale tag this formatter renders with.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Formats a distance with no decimal places.
    pub fn format(&self, distance_in_meters: f64, system: DistanceSystem) -> String {
        self.format_with_precision(distance_in_meters, system, 0)
    }

    /// Formats a distance showing at most `max_fraction_digits` decimal
    /// places. Negative and NaN distances are clamped to zero.
    pub fn format_with_precision(
        &self,
        distance_in_meters: f64,
        system: DistanceSystem,
        max_fraction_digits: u8,
    ) -> String {
        let meters = distance_in_meters.max(0.0);
        let unit = select_unit(meters, system);
        let value = unit.from_meters(meters);
        self.numbers
            .format_unit(value, unit, &self.locale, max_fraction_digits)
    }
}
