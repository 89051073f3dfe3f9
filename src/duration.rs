// SPDX-License-Identifier: MPL-2.0
//! Human-readable duration formatting.
//!
//! A duration in seconds is decomposed into days, hours, minutes, and seconds
//! and rendered as a compact string like `"1d 2h 3m 4s"`. Zero-valued fields
//! are skipped, so a whole day renders as `"1d"` and a zero duration renders
//! as the empty string. Output uses ASCII digits and suffixes regardless of
//! the environment locale.

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * 60;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// How a duration unit is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitStyle {
    /// Single-letter suffix attached to the value: `"2h"`.
    #[default]
    Short,
    /// Full English word, pluralized, separated by a space: `"2 hours"`.
    Long,
}

/// A second count decomposed into calendar-free fields.
///
/// `days` is unbounded; the remaining fields satisfy `hours < 24` and
/// `minutes, seconds < 60`. Reconstructing `days * 86400 + hours * 3600 +
/// minutes * 60 + seconds` yields the input rounded to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

#[derive(Debug, Clone, Copy)]
enum DurationUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl DurationUnit {
    fn suffix(self) -> &'static str {
        match self {
            DurationUnit::Days => "d",
            DurationUnit::Hours => "h",
            DurationUnit::Minutes => "m",
            DurationUnit::Seconds => "s",
        }
    }

    fn word(self) -> &'static str {
        match self {
            DurationUnit::Days => "day",
            DurationUnit::Hours => "hour",
            DurationUnit::Minutes => "minute",
            DurationUnit::Seconds => "second",
        }
    }
}

/// Formats second counts as compact human-readable strings.
///
/// Construction is free; the formatter holds only the chosen [`UnitStyle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationFormatter {
    style: UnitStyle,
}

impl DurationFormatter {
    /// Creates a formatter with the short, single-letter style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with the given unit style.
    pub fn with_style(style: UnitStyle) -> Self {
        Self { style }
    }

    /// Decomposes a duration into days, hours, minutes, and seconds.
    ///
    /// The input is rounded to whole seconds (half away from zero) before
    /// decomposition, so `59.6` carries into `1` minute. Negative and NaN
    /// inputs are clamped to zero.
    pub fn breakdown(&self, duration_seconds: f64) -> DurationBreakdown {
        let total = duration_seconds.max(0.0).round() as u64;
        DurationBreakdown {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Formats a duration in seconds.
    ///
    /// Fields appear in day, hour, minute, second order, zero fields are
    /// skipped, and the rendered fields are joined with single spaces. A
    /// zero duration yields the empty string.
    pub fn format(&self, duration_seconds: f64) -> String {
        let breakdown = self.breakdown(duration_seconds);
        let fields = [
            (breakdown.days, DurationUnit::Days),
            (breakdown.hours, DurationUnit::Hours),
            (breakdown.minutes, DurationUnit::Minutes),
            (breakdown.seconds, DurationUnit::Seconds),
        ];

        fields
            .iter()
            .filter(|(value, _)| *value > 0)
            .map(|&(value, unit)| self.render(value, unit))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render(&self, value: u64, unit: DurationUnit) -> String {
        match self.style {
            UnitStyle::Short => format!("{}{}", value, unit.suffix()),
            UnitStyle::Long => {
                let plural = if value == 1 { "" } else { "s" };
                format!("{} {}{}", value, unit.word(), plural)
            }
        }
    }
}
