// SPDX-License-Identifier: MPL-2.0
//! `localized-units` provides locale-aware, human-readable formatters for
//! durations and distances.
//!
//! Two formatters are exposed:
//!
//! - [`DurationFormatter`] renders a second count as a compact string such as
//!   `"1d 2h 3m"`. Its output is locale independent.
//! - [`DistanceFormatter`] renders a meter count as a localized unit string
//!   such as `"3.1 mi"` or `"500 m"`, picking the unit from a chosen
//!   measurement system.
//!
//! Both are cheap to construct and pure per call. The distance formatter
//! reads the active locale once, at construction, through a [`LocaleSource`];
//! the actual number rendering is delegated to a [`UnitNumberFormatter`] so
//! the unit-selection logic stays testable in isolation.
//!
//! # Examples
//!
//! ```
//! use localized_units::{DistanceFormatter, DistanceSystem, DurationFormatter, FixedLocaleSource};
//!
//! let duration = DurationFormatter::new();
//! assert_eq!(duration.format(93_784.0), "1d 2h 3m 4s");
//!
//! let source = FixedLocaleSource::new("en-US");
//! let distance = DistanceFormatter::with_locale_source(&source);
//! assert_eq!(distance.format(500.0, DistanceSystem::Metric), "500 m");
//! ```

#![doc(html_root_url = "https://docs.rs/localized-units/0.1.0")]

pub mod distance;
pub mod duration;
pub mod error;
pub mod locale;
pub mod number;

pub use distance::{DistanceFormatter, DistanceSystem, MeasureUnit};
pub use duration::{DurationBreakdown, DurationFormatter, UnitStyle};
pub use error::{Error, Result};
pub use locale::{get_locale, FixedLocaleSource, LocaleSource, SystemLocaleSource};
pub use number::{LocaleNumberFormatter, UnitNumberFormatter};
