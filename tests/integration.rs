// SPDX-License-Identifier: MPL-2.0
use localized_units::{
    get_locale, DistanceFormatter, DistanceSystem, DurationFormatter, Error, FixedLocaleSource,
    UnitStyle,
};

fn en_us_distance_formatter() -> DistanceFormatter {
    let source = FixedLocaleSource::new("en-US");
    DistanceFormatter::with_locale_source(&source)
}

#[test]
fn duration_examples_render_as_expected() {
    let formatter = DurationFormatter::new();
    assert_eq!(formatter.format(0.0), "");
    assert_eq!(formatter.format(90.0), "1m 30s");
    assert_eq!(formatter.format(3_661.0), "1h 1m 1s");
    assert_eq!(formatter.format(86_400.0), "1d");
    assert_eq!(formatter.format(59.6), "1m");
}

#[test]
fn duration_output_uses_ordered_units_without_repeats() {
    let formatter = DurationFormatter::new();
    for seconds in [0u64, 1, 59, 61, 3_600, 3_661, 86_399, 86_401, 90_061, 987_654] {
        let rendered = formatter.format(seconds as f64);
        assert!(!rendered.contains("  "), "double space in {rendered:?}");

        let mut last_position = None;
        for letter in ['d', 'h', 'm', 's'] {
            let count = rendered.matches(letter).count();
            assert!(count <= 1, "unit {letter} repeats in {rendered:?}");
            if let Some(position) = rendered.find(letter) {
                if let Some(last) = last_position {
                    assert!(position > last, "unit order broken in {rendered:?}");
                }
                last_position = Some(position);
            }
        }
    }
}

#[test]
fn duration_formatting_is_idempotent() {
    let formatter = DurationFormatter::new();
    assert_eq!(formatter.format(12_345.0), formatter.format(12_345.0));
}

#[test]
fn duration_long_style_spells_out_units() {
    let formatter = DurationFormatter::with_style(UnitStyle::Long);
    assert_eq!(formatter.format(3_600.0), "1 hour");
    assert_eq!(formatter.format(7_322.0), "2 hours 2 minutes 2 seconds");
}

#[test]
fn metric_distances_pick_meter_or_kilometer() {
    let formatter = en_us_distance_formatter();
    assert_eq!(formatter.format(500.0, DistanceSystem::Metric), "500 m");
    assert_eq!(
        formatter.format_with_precision(1_500.0, DistanceSystem::Metric, 1),
        "1.5 km"
    );
}

#[test]
fn metric_threshold_is_exclusive() {
    let formatter = en_us_distance_formatter();
    assert_eq!(formatter.format(1_000.0, DistanceSystem::Metric), "1,000 m");
    assert_eq!(formatter.format(1_001.0, DistanceSystem::Metric), "1 km");
}

#[test]
fn imperial_threshold_is_exclusive() {
    let formatter = en_us_distance_formatter();
    // 289 m = 948.16 ft, 290 m = 0.18 mi
    assert_eq!(formatter.format(289.0, DistanceSystem::Imperial), "948 ft");
    assert_eq!(formatter.format(290.0, DistanceSystem::Imperial), "0 mi");
    assert_eq!(
        formatter.format_with_precision(290.0, DistanceSystem::Imperial, 2),
        "0.18 mi"
    );
}

#[test]
fn imperial_with_yards_threshold_is_exclusive() {
    let formatter = en_us_distance_formatter();
    assert_eq!(
        formatter.format(300.0, DistanceSystem::ImperialWithYards),
        "328 yd"
    );
    assert_eq!(
        formatter.format_with_precision(301.0, DistanceSystem::ImperialWithYards, 2),
        "0.19 mi"
    );
}

#[test]
fn distance_rendering_follows_locale_conventions() {
    let source = FixedLocaleSource::new("de_DE");
    let formatter = DistanceFormatter::with_locale_source(&source);
    assert_eq!(formatter.locale(), "de-DE");
    assert_eq!(
        formatter.format_with_precision(1_500.0, DistanceSystem::Metric, 1),
        "1,5 km"
    );
    assert_eq!(
        formatter.format(1_234_567.0, DistanceSystem::Metric),
        "1.235 km"
    );
}

#[test]
fn unresolvable_locale_degrades_to_english() {
    let source = FixedLocaleSource::new("!!not-a-tag!!");
    let formatter = DistanceFormatter::with_locale_source(&source);
    assert_eq!(formatter.locale(), "en");
}

#[test]
fn distance_formatting_is_idempotent() {
    let formatter = en_us_distance_formatter();
    let first = formatter.format_with_precision(2_500.0, DistanceSystem::Imperial, 2);
    let second = formatter.format_with_precision(2_500.0, DistanceSystem::Imperial, 2);
    assert_eq!(first, second);
}

#[test]
fn unknown_system_reports_unsupported_error() {
    let err = "bogus".parse::<DistanceSystem>().unwrap_err();
    assert!(matches!(err, Error::UnsupportedSystem(name) if name == "bogus"));
}

#[test]
fn system_locale_is_always_available() {
    assert!(!get_locale().is_empty());
}
