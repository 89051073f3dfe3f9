// SPDX-License-Identifier: MPL-2.0
//! Locale-aware number-with-unit rendering.
//!
//! The distance formatter delegates the final string rendering to the
//! [`UnitNumberFormatter`] capability, so unit selection can be tested with a
//! fake that echoes its inputs. The default implementation,
//! [`LocaleNumberFormatter`], applies per-locale digit grouping and decimal
//! separators without pulling in a full ICU stack.

use num_format::{Locale as NumLocale, ToFormattedString};

use crate::distance::MeasureUnit;

/// Renders a converted value with its unit for a given locale.
pub trait UnitNumberFormatter {
    /// Formats `value` with the short symbol of `unit` under `locale`,
    /// showing at most `max_fraction_digits` decimal places (trailing zeros
    /// are trimmed).
    fn format_unit(
        &self,
        value: f64,
        unit: MeasureUnit,
        locale: &str,
        max_fraction_digits: u8,
    ) -> String;
}

/// Default unit renderer with lightweight locale support.
///
/// Grouping and decimal separators follow the primary language subtag of the
/// locale tag; unknown languages use English conventions. Unit symbols are
/// the short CLDR abbreviations (`m`, `km`, `ft`, `yd`, `mi`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleNumberFormatter;

// Extract the primary language subtag in lowercase from a BCP47-ish string.
// Examples: "ja-JP" -> "ja", "pt_BR" -> "pt", "EN" -> "en".
fn lang_code(tag: &str) -> String {
    let lower = tag.to_ascii_lowercase();
    let mut subtags = lower.split(|c| c == '-' || c == '_');
    subtags.next().unwrap_or("en").to_string()
}

fn grouping_locale(code: &str) -> NumLocale {
    match code {
        "fr" => NumLocale::fr,
        "de" => NumLocale::de,
        "ru" => NumLocale::ru,
        "it" => NumLocale::it,
        "es" => NumLocale::es,
        "pt" => NumLocale::pt,
        _ => NumLocale::en,
    }
}

fn decimal_separator(code: &str) -> char {
    match code {
        "fr" | "de" | "it" | "es" | "pt" | "ru" => ',',
        _ => '.',
    }
}

fn format_number(value: f64, locale: &str, max_fraction_digits: u8) -> String {
    let code = lang_code(locale);
    let rendered = format!("{:.*}", max_fraction_digits as usize, value);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let int_value: i64 = int_part.parse().unwrap_or(0);
    let grouped = int_value.to_formatted_string(&grouping_locale(&code));

    // Minimum fraction digits is zero: "1.50" renders as "1.5", "2.0" as "2".
    match frac_part.map(|f| f.trim_end_matches('0')).filter(|f| !f.is_empty()) {
        Some(frac) => format!("{}{}{}", grouped, decimal_separator(&code), frac),
        None => grouped,
    }
}

impl UnitNumberFormatter for LocaleNumberFormatter {
    fn format_unit(
        &self,
        value: f64,
        unit: MeasureUnit,
        locale: &str,
        max_fraction_digits: u8,
    ) -> String {
        format!(
            "{} {}",
            format_number(value, locale, max_fraction_digits),
            unit.symbol()
        )
    }
}
