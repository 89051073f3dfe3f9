// SPDX-License-Identifier: MPL-2.0
//! Locale acquisition.
//!
//! The distance formatter only needs one thing from the host environment: the
//! active locale tag, read once at construction. That capability is modeled
//! as the [`LocaleSource`] trait with two implementations: one backed by the
//! operating system and one carrying a fixed tag for embedders and tests.

use unic_langid::LanguageIdentifier;

/// Tag returned when no locale can be resolved from any source.
pub const DEFAULT_LOCALE: &str = "en";

/// A source for the active locale tag.
///
/// Implementations perform a single synchronous read with no caching and no
/// error signaling; absence of data falls back to [`DEFAULT_LOCALE`].
pub trait LocaleSource {
    /// Returns the current locale tag, e.g. `"en-US"`.
    fn current(&self) -> String;
}

/// Reads the locale from the operating system.
///
/// The per-platform branching (desktop settings, mobile device configuration,
/// browser language list) lives inside `sys-locale`; this type only supplies
/// the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocaleSource;

impl LocaleSource for SystemLocaleSource {
    fn current(&self) -> String {
        sys_locale::get_locale().unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }
}

/// A locale source that always returns the tag it was built with.
#[derive(Debug, Clone)]
pub struct FixedLocaleSource {
    tag: String,
}

impl FixedLocaleSource {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl LocaleSource for FixedLocaleSource {
    fn current(&self) -> String {
        self.tag.clone()
    }
}

/// Returns the current system locale tag, or [`DEFAULT_LOCALE`] if none is
/// resolvable.
pub fn get_locale() -> String {
    SystemLocaleSource.current()
}

/// Normalizes a raw locale tag for use by number formatting.
///
/// Underscore separators are replaced with hyphens and subtag casing is
/// canonicalized (`en_us` → `en-US`). Tags that do not parse as a language
/// identifier fall back to [`DEFAULT_LOCALE`].
pub fn normalize_tag(raw: &str) -> String {
    match raw.parse::<LanguageIdentifier>() {
        Ok(langid) => langid.to_string(),
        Err(_) => DEFAULT_LOCALE.to_string(),
    }
}
