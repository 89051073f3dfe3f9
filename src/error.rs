// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised by this crate.
///
/// Locale resolution never fails (it degrades to a default tag) and numeric
/// inputs are clamped rather than rejected, so the only failure surfaces
/// where an untyped measurement-system name enters the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The given name is not a recognized measurement system.
    UnsupportedSystem(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedSystem(name) => {
                write!(f, "Unsupported measurement system: {}", name)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
