//! Number formatting for the calculator display.
//!
//! Results are shown like a `0.#########` decimal pattern: up to nine
//! fractional digits, trailing zeros dropped and no grouping separators.

use std::fmt;

use super::error::CalcError;
use super::operation::Operation;

/// Maximum number of fractional digits shown for a result.
pub const MAX_FRACTION_DIGITS: usize = 9;

/// The single locale-dependent piece of number formatting: which glyph
/// separates the integer and fractional parts.
///
/// The separator never collides with a digit, whitespace, a control
/// character or an operation symbol, so typed input always reads back as
/// one decimal number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_separator: char,
}

impl NumberFormat {
    /// `1.5`
    pub const PERIOD: Self = Self {
        decimal_separator: '.',
    };

    /// `1,5`
    pub const COMMA: Self = Self {
        decimal_separator: ',',
    };

    /// Create a format using the given decimal separator.
    pub fn new(decimal_separator: char) -> Result<Self, CalcError> {
        let clashes = decimal_separator.is_ascii_digit()
            || decimal_separator.is_whitespace()
            || decimal_separator.is_control()
            || Operation::ALL
                .iter()
                .any(|op| op.symbol().contains(decimal_separator));

        if clashes {
            Err(CalcError::InvalidSeparator(decimal_separator))
        } else {
            Ok(Self { decimal_separator })
        }
    }

    /// The glyph separating integer and fractional digits.
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Format a result value for display.
    ///
    /// Infinities render as `∞` / `-∞` and NaN as `NaN`.
    pub fn format_result(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
        }

        let formatted = format!("{:.*}", MAX_FRACTION_DIGITS, value);
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

        if self.decimal_separator == '.' {
            trimmed.to_string()
        } else {
            trimmed.replace('.', &self.decimal_separator.to_string())
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::PERIOD
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0{}#########", self.decimal_separator)
    }
}
