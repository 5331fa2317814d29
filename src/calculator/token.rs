//! Input tokens: the atomic pieces a number is typed from.

use super::error::CalcError;
use super::format::NumberFormat;

/// Legal input for an [`InputNumber`](super::InputNumber).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputToken {
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    DecimalSeparator,
}

impl InputToken {
    /// All digit tokens, in numeric order.
    pub const DIGITS: [InputToken; 10] = [
        Self::Digit0,
        Self::Digit1,
        Self::Digit2,
        Self::Digit3,
        Self::Digit4,
        Self::Digit5,
        Self::Digit6,
        Self::Digit7,
        Self::Digit8,
        Self::Digit9,
    ];

    /// Map a digit value onto its token.
    pub fn from_digit(digit: u32) -> Result<Self, CalcError> {
        Self::DIGITS
            .get(digit as usize)
            .copied()
            .ok_or(CalcError::DigitOutOfRange(digit))
    }

    /// Parse the textual representation of a token.
    ///
    /// Accepts a single digit or the separator of `format`.
    pub fn parse(rep: &str, format: NumberFormat) -> Result<Self, CalcError> {
        let mut chars = rep.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c == format.decimal_separator() => Ok(Self::DecimalSeparator),
            (Some(c), None) => c
                .to_digit(10)
                .map(|d| Self::DIGITS[d as usize])
                .ok_or_else(|| CalcError::UnknownToken(rep.to_string())),
            _ => Err(CalcError::UnknownToken(rep.to_string())),
        }
    }

    /// The glyph shown for this token.
    pub fn glyph(self, format: NumberFormat) -> char {
        match self.digit() {
            Some(d) => char::from(b'0' + d as u8),
            None => format.decimal_separator(),
        }
    }

    /// Numeric value of a digit token, `None` for the separator.
    pub fn digit(self) -> Option<u32> {
        Some(match self {
            Self::Digit0 => 0,
            Self::Digit1 => 1,
            Self::Digit2 => 2,
            Self::Digit3 => 3,
            Self::Digit4 => 4,
            Self::Digit5 => 5,
            Self::Digit6 => 6,
            Self::Digit7 => 7,
            Self::Digit8 => 8,
            Self::Digit9 => 9,
            Self::DecimalSeparator => return None,
        })
    }

    pub fn is_separator(self) -> bool {
        self == Self::DecimalSeparator
    }
}
