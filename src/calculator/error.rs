//! Errors raised when external text is turned into calculator values.

use thiserror::Error;

/// Failure to map a textual representation onto a calculator value.
///
/// These only occur when parsing configuration or key scripts; button
/// driven input never produces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A digit outside `0..=9` was requested.
    #[error("digit {0} is out of range (expected 0-9)")]
    DigitOutOfRange(u32),

    /// Text that is neither a digit nor the decimal separator.
    #[error("'{0}' is not a digit or decimal separator")]
    UnknownToken(String),

    /// Text that does not name one of the supported operations.
    #[error("Operation type '{0}' is unknown.")]
    UnknownOperation(String),

    /// A decimal separator that would make typed input ambiguous.
    #[error("'{0}' cannot be used as decimal separator")]
    InvalidSeparator(char),

    /// A key script contained something that is not a key.
    #[error("unrecognized key '{key}' at offset {offset}")]
    UnknownKey {
        /// The offending text.
        key: String,
        /// Byte offset into the script.
        offset: usize,
    },
}
