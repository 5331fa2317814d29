//! Numerical input assembled token by token.

use tracing::error;

use super::format::NumberFormat;
use super::token::InputToken;

/// Represents numerical input.
///
/// Tokens are kept on a stack so the last one can be taken back. At most
/// one decimal separator is ever present.
#[derive(Clone, Debug)]
pub struct InputNumber {
    format: NumberFormat,
    /// Text form of `tokens`.
    display: String,
    tokens: Vec<InputToken>,
    has_separator: bool,
}

impl InputNumber {
    pub fn new(format: NumberFormat) -> Self {
        Self {
            format,
            display: String::new(),
            tokens: Vec::new(),
            has_separator: false,
        }
    }

    /// Add a token.
    ///
    /// Returns `false` and leaves the input untouched when `token` is a
    /// second decimal separator.
    pub fn push(&mut self, token: InputToken) -> bool {
        if token.is_separator() {
            if self.has_separator {
                return false;
            }
            self.has_separator = true;
        }

        self.tokens.push(token);
        self.display.push(token.glyph(self.format));
        true
    }

    /// Remove and return the last token, if any.
    pub fn pop(&mut self) -> Option<InputToken> {
        let popped = self.tokens.pop()?;
        if popped.is_separator() {
            self.has_separator = false;
        }
        self.display.pop();
        Some(popped)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn has_separator(&self) -> bool {
        self.has_separator
    }

    /// The current input value; `0` when nothing (or only the separator)
    /// has been entered.
    pub fn number(&self) -> f64 {
        if !self.tokens.iter().any(|t| t.digit().is_some()) {
            return 0.0;
        }

        let normalized: String = self
            .display
            .chars()
            .map(|c| if c == self.format.decimal_separator() { '.' } else { c })
            .collect();

        match normalized.parse::<f64>() {
            Ok(value) => value,
            Err(err) => {
                error!(input = %self.display, %err, "input number is not a valid decimal");
                debug_assert!(false, "unparsable input '{}': {err}", self.display);
                0.0
            }
        }
    }

    /// The textual representation of the current input.
    pub fn as_str(&self) -> &str {
        &self.display
    }
}
