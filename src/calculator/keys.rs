//! Keys of the calculator and the text shown after pressing them.
//!
//! Both the window and the headless `eval` command drive a [`Calculator`]
//! through [`Calculator::press`], so they always agree on what the display
//! reads.

use lazy_static::lazy_static;
use regex::Regex;

use super::engine::Calculator;
use super::error::CalcError;
use super::operation::Operation;
use super::token::InputToken;

lazy_static! {
    /// One key per match: the word `ans` or any single non-space character.
    static ref KEY_PATTERN: Regex = Regex::new(r"(?i)ans|\S").unwrap();
}

/// A key on the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Token(InputToken),
    Operation(Operation),
    Backspace,
    Clear,
}

impl Key {
    /// Resolve a key name as typed on a keyboard or in a key script.
    ///
    /// Both `.` and `,` map to the decimal separator regardless of the
    /// configured glyph. `*` is an alias for `x`, and `=` / `enter` for `ans`.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.to_ascii_lowercase().as_str() {
            "." | "," => Self::Token(InputToken::DecimalSeparator),
            "*" | "x" => Self::Operation(Operation::Mul),
            "=" | "enter" | "ans" => Self::Operation(Operation::Ans),
            "+" => Self::Operation(Operation::Add),
            "-" => Self::Operation(Operation::Sub),
            "/" => Self::Operation(Operation::Div),
            "<" | "backspace" => Self::Backspace,
            "c" | "escape" => Self::Clear,
            other => {
                let mut chars = other.chars();
                let digit = match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10)?,
                    _ => return None,
                };
                Self::Token(InputToken::DIGITS[digit as usize])
            }
        };
        Some(key)
    }
}

impl From<InputToken> for Key {
    fn from(token: InputToken) -> Self {
        Self::Token(token)
    }
}

impl From<Operation> for Key {
    fn from(operation: Operation) -> Self {
        Self::Operation(operation)
    }
}

/// Split a key script such as `"12.5 x 4 ans"` into keys.
///
/// Whitespace is ignored; every other character must be a key.
pub fn parse_keys(script: &str) -> Result<Vec<Key>, CalcError> {
    KEY_PATTERN
        .find_iter(script)
        .map(|m| {
            Key::from_name(m.as_str()).ok_or_else(|| CalcError::UnknownKey {
                key: m.as_str().to_string(),
                offset: m.start(),
            })
        })
        .collect()
}

impl Calculator {
    /// Press a key and return what the display should read afterwards.
    ///
    /// Input keys show the operand being typed (`"0"` while it is empty),
    /// operation keys and clear show the running result.
    pub fn press(&mut self, key: Key) -> String {
        match key {
            Key::Token(token) => {
                self.input(token);
                self.input_readout()
            }
            Key::Backspace => {
                self.backspace();
                self.input_readout()
            }
            Key::Operation(operation) => {
                self.operation(operation);
                self.calculation_result()
            }
            Key::Clear => {
                self.reset();
                self.calculation_result()
            }
        }
    }

    fn input_readout(&self) -> String {
        match self.input_text() {
            "" => "0".to_string(),
            text => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::NumberFormat;

    fn run(calc: &mut Calculator, script: &str) -> Vec<String> {
        parse_keys(script)
            .unwrap()
            .into_iter()
            .map(|key| calc.press(key))
            .collect()
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("7"), Some(Key::Token(InputToken::Digit7)));
        assert_eq!(Key::from_name(","), Some(Key::Token(InputToken::DecimalSeparator)));
        assert_eq!(Key::from_name("*"), Some(Key::Operation(Operation::Mul)));
        assert_eq!(Key::from_name("X"), Some(Key::Operation(Operation::Mul)));
        assert_eq!(Key::from_name("Enter"), Some(Key::Operation(Operation::Ans)));
        assert_eq!(Key::from_name("backspace"), Some(Key::Backspace));
        assert_eq!(Key::from_name("escape"), Some(Key::Clear));
        assert_eq!(Key::from_name("%"), None);
        assert_eq!(Key::from_name("12"), None);
    }

    #[test]
    fn test_parse_keys() {
        let keys = parse_keys("12.5 x4 ANS").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Token(InputToken::Digit1),
                Key::Token(InputToken::Digit2),
                Key::Token(InputToken::DecimalSeparator),
                Key::Token(InputToken::Digit5),
                Key::Operation(Operation::Mul),
                Key::Token(InputToken::Digit4),
                Key::Operation(Operation::Ans),
            ]
        );
        assert!(parse_keys("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_keys_rejects_unknown() {
        let err = parse_keys("1 + an").unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownKey {
                key: "a".to_string(),
                offset: 4
            }
        );
    }

    #[test]
    fn test_readouts_follow_presentation_rules() {
        let mut calc = Calculator::default();
        assert_eq!(run(&mut calc, "+5+3+"), vec!["0", "5", "5", "3", "8"]);
    }

    #[test]
    fn test_operation_hint_shown_before_operand() {
        let mut calc = Calculator::default();
        assert_eq!(run(&mut calc, "12x"), vec!["1", "12", "12"]);
        assert_eq!(calc.operation_hint(), Some(Operation::Mul));

        run(&mut calc, "3<");
        assert_eq!(calc.operation_hint(), Some(Operation::Mul));

        run(&mut calc, "c");
        assert_eq!(calc.operation_hint(), None);
    }

    #[test]
    fn test_backspace_to_empty_shows_zero() {
        let mut calc = Calculator::default();
        assert_eq!(run(&mut calc, "4<<"), vec!["4", "0", "0"]);
    }

    #[test]
    fn test_clear_resets() {
        let mut calc = Calculator::default();
        let readouts = run(&mut calc, "9x9= c");
        assert_eq!(readouts.last().map(String::as_str), Some("0"));
        assert_eq!(readouts[3], "81");
        assert_eq!(calc.input_text(), "");
    }

    #[test]
    fn test_comma_locale() {
        let mut calc = Calculator::new(NumberFormat::COMMA);
        let readouts = run(&mut calc, "1.5 x 3 =");
        assert_eq!(readouts[2], "1,5");
        assert_eq!(readouts.last().map(String::as_str), Some("4,5"));
    }
}
