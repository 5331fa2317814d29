//! The logic of a very simple calculator.
//!
//! Evaluation is deferred the way a pocket calculator defers it: typing
//! digits starts the next operand, and only the following operation press
//! applies the operation chosen before that operand. Two fields track this:
//! `next_operation` is the last operation pressed, and `pending_operation`
//! is set from it once an operand token arrives. The one-press lag between
//! them is what makes `5 + 3 +` show `8` on the second `+`.

use tracing::debug;

use super::accumulator::Calculation;
use super::format::NumberFormat;
use super::input::InputNumber;
use super::operation::Operation;
use super::token::InputToken;

/// A calculator with a single running result and deferred operations.
#[derive(Clone, Debug)]
pub struct Calculator {
    format: NumberFormat,
    calc: Calculation,
    input: InputNumber,
    /// Operation that will run when the next operation button is pressed.
    pending_operation: Option<Operation>,
    /// The last operation button pressed.
    next_operation: Operation,
    /// Like `next_operation`, but `None` until an operation is pressed.
    operation_hint: Option<Operation>,
}

impl Calculator {
    pub fn new(format: NumberFormat) -> Self {
        Self {
            format,
            calc: Calculation::new(0.0),
            input: InputNumber::new(format),
            pending_operation: None,
            next_operation: Operation::Add,
            operation_hint: None,
        }
    }

    /// Receive an operation press.
    pub fn operation(&mut self, operation: Operation) {
        self.next_operation = operation;
        self.operation_hint = Some(operation);

        if let Some(pending) = self.pending_operation.take() {
            let operand = self.input.number();
            match pending {
                Operation::Add => self.calc.add(operand),
                Operation::Sub => self.calc.sub(operand),
                Operation::Mul => self.calc.mul(operand),
                Operation::Div => self.calc.div(operand),
                // Applied like a binary operation, but yields its second
                // operand and drops the running total.
                Operation::Ans => self.calc = Calculation::new(operand),
            }
            debug!(
                %pending,
                operand,
                result = self.calc.answer(),
                "applied pending operation"
            );
        }

        self.input = InputNumber::new(self.format);
    }

    /// Receive numerical input.
    pub fn input(&mut self, token: InputToken) {
        if self.input.push(token) {
            self.pending_operation = Some(self.next_operation);
        }
    }

    /// Take back the last token of the operand being typed.
    ///
    /// Pending state is left alone; an operand erased entirely counts as 0.
    pub fn backspace(&mut self) -> Option<InputToken> {
        self.input.pop()
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        self.calc = Calculation::new(0.0);
        self.pending_operation = None;
        self.next_operation = Operation::Add;
        self.operation_hint = None;
        self.input = InputNumber::new(self.format);
    }

    /// The operand being typed, empty if none.
    pub fn input_text(&self) -> &str {
        self.input.as_str()
    }

    /// The running result, formatted for display.
    pub fn calculation_result(&self) -> String {
        self.format.format_result(self.calc.answer())
    }

    /// The running result as a number.
    pub fn answer(&self) -> f64 {
        self.calc.answer()
    }

    pub fn queued_operation(&self) -> Operation {
        self.next_operation
    }

    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    /// The operation chosen since the last reset, shown next to the display.
    ///
    /// Unlike [`pending_operation`](Self::pending_operation) this is set as
    /// soon as the operation is pressed, before its operand is typed.
    pub fn operation_hint(&self) -> Option<Operation> {
        self.operation_hint
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(NumberFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InputToken::*;

    fn type_digits(calc: &mut Calculator, tokens: &[InputToken]) {
        for &token in tokens {
            calc.input(token);
        }
    }

    #[test]
    fn test_reset_state() {
        let mut calc = Calculator::default();
        assert_eq!(calc.calculation_result(), "0");
        assert_eq!(calc.input_text(), "");

        type_digits(&mut calc, &[Digit4, Digit2]);
        calc.operation(Operation::Mul);
        type_digits(&mut calc, &[Digit3]);
        calc.reset();

        assert_eq!(calc.calculation_result(), "0");
        assert_eq!(calc.input_text(), "");
        assert_eq!(calc.pending_operation(), None);
        assert_eq!(calc.queued_operation(), Operation::Add);
    }

    #[test]
    fn test_chained_addition() {
        let mut calc = Calculator::default();

        calc.operation(Operation::Add);
        assert_eq!(calc.calculation_result(), "0");

        calc.input(Digit5);
        calc.operation(Operation::Add);
        assert_eq!(calc.calculation_result(), "5");

        calc.input(Digit3);
        calc.operation(Operation::Add);
        assert_eq!(calc.calculation_result(), "8");
    }

    #[test]
    fn test_operation_applies_with_one_press_lag() {
        let mut calc = Calculator::default();

        calc.input(Digit8);
        assert_eq!(calc.pending_operation(), Some(Operation::Add));

        calc.operation(Operation::Div);
        assert_eq!(calc.calculation_result(), "8");
        assert_eq!(calc.pending_operation(), None);
        assert_eq!(calc.queued_operation(), Operation::Div);

        calc.input(Digit4);
        assert_eq!(calc.pending_operation(), Some(Operation::Div));

        // The pending division runs here, not the replay.
        calc.operation(Operation::Ans);
        assert_eq!(calc.calculation_result(), "2");
        assert_eq!(calc.queued_operation(), Operation::Ans);

        // Replay only fires once it is itself pending.
        calc.input(Digit7);
        assert_eq!(calc.pending_operation(), Some(Operation::Ans));
        calc.operation(Operation::Add);
        assert_eq!(calc.calculation_result(), "7");

        calc.input(Digit1);
        calc.operation(Operation::Ans);
        assert_eq!(calc.calculation_result(), "8");
    }

    #[test]
    fn test_ans_without_operand_keeps_total() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, &[Digit9]);
        calc.operation(Operation::Ans);
        calc.operation(Operation::Ans);
        assert_eq!(calc.calculation_result(), "9");
    }

    #[test]
    fn test_division_by_zero() {
        let mut calc = Calculator::default();
        calc.input(Digit5);
        calc.operation(Operation::Div);
        calc.input(Digit0);
        calc.operation(Operation::Add);
        assert_eq!(calc.answer(), f64::INFINITY);
        assert_eq!(calc.calculation_result(), "∞");
    }

    #[test]
    fn test_subtract_and_multiply_decimals() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, &[Digit1, Digit0]);
        calc.operation(Operation::Sub);
        type_digits(&mut calc, &[Digit2, DecimalSeparator, Digit5]);
        calc.operation(Operation::Mul);
        assert_eq!(calc.calculation_result(), "7.5");

        type_digits(&mut calc, &[Digit2]);
        calc.operation(Operation::Ans);
        assert_eq!(calc.calculation_result(), "15");
    }

    #[test]
    fn test_operation_press_clears_input() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, &[Digit1, Digit2]);
        assert_eq!(calc.input_text(), "12");
        calc.operation(Operation::Sub);
        assert_eq!(calc.input_text(), "");
    }

    #[test]
    fn test_lone_separator_and_duplicate_separator() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, &[Digit6]);
        calc.operation(Operation::Mul);

        type_digits(&mut calc, &[DecimalSeparator]);
        assert_eq!(calc.pending_operation(), Some(Operation::Mul));
        calc.operation(Operation::Sub);
        // A lone separator is a zero operand.
        assert_eq!(calc.calculation_result(), "0");

        type_digits(&mut calc, &[Digit1, DecimalSeparator, DecimalSeparator, Digit5]);
        assert_eq!(calc.input_text(), "1.5");
    }

    #[test]
    fn test_backspace_edits_operand() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, &[Digit1, Digit2, Digit3]);
        assert_eq!(calc.backspace(), Some(Digit3));
        assert_eq!(calc.input_text(), "12");
        calc.operation(Operation::Add);
        assert_eq!(calc.calculation_result(), "12");
        assert_eq!(calc.backspace(), None);
    }

    #[test]
    fn test_locale_separator_in_result() {
        let mut calc = Calculator::new(NumberFormat::COMMA);
        type_digits(&mut calc, &[Digit1, DecimalSeparator, Digit5]);
        assert_eq!(calc.input_text(), "1,5");
        calc.operation(Operation::Mul);
        type_digits(&mut calc, &[Digit3]);
        calc.operation(Operation::Ans);
        assert_eq!(calc.calculation_result(), "4,5");
    }

    #[test]
    fn test_operation_hint_follows_presses() {
        let mut calc = Calculator::default();
        assert_eq!(calc.operation_hint(), None);

        type_digits(&mut calc, &[Digit5]);
        assert_eq!(calc.operation_hint(), None);

        calc.operation(Operation::Mul);
        assert_eq!(calc.input_text(), "");
        assert_eq!(calc.pending_operation(), None);
        assert_eq!(calc.operation_hint(), Some(Operation::Mul));

        type_digits(&mut calc, &[Digit2]);
        assert_eq!(calc.operation_hint(), Some(Operation::Mul));

        calc.operation(Operation::Sub);
        calc.operation(Operation::Div);
        assert_eq!(calc.operation_hint(), Some(Operation::Div));

        calc.reset();
        assert_eq!(calc.operation_hint(), None);
    }

    #[test]
    fn test_readouts_are_idempotent() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, &[Digit2, DecimalSeparator]);
        assert_eq!(calc.input_text(), calc.input_text());
        calc.operation(Operation::Div);
        let first = calc.calculation_result();
        assert_eq!(first, calc.calculation_result());
        assert_eq!(first, "2");
    }
}
