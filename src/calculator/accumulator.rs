//! Running arithmetic result.

/// Holds the running result and applies arithmetic to it in place.
///
/// Plain IEEE-754 semantics: dividing by zero yields an infinity or NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calculation {
    result: f64,
}

impl Calculation {
    pub fn new(start_operand: f64) -> Self {
        Self {
            result: start_operand,
        }
    }

    pub fn add(&mut self, n: f64) {
        self.result += n;
    }

    pub fn sub(&mut self, n: f64) {
        self.result -= n;
    }

    pub fn mul(&mut self, n: f64) {
        self.result *= n;
    }

    pub fn div(&mut self, n: f64) {
        self.result /= n;
    }

    /// The result of all calculations so far.
    pub fn answer(&self) -> f64 {
        self.result
    }
}
