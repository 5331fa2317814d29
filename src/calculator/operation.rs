//! The operations a calculator button can request.

use std::fmt;
use std::str::FromStr;

use super::error::CalcError;

/// All valid operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    /// Restart from the operand entered after it, discarding the
    /// running total.
    Ans,
}

impl Operation {
    pub const ALL: [Operation; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Ans];

    /// The symbol shown on the button for this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "x",
            Self::Div => "/",
            Self::Ans => "ans",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(rep: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == rep)
            .ok_or_else(|| CalcError::UnknownOperation(rep.to_string()))
    }
}
