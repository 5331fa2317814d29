//! Headless evaluation of key scripts, used by `zcalc eval`.

use serde::Serialize;
use tracing::debug;

use crate::calculator::{CalcError, Calculator, NumberFormat, parse_keys};

/// State of the calculator after a key script has been pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalReport {
    /// What the display reads after the last key.
    pub display: String,
    /// The running result.
    pub result: String,
    /// The operand still being typed.
    pub input: String,
    /// Display after every key, in order.
    pub trace: Vec<String>,
}

/// How an [`EvalReport`] is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputMode {
    pub trace: bool,
    pub json: bool,
}

/// Press every key of `script` on a fresh calculator.
pub fn evaluate(format: NumberFormat, script: &str) -> Result<EvalReport, CalcError> {
    let keys = parse_keys(script)?;
    debug!(count = keys.len(), %format, "evaluating keys");

    let mut calculator = Calculator::new(format);
    let trace: Vec<String> = keys.into_iter().map(|key| calculator.press(key)).collect();

    Ok(EvalReport {
        display: trace
            .last()
            .cloned()
            .unwrap_or_else(|| calculator.calculation_result()),
        result: calculator.calculation_result(),
        input: calculator.input_text().to_string(),
        trace,
    })
}

impl EvalReport {
    /// Render for stdout. The trace is only part of JSON output when asked for.
    pub fn render(&self, mode: OutputMode) -> Result<String, serde_json::Error> {
        if mode.json {
            #[derive(Serialize)]
            struct JsonReport<'a> {
                display: &'a str,
                result: &'a str,
                input: &'a str,
                #[serde(skip_serializing_if = "Option::is_none")]
                trace: Option<&'a [String]>,
            }

            return serde_json::to_string_pretty(&JsonReport {
                display: &self.display,
                result: &self.result,
                input: &self.input,
                trace: mode.trace.then_some(self.trace.as_slice()),
            });
        }

        if mode.trace {
            Ok(self.trace.join("\n"))
        } else {
            Ok(self.display.clone())
        }
    }
}
