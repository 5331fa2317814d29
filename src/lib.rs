//! A four-function desktop calculator.
//!
//! [`calculator`] holds the input/state machine and has no GUI dependency;
//! [`ui`] wraps it in a GPUI window and [`eval`] runs it headless.

pub mod calculator;
pub mod config;
pub mod eval;
pub mod ui;
