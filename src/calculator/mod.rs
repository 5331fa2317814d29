//! Calculator core: typed input, running result and the operation state
//! machine that ties them together.
//!
//! This module provides:
//! - Tokens and operations with their display glyphs
//! - Input assembly with single-token undo
//! - The deferred-evaluation engine
//! - Result formatting and clipboard copy

mod accumulator;
mod clipboard;
mod engine;
mod error;
mod format;
mod input;
mod keys;
mod operation;
mod token;

pub use accumulator::Calculation;
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::Calculator;
pub use error::CalcError;
pub use format::{MAX_FRACTION_DIGITS, NumberFormat};
pub use input::InputNumber;
pub use keys::{Key, parse_keys};
pub use operation::Operation;
pub use token::InputToken;
