//! Arithmetic engine for the keypad calculator.
//!
//! This module provides functionality to:
//! - Track typed operands and a single pending operator
//! - Evaluate binary operations and normalize their results
//! - Hold the M+/M−/MR/MC memory register
//! - Parse keypad tokens

mod evaluation;
mod keys;
mod memory;
mod state;

pub use evaluation::{
    Computation, Operator, UnknownOperator, format_number, normalize_result, parse_operand,
};
pub use keys::{Key, UnknownKey, parse_keys};
pub use memory::Memory;
pub use state::{CalculatorState, INITIAL_OPERAND};
