//! Binary operations and result normalization.
//!
//! Operands arrive as the text the user typed, so parsing is lenient and a
//! bad operand never aborts a calculation: it simply computes to zero.

use std::fmt;
use std::str::FromStr;

/// Decimal places kept when normalizing a result.
const RESULT_PRECISION: usize = 10;

/// The four binary operators a calculation can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol shown on the keypad and in history lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator with IEEE semantics (dividing by zero is not trapped).
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when text does not name an operator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {0}")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "x" | "X" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

/// A finished binary calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct Computation {
    /// Left operand as parsed (`NaN` when the text was not a number).
    pub lhs: f64,
    pub operator: Operator,
    /// Right operand as parsed (`NaN` when the text was not a number).
    pub rhs: f64,
    /// Raw computed value before normalization.
    pub value: f64,
    /// Normalized result text.
    pub result: String,
}

impl Computation {
    /// Evaluate `lhs op rhs` from operand text.
    ///
    /// If either operand fails to parse, the value is zero.
    pub fn run(lhs: &str, operator: Operator, rhs: &str) -> Self {
        let lhs = parse_operand(lhs).unwrap_or(f64::NAN);
        let rhs = parse_operand(rhs).unwrap_or(f64::NAN);

        let value = if lhs.is_nan() || rhs.is_nan() {
            0.0
        } else {
            operator.apply(lhs, rhs)
        };

        Self {
            lhs,
            operator,
            rhs,
            value,
            result: normalize_result(value),
        }
    }

    /// The history line, e.g. `0.1 + 0.2 = 0.3`.
    pub fn expression(&self) -> String {
        format!(
            "{} {} {} = {}",
            format_number(self.lhs),
            self.operator,
            format_number(self.rhs),
            self.result
        )
    }
}

/// Parse operand text as a float.
///
/// Accepts the non-finite spellings this crate itself produces
/// (`Infinity`, `-Infinity`, `NaN`).
pub fn parse_operand(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    match trimmed {
        "" => None,
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => trimmed.parse::<f64>().ok(),
    }
}

/// Format a value as plain text.
///
/// Negative zero prints as `0`, non-finite values as `Infinity`,
/// `-Infinity` or `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Round to ten decimal places and drop trailing zeros.
///
/// Removes binary artifacts such as `0.30000000000000004`.
pub fn normalize_result(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }

    let fixed = format!("{:.*}", RESULT_PRECISION, value);
    let rounded = fixed.parse::<f64>().unwrap_or(value);
    format_number(rounded)
}
