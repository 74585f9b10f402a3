//! The calculator's input state machine.
//!
//! [`CalculatorState`] holds what the user has typed and the single pending
//! operation. Every transition is a plain method on the value; deciding what
//! to do with a finished [`Computation`] (record it, or hand it to the
//! response table) belongs to the caller.

use lazy_static::lazy_static;
use regex::Regex;

use super::evaluation::{Computation, Operator, format_number, parse_operand};

lazy_static! {
    /// Leading zeros directly followed by another digit.
    static ref LEADING_ZEROS: Regex = Regex::new(r"^0+(\d)").unwrap();
}

/// Operand text shown when nothing has been typed.
pub const INITIAL_OPERAND: &str = "0";

/// Input state for a single pending binary operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorState {
    /// Text being typed (or the last result / response shown).
    pub current_operand: String,
    /// Left-hand operand, empty when no operator has been chosen.
    pub previous_operand: String,
    pub pending_operator: Option<Operator>,
    /// The next digit starts a new operand instead of extending this one.
    pub awaiting_fresh_input: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: INITIAL_OPERAND.to_string(),
            previous_operand: String::new(),
            pending_operator: None,
            awaiting_fresh_input: false,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit or the decimal point to the current operand.
    ///
    /// A second decimal point is ignored.
    pub fn append_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit() || digit == '.');

        if self.awaiting_fresh_input {
            self.current_operand = INITIAL_OPERAND.to_string();
            self.awaiting_fresh_input = false;
        }

        if digit == '.' && self.current_operand.contains('.') {
            return;
        }

        if self.current_operand == INITIAL_OPERAND && digit != '.' {
            self.current_operand = digit.to_string();
        } else {
            self.current_operand.push(digit);
        }

        self.current_operand = LEADING_ZEROS
            .replace(&self.current_operand, "$1")
            .into_owned();
    }

    /// Whether an operator is waiting for its right-hand operand.
    pub fn has_pending(&self) -> bool {
        self.pending_operator.is_some() && !self.previous_operand.is_empty()
    }

    /// Whether the pending operation should run before `op` replaces it.
    ///
    /// Only true once a new right-hand operand has been typed; pressing two
    /// operators in a row just swaps the operator.
    pub fn should_chain(&self) -> bool {
        self.has_pending() && !self.awaiting_fresh_input
    }

    /// Make `op` the pending operator, with the current operand on its left.
    ///
    /// Callers run any chained computation (see [`Self::should_chain`])
    /// first. Does nothing when the current operand is empty.
    pub fn set_operator(&mut self, op: Operator) {
        if self.current_operand.is_empty() {
            return;
        }

        self.previous_operand = self.current_operand.clone();
        self.pending_operator = Some(op);
        self.awaiting_fresh_input = true;
    }

    /// Run the pending operation without changing any state.
    pub fn compute(&self) -> Option<Computation> {
        let operator = self.pending_operator?;
        if self.previous_operand.is_empty() {
            return None;
        }
        Some(Computation::run(
            &self.previous_operand,
            operator,
            &self.current_operand,
        ))
    }

    /// Show `display` as the new operand and drop the finished operation.
    pub fn settle(&mut self, display: String) {
        self.current_operand = display;
        self.previous_operand.clear();
        self.pending_operator = None;
        self.awaiting_fresh_input = true;
    }

    /// Negate the current operand. `0` stays `0`.
    pub fn toggle_sign(&mut self) {
        let value = parse_operand(&self.current_operand).unwrap_or(f64::NAN);
        self.current_operand = format_number(-value);
    }

    /// Divide the current operand by 100.
    pub fn percent(&mut self) {
        let value = parse_operand(&self.current_operand).unwrap_or(f64::NAN);
        self.current_operand = format_number(value / 100.0);
    }

    /// Replace the current operand with a value from elsewhere (memory recall).
    pub fn recall(&mut self, value: f64) {
        self.current_operand = format_number(value);
        self.awaiting_fresh_input = true;
    }

    /// Reset only the operand being typed.
    ///
    /// The `0` left behind counts as a typed operand, so a following
    /// operator still finishes the pending operation.
    pub fn clear_entry(&mut self) {
        self.current_operand = INITIAL_OPERAND.to_string();
        self.awaiting_fresh_input = false;
    }

    /// Reset everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether there is anything for clear-entry to remove.
    pub fn has_input(&self) -> bool {
        self.current_operand != INITIAL_OPERAND || !self.previous_operand.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        for key in keys.chars() {
            state.append_digit(key);
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.current_operand, "0");
        assert!(state.previous_operand.is_empty());
        assert!(state.pending_operator.is_none());
        assert!(!state.awaiting_fresh_input);
        assert!(!state.has_input());
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(typed("007").current_operand, "7");
        assert_eq!(typed("000").current_operand, "0");
        assert_eq!(typed("0.5").current_operand, "0.5");
        assert_eq!(typed(".5").current_operand, "0.5");
        assert_eq!(typed("100").current_operand, "100");
    }

    #[test]
    fn test_second_decimal_point_ignored() {
        assert_eq!(typed("1.2.3").current_operand, "1.23");
        assert_eq!(typed("..").current_operand, "0.");
    }

    #[test]
    fn test_digits_concatenate_to_value() {
        for keys in ["12345", "3.14159", "0.001", "900.5"] {
            let state = typed(keys);
            assert_eq!(
                parse_operand(&state.current_operand),
                keys.parse::<f64>().ok()
            );
        }
    }

    #[test]
    fn test_fresh_input_replaces_operand() {
        let mut state = typed("12");
        state.set_operator(Operator::Add);
        state.append_digit('3');
        assert_eq!(state.previous_operand, "12");
        assert_eq!(state.current_operand, "3");
        assert!(!state.awaiting_fresh_input);
    }

    #[test]
    fn test_repeated_operator_does_not_chain() {
        let mut state = typed("3");
        state.set_operator(Operator::Add);
        assert!(!state.should_chain());
        state.set_operator(Operator::Multiply);
        assert_eq!(state.pending_operator, Some(Operator::Multiply));
        assert_eq!(state.previous_operand, "3");
    }

    #[test]
    fn test_chain_after_new_operand() {
        let mut state = typed("3");
        state.set_operator(Operator::Add);
        state.append_digit('4');
        assert!(state.should_chain());
        assert_eq!(state.compute().map(|c| c.result), Some("7".to_string()));
    }

    #[test]
    fn test_empty_operand_ignores_operator() {
        let mut state = CalculatorState::new();
        state.current_operand.clear();
        state.set_operator(Operator::Add);
        assert!(state.pending_operator.is_none());
    }

    #[test]
    fn test_compute_without_operator() {
        assert!(typed("5").compute().is_none());
    }

    #[test]
    fn test_settle_resets_operation() {
        let mut state = typed("6");
        state.set_operator(Operator::Divide);
        state.append_digit('3');
        let result = state.compute().map(|c| c.result).unwrap_or_default();
        state.settle(result);
        assert_eq!(state.current_operand, "2");
        assert!(state.previous_operand.is_empty());
        assert!(state.pending_operator.is_none());
        assert!(state.awaiting_fresh_input);
    }

    #[test]
    fn test_toggle_sign() {
        let mut state = typed("0");
        state.toggle_sign();
        assert_eq!(state.current_operand, "0");

        let mut state = typed("12.5");
        state.toggle_sign();
        assert_eq!(state.current_operand, "-12.5");
        state.toggle_sign();
        assert_eq!(state.current_operand, "12.5");
    }

    #[test]
    fn test_percent() {
        let mut state = typed("50");
        state.percent();
        assert_eq!(state.current_operand, "0.5");
    }

    #[test]
    fn test_clear_entry_keeps_operation() {
        let mut state = typed("8");
        state.set_operator(Operator::Subtract);
        state.append_digit('9');
        state.clear_entry();
        assert_eq!(state.current_operand, "0");
        assert_eq!(state.previous_operand, "8");
        assert!(state.has_input());

        state.clear();
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn test_clear_entry_after_operator_chains() {
        let mut state = typed("8");
        state.set_operator(Operator::Subtract);
        state.clear_entry();
        assert!(!state.awaiting_fresh_input);
        assert!(state.should_chain());
        assert_eq!(state.compute().map(|c| c.result), Some("8".to_string()));
    }
}
