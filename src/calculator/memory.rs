//! The M+/M−/MR/MC memory register.

use super::evaluation::parse_operand;

/// A single accumulator, starting at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memory {
    value: f64,
}

impl Memory {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Add the operand text; text that isn't a number counts as zero.
    pub fn add(&mut self, operand: &str) {
        self.value += operand_value(operand);
    }

    pub fn subtract(&mut self, operand: &str) {
        self.value -= operand_value(operand);
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}

fn operand_value(operand: &str) -> f64 {
    parse_operand(operand)
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates() {
        let mut memory = Memory::default();
        memory.add("10");
        memory.add("2.5");
        memory.subtract("4");
        assert_eq!(memory.value(), 8.5);
        memory.clear();
        assert_eq!(memory.value(), 0.0);
    }

    #[test]
    fn test_non_numeric_counts_as_zero() {
        let mut memory = Memory::default();
        memory.add("3");
        memory.add("We're oddly perfect for each other.");
        memory.subtract("NaN");
        assert_eq!(memory.value(), 3.0);
    }
}
