use crate::domain::model::Operation;

/// Pure integer arithmetic. Holds no state and records nothing.
///
/// Operands are `i64`. Overflow wraps around in every build profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        a.wrapping_mul(b)
    }

    pub fn subtract(&self, a: i64, b: i64) -> i64 {
        a.wrapping_sub(b)
    }

    pub fn apply(&self, operation: Operation, a: i64, b: i64) -> i64 {
        match operation {
            Operation::Addition => self.add(a, b),
            Operation::Multiplication => self.multiply(a, b),
            Operation::Subtraction => self.subtract(a, b),
        }
    }
}
