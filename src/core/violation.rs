use crate::domain::ports::Sink;
use crate::utils::error::Result;

/// Counter-example: arithmetic and recording tangled in one type.
///
/// Every arithmetic method writes to the sink, so the math cannot be used or
/// tested on its own. Kept only for comparison with
/// [`CalculatorService`](crate::core::service::CalculatorService).
#[derive(Debug, Clone)]
pub struct CalculatorViolation<S: Sink> {
    sink: S,
}

impl<S: Sink> CalculatorViolation<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn add(&self, a: i64, b: i64) -> Result<i64> {
        let result = a.wrapping_add(b);
        self.save_to_file(&format!("Addition: {} + {} = {}", a, b, result))?;
        Ok(result)
    }

    pub fn multiply(&self, a: i64, b: i64) -> Result<i64> {
        let result = a.wrapping_mul(b);
        self.save_to_file(&format!("Multiplication: {} * {} = {}", a, b, result))?;
        Ok(result)
    }

    fn save_to_file(&self, data: &str) -> Result<()> {
        self.sink.write_line(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;

    #[test]
    fn test_arithmetic_always_records() {
        let sink = MemorySink::new();
        let calculator = CalculatorViolation::new(sink.clone());

        assert_eq!(calculator.add(5, 3).unwrap(), 8);
        assert_eq!(calculator.multiply(4, 5).unwrap(), 20);

        assert_eq!(
            sink.entries(),
            vec!["Addition: 5 + 3 = 8", "Multiplication: 4 * 5 = 20"]
        );
    }
}
