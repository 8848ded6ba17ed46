use crate::core::calculator::Calculator;
use crate::core::file_logger::FileLogger;
use crate::domain::model::{LogEntry, Operation};
use crate::domain::ports::Sink;
use crate::utils::error::Result;

/// Composes a [`Calculator`] and a [`FileLogger`].
///
/// Each `*_and_log` call computes through the calculator, formats one
/// [`LogEntry`], hands it to the logger and returns the result. Sink
/// failures are returned to the caller.
#[derive(Debug, Clone)]
pub struct CalculatorService<S: Sink> {
    calculator: Calculator,
    logger: FileLogger<S>,
}

impl<S: Sink> CalculatorService<S> {
    pub fn new(sink: S) -> Self {
        Self::from_parts(Calculator::new(), FileLogger::new(sink))
    }

    pub fn from_parts(calculator: Calculator, logger: FileLogger<S>) -> Self {
        Self { calculator, logger }
    }

    pub fn add_and_log(&self, a: i64, b: i64) -> Result<i64> {
        self.compute_and_record(Operation::Addition, a, b)
    }

    pub fn multiply_and_log(&self, a: i64, b: i64) -> Result<i64> {
        self.compute_and_record(Operation::Multiplication, a, b)
    }

    pub fn subtract_and_log(&self, a: i64, b: i64) -> Result<i64> {
        self.compute_and_record(Operation::Subtraction, a, b)
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn logger(&self) -> &FileLogger<S> {
        &self.logger
    }

    fn compute_and_record(&self, operation: Operation, a: i64, b: i64) -> Result<i64> {
        let result = self.calculator.apply(operation, a, b);
        let entry = LogEntry::new(operation, a, b, result);
        self.logger.save_to_file(&entry.to_string())?;
        tracing::debug!(?operation, result, "calculation recorded");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::utils::error::CalcError;

    struct BrokenSink;

    impl Sink for BrokenSink {
        fn write_line(&self, _line: &str) -> Result<()> {
            Err(CalcError::SinkUnavailable {
                sink: "broken".to_string(),
                reason: "offline".to_string(),
            })
        }
    }

    #[test]
    fn test_add_and_log() {
        let sink = MemorySink::new();
        let service = CalculatorService::new(sink.clone());

        assert_eq!(service.add_and_log(5, 3).unwrap(), 8);
        assert_eq!(sink.entries(), vec!["Addition: 5 + 3 = 8"]);
    }

    #[test]
    fn test_multiply_and_log() {
        let sink = MemorySink::new();
        let service = CalculatorService::new(sink.clone());

        assert_eq!(service.multiply_and_log(4, 5).unwrap(), 20);
        assert_eq!(sink.entries(), vec!["Multiplication: 4 * 5 = 20"]);
    }

    #[test]
    fn test_subtract_and_log() {
        let sink = MemorySink::new();
        let service = CalculatorService::new(sink.clone());

        assert_eq!(service.subtract_and_log(3, 10).unwrap(), -7);
        assert_eq!(sink.entries(), vec!["Subtraction: 3 - 10 = -7"]);
    }

    #[test]
    fn test_one_entry_per_operation() {
        let sink = MemorySink::new();
        let service = CalculatorService::new(sink.clone());

        service.add_and_log(1, 1).unwrap();
        service.multiply_and_log(2, 2).unwrap();
        service.subtract_and_log(3, 3).unwrap();

        assert_eq!(
            sink.entries(),
            vec![
                "Addition: 1 + 1 = 2",
                "Multiplication: 2 * 2 = 4",
                "Subtraction: 3 - 3 = 0",
            ]
        );
    }

    #[test]
    fn test_overflowing_multiply_still_records() {
        let sink = MemorySink::new();
        let service = CalculatorService::new(sink.clone());

        assert_eq!(service.multiply_and_log(i64::MAX, 2).unwrap(), -2);
        assert_eq!(
            sink.entries(),
            vec![format!("Multiplication: {} * 2 = -2", i64::MAX)]
        );
    }

    #[test]
    fn test_sink_failure_propagates() {
        let service = CalculatorService::new(BrokenSink);

        let err = service.add_and_log(5, 3).unwrap_err();
        assert!(matches!(err, CalcError::SinkUnavailable { .. }));
    }
}
