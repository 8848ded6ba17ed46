//! Narrated walk-through comparing the tangled calculator with the split design.

use crate::core::calculator::Calculator;
use crate::core::file_logger::FileLogger;
use crate::core::service::CalculatorService;
use crate::core::violation::CalculatorViolation;
use crate::domain::ports::Sink;
use crate::utils::error::Result;
use std::io::Write;

/// Runs the demo, writing narration to `out`.
///
/// `make_sink` is called once per unit that records entries, so each gets
/// its own sink.
pub fn run_demo<W, F>(out: &mut W, mut make_sink: F) -> Result<()>
where
    W: Write,
    F: FnMut() -> Result<Box<dyn Sink>>,
{
    writeln!(out, "=== SIMPLE SRP EXAMPLE ===\n")?;

    violation_section(out, make_sink()?)?;

    writeln!(out, "\n{}", "=".repeat(40))?;

    corrected_section(out, make_sink()?)?;

    writeln!(out, "\n--- Using Calculator independently ---")?;
    let math_only = Calculator::new();
    writeln!(out, "Math only: {}", math_only.add(10, 20))?;
    writeln!(out, "Math only: {}", math_only.multiply(4, 5))?;

    writeln!(out, "\n--- Using FileLogger independently ---")?;
    out.flush()?;
    let file_only = FileLogger::new(make_sink()?);
    file_only.save_to_file("Some other data")?;

    tracing::info!("demo finished");
    Ok(())
}

fn violation_section<W: Write>(out: &mut W, sink: Box<dyn Sink>) -> Result<()> {
    writeln!(out, "❌ VIOLATION of SRP:")?;
    writeln!(out, "CalculatorViolation does TWO things:")?;
    writeln!(out, "1. Mathematical calculations")?;
    writeln!(out, "2. File operations")?;
    writeln!(out)?;
    // Sink output may share stdout with the narration.
    out.flush()?;

    let bad_calculator = CalculatorViolation::new(sink);
    let result = bad_calculator.add(5, 3)?;
    writeln!(out, "Result: {}", result)?;

    writeln!(out, "\nProblems with this approach:")?;
    writeln!(out, "- If math rules change → modify this type")?;
    writeln!(out, "- If file format changes → modify this type")?;
    writeln!(out, "- Hard to test math without file operations")?;
    writeln!(out, "- Hard to reuse math without file operations")?;
    Ok(())
}

fn corrected_section<W: Write>(out: &mut W, sink: Box<dyn Sink>) -> Result<()> {
    writeln!(out, "\n✅ CORRECT SRP Implementation:")?;
    writeln!(out, "Each type has ONE responsibility:")?;
    writeln!(out, "- Calculator: Only math operations")?;
    writeln!(out, "- FileLogger: Only file operations")?;
    writeln!(out, "- CalculatorService: Orchestrates both")?;
    writeln!(out)?;
    out.flush()?;

    let good_calculator = CalculatorService::new(sink);
    let result = good_calculator.add_and_log(5, 3)?;
    writeln!(out, "Result: {}", result)?;

    writeln!(out, "\nBenefits of this approach:")?;
    writeln!(out, "- Calculator can be used without file operations")?;
    writeln!(out, "- FileLogger can be used for other purposes")?;
    writeln!(out, "- Easy to test math operations separately")?;
    writeln!(out, "- Easy to change file format without touching math")?;
    writeln!(out, "- Each type has only ONE reason to change")?;
    Ok(())
}
