use std::io::{self, BufRead, Write};

use super::error::Error;
use common::types::LogEvaluation;
use log_solver_core::traits::LogSolver;

/// Runs one prompt session against stdin/stdout.
pub fn run<S: LogSolver>(solver: &S, terms: usize) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_session(&mut input, &mut output, solver, terms)
}

/// Prompts for a value and a base, evaluates `log_base(x)` and reports the
/// outcome on `output`.
///
/// A domain violation or an unparseable number is user error, not an
/// operational failure: it is reported as an `Error:` line and the session
/// still returns `Ok`. Only real I/O failures propagate to the caller.
pub fn run_session<R, W, S>(
    input: &mut R,
    output: &mut W,
    solver: &S,
    terms: usize,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
    S: LogSolver,
{
    match prompt_and_evaluate(input, output, solver, terms) {
        Ok(eval) => {
            writeln!(output, "log_{}({}) = {:.2}", eval.base, eval.x, eval.value)?;
        }
        Err(Error::Domain(e)) => {
            writeln!(output, "Error: {}", e)?;
        }
        Err(Error::ParseFloat(e)) => {
            writeln!(output, "Error: {}", e)?;
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

fn prompt_and_evaluate<R, W, S>(
    input: &mut R,
    output: &mut W,
    solver: &S,
    terms: usize,
) -> Result<LogEvaluation, Error>
where
    R: BufRead,
    W: Write,
    S: LogSolver,
{
    let x = read_value(input, output, "Enter the value of x: ")?;
    let base = read_value(input, output, "Enter the base (b): ")?;

    let value = solver.log_base(x, base, terms)?;

    Ok(LogEvaluation { x, base, value })
}

fn read_value<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<f64, Error>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(Error::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed before a value was entered",
        )));
    }

    Ok(line.trim().parse::<f64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_solver_core::AtanhLogSolver;
    use std::io::Cursor;

    const TERMS: usize = 10000;

    fn run_with_input(input: &str) -> (Result<(), Error>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();

        let result = run_session(&mut reader, &mut output, &AtanhLogSolver, TERMS);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_session_reports_result_to_two_decimals() {
        let (result, output) = run_with_input("8\n2\n");

        assert!(result.is_ok());
        assert!(output.contains("Enter the value of x: "));
        assert!(output.contains("Enter the base (b): "));
        assert!(output.contains("log_2(8) = 3.00"), "output was: {}", output);
    }

    #[test]
    fn test_session_reports_unit_base_as_user_error() {
        let (result, output) = run_with_input("5\n1\n");

        assert!(result.is_ok(), "user error must not fail the session");
        assert!(
            output.contains("Error: log_b(x) is undefined for b = 1."),
            "output was: {}",
            output
        );
    }

    #[test]
    fn test_session_reports_negative_input_as_user_error() {
        let (result, output) = run_with_input("-5\n2\n");

        assert!(result.is_ok());
        assert!(
            output.contains("Error: ln(x) is undefined for x <= 0"),
            "output was: {}",
            output
        );
    }

    #[test]
    fn test_session_reports_unparseable_number_as_user_error() {
        let (result, output) = run_with_input("not-a-number\n");

        assert!(result.is_ok());
        assert!(output.contains("Error: "), "output was: {}", output);
    }

    #[test]
    fn test_session_fails_on_closed_input() {
        let (result, _) = run_with_input("");

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
