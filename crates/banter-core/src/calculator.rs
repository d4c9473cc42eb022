//! The calculator sub-mode.
//!
//! A two-state machine fed one line at a time by the caller, so it can be
//! driven from any line source. Each expression is evaluated independently;
//! there is no running total and no previous-result feature.

use banter_types::error::CalcError;

use crate::dispatch::phrases;
use crate::normalize::normalize;

/// Sub-mode lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcState {
    /// Prompting for and evaluating expressions.
    Active,
    /// Control has returned to the caller.
    Terminated,
}

/// What one fed line produced.
#[derive(Debug, PartialEq, Eq)]
pub enum CalcOutcome {
    /// A result or an inline error message; the session stays active.
    Reply(String),
    /// An exit phrase was seen; the session is now terminated.
    Exited,
}

/// One invocation of calculator mode. Created on entry, dropped on exit;
/// nothing carries over between invocations.
pub struct CalculatorSession {
    state: CalcState,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self {
            state: CalcState::Active,
        }
    }

    pub fn state(&self) -> CalcState {
        self.state
    }

    /// Handle one raw input line.
    ///
    /// Exit phrases ("done", "exit", "back", "quit", case-insensitive after
    /// trimming) terminate the session. Anything else is parsed as
    /// `<number> <operator> <number>`; failures become inline replies and
    /// the session stays active.
    pub fn feed_line(&mut self, raw: &str) -> CalcOutcome {
        debug_assert_eq!(self.state, CalcState::Active);

        let line = raw.trim();
        if phrases::CALC_EXIT.contains(&normalize(line).as_str()) {
            self.state = CalcState::Terminated;
            return CalcOutcome::Exited;
        }

        match evaluate_line(line) {
            Ok(echo) => CalcOutcome::Reply(format!("✅ {echo}")),
            Err(CalcError::Parse) => CalcOutcome::Reply(
                "⚠️  Please enter: <number> <operator> <number>  (e.g. 5 + 3)".to_string(),
            ),
            Err(CalcError::UnknownOperator(op)) => {
                CalcOutcome::Reply(format!("⚠️  Unknown operator '{op}'. Use + - * /"))
            }
            Err(CalcError::DivisionByZero) => CalcOutcome::Reply(
                "⚠️  Division by zero! The universe would implode. 🌌".to_string(),
            ),
        }
    }

    /// End of input counts as termination, same as an exit phrase.
    pub fn end_input(&mut self) {
        self.state = CalcState::Terminated;
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse and evaluate one expression, returning the formatted echo line
/// `<a> <op> <b> = <result>`.
fn evaluate_line(line: &str) -> Result<String, CalcError> {
    let (a, op, b) = parse_expression(line)?;
    let result = evaluate(a, op, b)?;
    Ok(format!(
        "{} {} {} = {}",
        format_number(a),
        op,
        format_number(b),
        format_number(result)
    ))
}

/// Parse exactly `<number> <operator> <number>`: three whitespace-separated
/// tokens, the middle one a single character.
fn parse_expression(line: &str) -> Result<(f64, char, f64), CalcError> {
    let mut tokens = line.split_whitespace();
    let (Some(lhs), Some(op), Some(rhs), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(CalcError::Parse);
    };

    let mut chars = op.chars();
    let (Some(op), None) = (chars.next(), chars.next()) else {
        return Err(CalcError::Parse);
    };

    let a: f64 = lhs.parse().map_err(|_| CalcError::Parse)?;
    let b: f64 = rhs.parse().map_err(|_| CalcError::Parse)?;
    Ok((a, op, b))
}

/// Apply one operator. `x` is an alias for multiply.
fn evaluate(a: f64, op: char, b: f64) -> Result<f64, CalcError> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' | 'x' => Ok(a * b),
        '/' if b == 0.0 => Err(CalcError::DivisionByZero),
        '/' => Ok(a / b),
        other => Err(CalcError::UnknownOperator(other)),
    }
}

/// Format with insignificant trailing fractional zeros trimmed; integral
/// values show no decimal point.
fn format_number(value: f64) -> String {
    let mut s = format!("{value:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(line: &str) -> String {
        let mut calc = CalculatorSession::new();
        match calc.feed_line(line) {
            CalcOutcome::Reply(msg) => msg,
            CalcOutcome::Exited => panic!("unexpected exit for '{line}'"),
        }
    }

    #[test]
    fn test_addition() {
        assert!(reply("5 + 3").ends_with("5 + 3 = 8"));
    }

    #[test]
    fn test_multiplication_x_alias() {
        assert!(reply("7 x 6").ends_with("7 x 6 = 42"));
    }

    #[test]
    fn test_division_fractional_result() {
        assert!(reply("7 / 2").ends_with("7 / 2 = 3.5"));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(reply("10 / 0").contains("Division by zero"));
    }

    #[test]
    fn test_parse_error_on_garbage_operand() {
        assert!(reply("abc + 2").contains("<number> <operator> <number>"));
    }

    #[test]
    fn test_unknown_operator() {
        assert!(reply("10 % 2").contains("Unknown operator '%'"));
    }

    #[test]
    fn test_operator_must_be_own_token() {
        // Whitespace around the operator is required.
        assert!(reply("5+3").contains("<number> <operator> <number>"));
    }

    #[test]
    fn test_too_many_tokens_is_parse_error() {
        assert!(reply("1 + 2 + 3").contains("<number> <operator> <number>"));
    }

    #[test]
    fn test_multichar_operator_token_is_parse_error() {
        assert!(reply("1 ++ 2").contains("<number> <operator> <number>"));
    }

    #[test]
    fn test_exit_phrases_terminate() {
        for phrase in ["done", "exit", "back", "quit", "  DONE  "] {
            let mut calc = CalculatorSession::new();
            assert_eq!(calc.feed_line(phrase), CalcOutcome::Exited);
            assert_eq!(calc.state(), CalcState::Terminated);
        }
    }

    #[test]
    fn test_errors_keep_session_active() {
        let mut calc = CalculatorSession::new();
        calc.feed_line("nonsense");
        assert_eq!(calc.state(), CalcState::Active);
        calc.feed_line("1 / 0");
        assert_eq!(calc.state(), CalcState::Active);
    }

    #[test]
    fn test_end_input_terminates() {
        let mut calc = CalculatorSession::new();
        calc.end_input();
        assert_eq!(calc.state(), CalcState::Terminated);
    }

    #[test]
    fn test_negative_numbers_and_floats() {
        assert!(reply("-2.5 * 4").ends_with("-2.5 * 4 = -10"));
    }

    #[test]
    fn test_format_number_trims_zeros() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1.0 / 3.0), "0.3333");
    }
}
