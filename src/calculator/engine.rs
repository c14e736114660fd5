//! Calculator state machine.
//!
//! Every transition consumes a [`CalculatorState`] and returns the next one.
//! Failures never escape: they put the state into [`Phase::Error`] with the
//! `"Error"` sentinel on the display.

use super::error::MathError;
use super::format::{format_number, parse};
use tracing::debug;

/// Text shown on the display after an invalid operation.
pub const ERROR_DISPLAY: &str = "Error";

/// Maximum number of digits in a single entry.
pub const MAX_ENTRY_DIGITS: usize = 12;

/// Binary operators, applied left to right without precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map a typed character to an operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Symbol used in expressions and on buttons.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, MathError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(MathError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(MathError::Overflow)
        }
    }
}

/// Functions applied directly to the display value (advanced page only).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryFunction {
    Sqrt,
    Percent,
    Negate,
    Inverse,
}

impl UnaryFunction {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Percent => "%",
            Self::Negate => "±",
            Self::Inverse => "1/x",
        }
    }

    pub fn apply(self, value: f64) -> Result<f64, MathError> {
        match self {
            Self::Sqrt if value < 0.0 => Err(MathError::Domain("square root")),
            Self::Sqrt => Ok(value.sqrt()),
            Self::Percent => Ok(value / 100.0),
            Self::Negate => Ok(-value),
            Self::Inverse if value == 0.0 => Err(MathError::Domain("inverse")),
            Self::Inverse => Ok(1.0 / value),
        }
    }
}

/// Where the calculator is in its input cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Digits append to the display.
    #[default]
    Entering,
    /// An operator was just chosen; the next digit starts the right operand.
    AwaitingOperand,
    /// The display holds a computed value; the next digit starts fresh.
    Evaluated,
    /// The display holds the error sentinel.
    Error,
}

impl Phase {
    /// Whether the next digit replaces the display instead of appending.
    fn starts_fresh(self) -> bool {
        !matches!(self, Self::Entering)
    }
}

/// Left operand and the operator waiting for its right operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pending {
    pub accumulator: f64,
    pub operator: Operator,
}

/// The complete state of one calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending: Option<Pending>,
    phase: Phase,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            phase: Phase::Entering,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entry or result. Never empty.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.pending.map(|p| p.accumulator)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True right after a result was produced (or an error shown).
    pub fn just_evaluated(&self) -> bool {
        matches!(self.phase, Phase::Evaluated | Phase::Error)
    }

    pub fn is_error(&self) -> bool {
        self.phase == Phase::Error
    }

    /// Append a digit or decimal point to the entry.
    #[must_use]
    pub fn input_digit(mut self, digit: char) -> Self {
        if !(digit.is_ascii_digit() || digit == '.') {
            return self;
        }

        if self.phase.starts_fresh() {
            self.display = "0".to_string();
            self.phase = Phase::Entering;
        }

        if digit == '.' {
            if !self.display.contains('.') {
                self.display.push('.');
            }
            return self;
        }

        let digits = self.display.chars().filter(char::is_ascii_digit).count();
        match self.display.as_str() {
            "0" => self.display = digit.to_string(),
            "-0" => self.display = format!("-{}", digit),
            _ if digits >= MAX_ENTRY_DIGITS => {}
            _ => self.display.push(digit),
        }
        self
    }

    /// Choose the operator for the next operand, folding any pending
    /// operation into the accumulator first.
    #[must_use]
    pub fn input_operator(mut self, operator: Operator) -> Self {
        let Some(operand) = parse(&self.display) else {
            return self;
        };

        let accumulator = match self.pending {
            None => operand,
            // No operand typed since the last operator: replace it
            Some(pending) if self.phase == Phase::AwaitingOperand => pending.accumulator,
            Some(pending) => match pending.operator.apply(pending.accumulator, operand) {
                Ok(value) => value,
                Err(err) => return self.fail(err),
            },
        };

        match format_number(accumulator) {
            Ok(text) => self.display = text,
            Err(err) => return self.fail(err),
        }
        self.pending = Some(Pending {
            accumulator,
            operator,
        });
        self.phase = Phase::AwaitingOperand;
        self
    }

    /// Apply the pending operator to the accumulator and the display.
    #[must_use]
    pub fn evaluate(mut self) -> Self {
        let Some(pending) = self.pending else {
            return self;
        };
        let Some(operand) = parse(&self.display) else {
            return self;
        };

        match pending
            .operator
            .apply(pending.accumulator, operand)
            .and_then(format_number)
        {
            Ok(text) => {
                self.display = text;
                self.pending = None;
                self.phase = Phase::Evaluated;
                self
            }
            Err(err) => self.fail(err),
        }
    }

    /// Reset to the initial state.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::default()
    }

    /// Remove the last character of the entry.
    #[must_use]
    pub fn backspace(mut self) -> Self {
        match self.phase {
            Phase::AwaitingOperand | Phase::Error => return self,
            // Scientific results are not editable digit by digit
            Phase::Evaluated if self.display.contains('e') => {
                self.display = "0".to_string();
            }
            Phase::Evaluated | Phase::Entering => {
                self.display.pop();
                if parse(&self.display).is_none() {
                    self.display = "0".to_string();
                }
            }
        }
        self.phase = Phase::Entering;
        self
    }

    /// Apply a unary function to the display. The pending operation is kept.
    #[must_use]
    pub fn apply_unary(mut self, function: UnaryFunction) -> Self {
        let Some(operand) = parse(&self.display) else {
            return self;
        };

        // Negating an entry edits its text so "1.50" stays "-1.50"
        if function == UnaryFunction::Negate && self.phase == Phase::Entering {
            if operand != 0.0 {
                self.display = match self.display.strip_prefix('-') {
                    Some(rest) => rest.to_string(),
                    None => format!("-{}", self.display),
                };
            }
            return self;
        }

        match function.apply(operand).and_then(format_number) {
            Ok(text) => {
                self.display = text;
                self.phase = Phase::Evaluated;
                self
            }
            Err(err) => self.fail(err),
        }
    }

    /// Show a stored value as if it had just been computed.
    #[must_use]
    pub fn recall(mut self, value: f64) -> Self {
        match format_number(value) {
            Ok(text) => {
                self.display = text;
                self.phase = Phase::Evaluated;
                self
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(self, err: MathError) -> Self {
        debug!(%err, display = %self.display, "calculation failed");
        Self {
            display: ERROR_DISPLAY.to_string(),
            pending: None,
            phase: Phase::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(state: CalculatorState, digits: &str) -> CalculatorState {
        digits.chars().fold(state, CalculatorState::input_digit)
    }

    fn entered(digits: &str) -> CalculatorState {
        type_digits(CalculatorState::new(), digits)
    }

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.accumulator(), None);
        assert_eq!(state.pending_operator(), None);
        assert_eq!(state.phase(), Phase::Entering);
        assert!(!state.just_evaluated());
    }

    /// Display text with the trailing fraction zeros (and a bare point) removed.
    fn trimmed(display: &str) -> &str {
        if display.contains('.') {
            display.trim_end_matches('0').trim_end_matches('.')
        } else {
            display
        }
    }

    fn assert_entry_round_trips(keys: &str) {
        let state = entered(keys);
        let display = state.display();
        let value = parse(display).unwrap_or_else(|| panic!("keys {keys:?} gave {display:?}"));
        assert_eq!(
            format_number(value).unwrap(),
            trimmed(display),
            "keys {keys:?}"
        );
    }

    #[test]
    fn test_typed_entries_round_trip() {
        // Every key sequence up to six keys over a small alphabet
        let alphabet = ['0', '1', '9', '.'];
        let mut sequences = vec![String::new()];
        for _ in 0..6 {
            sequences = sequences
                .iter()
                .flat_map(|prefix| alphabet.iter().map(move |&key| format!("{prefix}{key}")))
                .collect();
            for keys in &sequences {
                assert_entry_round_trips(keys);
            }
        }

        // Long sequences that run into the entry cap
        let keys = "0123456789.";
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        for _ in 0..500 {
            let sequence: String = (0..20)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 7;
                    seed ^= seed << 17;
                    keys.as_bytes()[(seed % keys.len() as u64) as usize] as char
                })
                .collect();
            assert_entry_round_trips(&sequence);
        }
    }

    #[test]
    fn test_leading_zeros_collapse() {
        assert_eq!(entered("0").display(), "0");
        assert_eq!(entered("005").display(), "5");
        assert_eq!(entered("120").display(), "120");
    }

    #[test]
    fn test_decimal_guard() {
        let state = entered("1.");
        assert_eq!(state.display(), "1.");
        let state = state.input_digit('.');
        assert_eq!(state.display(), "1.");
        assert_eq!(type_digits(state, "5.").display(), "1.5");
        assert_eq!(entered(".5").display(), "0.5");
    }

    #[test]
    fn test_invalid_digit_ignored() {
        let state = entered("12");
        assert_eq!(state.clone().input_digit('a'), state);
    }

    #[test]
    fn test_entry_length_capped() {
        let state = entered("1234567890123");
        assert_eq!(state.display(), "123456789012");
        assert_eq!(entered("0.000000000019").display(), "0.00000000001");
    }

    #[test]
    fn test_simple_addition() {
        let state = entered("1")
            .input_operator(Operator::Add)
            .input_digit('2')
            .evaluate();
        assert_eq!(state.display(), "3");
        assert!(state.just_evaluated());
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_chaining_after_evaluate() {
        let state = entered("1")
            .input_operator(Operator::Add)
            .input_digit('2')
            .evaluate()
            .input_operator(Operator::Add)
            .input_digit('3')
            .evaluate();
        assert_eq!(state.display(), "6");
    }

    #[test]
    fn test_left_to_right_without_precedence() {
        let state = entered("2").input_operator(Operator::Add);
        let state = type_digits(state, "3").input_operator(Operator::Multiply);
        assert_eq!(state.display(), "5");
        assert_eq!(state.accumulator(), Some(5.0));
        let state = type_digits(state, "4").evaluate();
        assert_eq!(state.display(), "20");
    }

    #[test]
    fn test_repeated_operator_replaces_pending() {
        let state = entered("8")
            .input_operator(Operator::Add)
            .input_operator(Operator::Subtract);
        assert_eq!(state.accumulator(), Some(8.0));
        assert_eq!(state.pending_operator(), Some(Operator::Subtract));
        assert_eq!(state.input_digit('3').evaluate().display(), "5");
    }

    #[test]
    fn test_evaluate_without_operator_is_noop() {
        let state = entered("42");
        assert_eq!(state.clone().evaluate(), state);
    }

    #[test]
    fn test_evaluate_with_missing_operand_uses_display() {
        let state = entered("5").input_operator(Operator::Add).evaluate();
        assert_eq!(state.display(), "10");
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let state = entered("2")
            .input_operator(Operator::Multiply)
            .input_digit('3')
            .evaluate()
            .input_digit('7');
        assert_eq!(state.display(), "7");
        assert_eq!(state.phase(), Phase::Entering);
    }

    #[test]
    fn test_division_by_zero() {
        let state = entered("5")
            .input_operator(Operator::Divide)
            .input_digit('0')
            .evaluate();
        assert_eq!(state.display(), ERROR_DISPLAY);
        assert!(state.is_error());
        assert_eq!(state.pending(), None);

        let state = state.input_digit('7');
        assert_eq!(state.display(), "7");
        assert_eq!(state.phase(), Phase::Entering);
    }

    #[test]
    fn test_division_by_zero_while_chaining() {
        let state = entered("5")
            .input_operator(Operator::Divide)
            .input_digit('0')
            .input_operator(Operator::Add);
        assert!(state.is_error());
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_operator_ignored_in_error_state() {
        let state = entered("1")
            .input_operator(Operator::Divide)
            .input_digit('0')
            .evaluate();
        let after = state.clone().input_operator(Operator::Add);
        assert_eq!(after, state);
    }

    #[test]
    fn test_overflow_is_error() {
        let mut state = entered("999999999999");
        for _ in 0..30 {
            state = state.input_operator(Operator::Multiply);
            if state.is_error() {
                break;
            }
            state = type_digits(state, "999999999999");
        }
        assert!(state.is_error());
        assert_eq!(state.display(), ERROR_DISPLAY);
    }

    #[test]
    fn test_backspace() {
        assert_eq!(entered("12").backspace().display(), "1");
        assert_eq!(entered("1").backspace().display(), "0");
        assert_eq!(entered("0").backspace().display(), "0");
        assert_eq!(entered("1.5").backspace().display(), "1.");
    }

    #[test]
    fn test_backspace_never_leaves_lone_minus() {
        let state = entered("7").apply_unary(UnaryFunction::Negate);
        assert_eq!(state.display(), "-7");
        assert_eq!(state.backspace().display(), "0");
    }

    #[test]
    fn test_backspace_after_operator_is_noop() {
        let state = entered("12").input_operator(Operator::Add);
        assert_eq!(state.clone().backspace(), state);
    }

    #[test]
    fn test_backspace_in_error_is_noop() {
        let state = entered("5")
            .input_operator(Operator::Divide)
            .input_digit('0')
            .evaluate();
        assert_eq!(state.phase(), Phase::Error);

        let after = state.clone().backspace();
        assert_eq!(after, state);
        assert_eq!(after.display(), ERROR_DISPLAY);
    }

    #[test]
    fn test_backspace_edits_result() {
        let state = entered("6")
            .input_operator(Operator::Multiply)
            .input_digit('7')
            .evaluate()
            .backspace();
        assert_eq!(state.display(), "4");
        assert_eq!(state.phase(), Phase::Entering);
        assert_eq!(state.input_digit('1').display(), "41");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let state = entered("5").input_operator(Operator::Add).input_digit('3');
        let once = state.clear();
        assert_eq!(once, CalculatorState::new());
        assert_eq!(once.clone().clear(), once);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(
            entered("9").apply_unary(UnaryFunction::Sqrt).display(),
            "3"
        );
        let negative = entered("4").apply_unary(UnaryFunction::Negate);
        let state = negative.apply_unary(UnaryFunction::Sqrt);
        assert_eq!(state.display(), ERROR_DISPLAY);
        assert!(state.is_error());
    }

    #[test]
    fn test_percent_and_inverse() {
        assert_eq!(
            entered("50").apply_unary(UnaryFunction::Percent).display(),
            "0.5"
        );
        assert_eq!(
            entered("4").apply_unary(UnaryFunction::Inverse).display(),
            "0.25"
        );
        assert!(entered("0").apply_unary(UnaryFunction::Inverse).is_error());
    }

    #[test]
    fn test_negate_keeps_entry_text() {
        let state = entered("1.50").apply_unary(UnaryFunction::Negate);
        assert_eq!(state.display(), "-1.50");
        assert_eq!(state.phase(), Phase::Entering);
        let state = state.apply_unary(UnaryFunction::Negate);
        assert_eq!(state.display(), "1.50");
    }

    #[test]
    fn test_negate_zero_stays_zero() {
        assert_eq!(
            entered("0").apply_unary(UnaryFunction::Negate).display(),
            "0"
        );
    }

    #[test]
    fn test_unary_keeps_pending_operation() {
        let state = entered("4")
            .input_operator(Operator::Add)
            .input_digit('9')
            .apply_unary(UnaryFunction::Sqrt);
        assert_eq!(state.display(), "3");
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert_eq!(state.accumulator(), Some(4.0));
        assert_eq!(state.evaluate().display(), "7");
    }

    #[test]
    fn test_digit_after_unary_starts_fresh() {
        let state = entered("16").apply_unary(UnaryFunction::Sqrt).input_digit('2');
        assert_eq!(state.display(), "2");
    }

    #[test]
    fn test_recall() {
        let state = entered("3").input_operator(Operator::Add).recall(2.5);
        assert_eq!(state.display(), "2.5");
        assert_eq!(state.evaluate().display(), "5.5");
    }
}
