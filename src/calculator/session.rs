//! One calculator page: engine state plus history and memory.

use super::engine::{CalculatorState, Operator, UnaryFunction};
use super::format::{format_number, parse};
use crate::items::{History, HistoryEntry};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Memory register keys on the advanced page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
}

impl MemoryOp {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Add => "M+",
            Self::Subtract => "M-",
        }
    }
}

/// An input event raised by a key press, a button or a key script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcEvent {
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Unary(UnaryFunction),
    Memory(MemoryOp),
}

/// Which calculator page a session backs.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Basic,
    Advanced,
}

impl Variant {
    /// Whether this page offers the given input.
    pub fn allows(self, event: &CalcEvent) -> bool {
        match self {
            Self::Basic => !matches!(event, CalcEvent::Unary(_) | CalcEvent::Memory(_)),
            Self::Advanced => true,
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
        }
    }

    /// Card title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Basic Calculator",
            Self::Advanced => "Advanced Calculator",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Basic => Self::Advanced,
            Self::Advanced => Self::Basic,
        }
    }
}

/// A calculator instance bound to one page.
#[derive(Clone, Debug)]
pub struct Session {
    variant: Variant,
    state: CalculatorState,
    history: History,
    memory: f64,
}

impl Session {
    pub fn new(variant: Variant, history_limit: usize) -> Self {
        Self {
            variant,
            state: CalculatorState::new(),
            history: History::new(history_limit),
            memory: 0.0,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Whether the memory register holds a non-zero value.
    pub fn has_memory(&self) -> bool {
        self.memory != 0.0
    }

    /// The pending part of the expression, e.g. `"12 +"`. Empty when no
    /// operator is pending.
    pub fn expression(&self) -> String {
        match self.state.pending() {
            Some(pending) => format!(
                "{} {}",
                number_text(pending.accumulator),
                pending.operator.symbol()
            ),
            None => String::new(),
        }
    }

    /// Apply one input event.
    ///
    /// Returns `false` when the page does not offer this input; the state is
    /// left untouched in that case.
    pub fn dispatch(&mut self, event: CalcEvent) -> bool {
        if !self.variant.allows(&event) {
            debug!(?event, variant = ?self.variant, "input not available on this page");
            return false;
        }

        match event {
            CalcEvent::Digit(digit) => self.update(|s| s.input_digit(digit)),
            CalcEvent::Operator(op) => self.update(|s| s.input_operator(op)),
            CalcEvent::Equals => self.evaluate(),
            CalcEvent::Clear => self.update(CalculatorState::clear),
            CalcEvent::Backspace => self.update(CalculatorState::backspace),
            CalcEvent::Unary(function) => self.update(|s| s.apply_unary(function)),
            CalcEvent::Memory(op) => self.apply_memory(op),
        }
        true
    }

    fn update(&mut self, transition: impl FnOnce(CalculatorState) -> CalculatorState) {
        let state = std::mem::take(&mut self.state);
        self.state = transition(state);
    }

    fn evaluate(&mut self) {
        let Some(pending) = self.state.pending() else {
            return;
        };
        let expression = format!(
            "{} {} {}",
            number_text(pending.accumulator),
            pending.operator.symbol(),
            operand_text(self.state.display())
        );

        self.update(CalculatorState::evaluate);

        let entry = HistoryEntry::from_state(expression, &self.state);
        debug!(
            expression = %entry.expression,
            result = %entry.display_result,
            "evaluated"
        );
        self.history.push(entry);
    }

    fn apply_memory(&mut self, op: MemoryOp) {
        match op {
            MemoryOp::Clear => self.memory = 0.0,
            MemoryOp::Recall => {
                let value = self.memory;
                self.update(|s| s.recall(value));
            }
            MemoryOp::Add | MemoryOp::Subtract => {
                let Some(value) = parse(self.state.display()) else {
                    return;
                };
                let next = if op == MemoryOp::Add {
                    self.memory + value
                } else {
                    self.memory - value
                };
                if next.is_finite() {
                    self.memory = next;
                } else {
                    warn!(memory = self.memory, value, "memory overflow, keeping previous value");
                }
            }
        }
    }
}

fn number_text(value: f64) -> String {
    format_number(value).unwrap_or_else(|_| value.to_string())
}

/// Normalise an entry such as `"3."` for display in an expression.
fn operand_text(display: &str) -> String {
    parse(display)
        .map(number_text)
        .unwrap_or_else(|| display.to_string())
}
