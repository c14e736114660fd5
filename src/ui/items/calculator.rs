//! Calculator readout and button grid rendering.

use super::{Align, bordered};
use crate::calculator::{
    MemoryOp, Operator, Session, UnaryFunction, Variant, group_thousands,
};
use crate::ui::view::{Line, Role, Span};

/// Width of one button cell.
const CELL: usize = 7;

const DIGIT_ROWS: [[&str; 4]; 4] = [
    ["7", "8", "9", "÷"],
    ["4", "5", "6", "×"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

/// Render the pending expression line and the display value.
///
/// The expression sits above the display in muted text, with an "M" marker
/// on the left while the memory register is set. Errors use the error role.
pub fn render_readout(session: &Session, group_digits: bool, inner: usize) -> Vec<Line> {
    let expression = session.expression();
    let marker = if session.has_memory() { "M" } else { " " };
    let gap = inner.saturating_sub(1 + expression.chars().count());

    let expression_line = bordered(
        vec![
            Span::new(marker, Role::Function),
            Span::new(" ".repeat(gap), Role::Text),
            Span::new(expression, Role::Muted),
        ],
        inner,
        Align::Left,
    );

    let state = session.state();
    let display = if state.is_error() {
        Span::new(state.display(), Role::Error)
    } else if group_digits {
        Span::new(group_thousands(state.display()), Role::Display)
    } else {
        Span::new(state.display(), Role::Display)
    };

    vec![expression_line, bordered(vec![display], inner, Align::Right)]
}

/// Render the buttons the page offers.
pub fn render_buttons(variant: Variant, inner: usize) -> Vec<Line> {
    let mut rows: Vec<Vec<&str>> = Vec::new();

    if variant == Variant::Advanced {
        rows.push(
            [MemoryOp::Clear, MemoryOp::Recall, MemoryOp::Add, MemoryOp::Subtract]
                .iter()
                .map(|op| op.label())
                .collect(),
        );
        rows.push(
            [
                UnaryFunction::Sqrt,
                UnaryFunction::Percent,
                UnaryFunction::Negate,
                UnaryFunction::Inverse,
            ]
            .iter()
            .map(|f| f.symbol())
            .collect(),
        );
    }
    rows.extend(DIGIT_ROWS.iter().map(|row| row.to_vec()));
    rows.push(vec!["C", "⌫"]);

    rows.into_iter()
        .map(|row| {
            let cells = row
                .into_iter()
                .map(|label| Span::new(format!("{:^width$}", label, width = CELL), button_role(label)))
                .collect();
            bordered(cells, inner, Align::Center)
        })
        .collect()
}

fn button_role(label: &str) -> Role {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || c == '.' => Role::Digit,
        (Some('='), None) => Role::Operator,
        (Some(c), None) if Operator::from_char(c).is_some() => Role::Operator,
        _ => Role::Function,
    }
}
