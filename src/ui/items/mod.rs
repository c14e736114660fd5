mod calculator;
mod history;

pub use calculator::{render_buttons, render_readout};
pub use history::render_history;

use super::view::{Line, Role, Span};

/// Horizontal placement of content inside the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Wrap content in the card's side borders, padded to `inner` cells.
/// Content wider than the card is cut from the left.
pub fn bordered(content: Vec<Span>, inner: usize, align: Align) -> Line {
    let mut content = content;
    let mut width: usize = content.iter().map(Span::width).sum();
    while width > inner {
        let Some(first) = content.first_mut() else {
            break;
        };
        let excess = width - inner;
        if first.width() <= excess {
            width -= first.width();
            content.remove(0);
        } else {
            first.text = fit(&first.text, first.width() - excess);
            width = inner;
        }
    }

    let pad = inner - width;
    let (left, right) = match align {
        Align::Left => (0, pad),
        Align::Center => (pad / 2, pad - pad / 2),
        Align::Right => (pad, 0),
    };

    let mut spans = Vec::with_capacity(content.len() + 4);
    spans.push(Span::new("│ ", Role::Border));
    if left > 0 {
        spans.push(Span::new(" ".repeat(left), Role::Text));
    }
    spans.extend(content);
    if right > 0 {
        spans.push(Span::new(" ".repeat(right), Role::Text));
    }
    spans.push(Span::new(" │", Role::Border));
    Line::new(spans)
}

/// Top edge with the card title centered in it.
pub fn top_border(title: &str, inner: usize) -> Line {
    let title = fit(title, inner);
    let rule = (inner + 2).saturating_sub(title.chars().count() + 2);
    let left = rule / 2;
    Line::new(vec![
        Span::new(format!("┌{} ", "─".repeat(left)), Role::Border),
        Span::new(title, Role::Title),
        Span::new(format!(" {}┐", "─".repeat(rule - left)), Role::Border),
    ])
}

pub fn separator(inner: usize) -> Line {
    Line::new(vec![Span::new(
        format!("├{}┤", "─".repeat(inner + 2)),
        Role::Border,
    )])
}

pub fn bottom_border(inner: usize) -> Line {
    Line::new(vec![Span::new(
        format!("└{}┘", "─".repeat(inner + 2)),
        Role::Border,
    )])
}

/// Shorten text to `width` cells, keeping its end (results sit at the end).
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{}", tail)
}
