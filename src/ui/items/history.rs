//! History list rendering for the advanced page.

use super::{Align, bordered};
use crate::items::History;
use crate::ui::view::{Line, Role, Span};

/// Entries shown under the advanced card.
const VISIBLE_ENTRIES: usize = 5;

pub fn render_history(history: &History, inner: usize) -> Vec<Line> {
    let mut lines = vec![bordered(
        vec![Span::new("History", Role::Muted)],
        inner,
        Align::Left,
    )];

    if history.is_empty() {
        lines.push(bordered(
            vec![Span::new("No calculations yet", Role::Muted)],
            inner,
            Align::Right,
        ));
        return lines;
    }

    for entry in history.iter().take(VISIBLE_ENTRIES) {
        let role = if entry.is_error { Role::Error } else { Role::Text };
        lines.push(bordered(
            vec![Span::new(entry.summary(), role)],
            inner,
            Align::Right,
        ));
    }
    lines
}
