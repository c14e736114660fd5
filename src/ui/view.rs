//! Rendering of a page into a frame of styled lines.
//!
//! Rendering is pure: the frame only names a [`Role`] per span, and the
//! painter maps roles to the active palette's colors.

use super::items::{
    bottom_border, render_buttons, render_history, render_readout, separator, top_border,
};
use super::theme::ThemePreference;
use crate::calculator::{Session, Variant};

/// What a span shows, used to pick its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Muted,
    Border,
    Brand,
    Tab,
    TabActive,
    Title,
    Display,
    Error,
    Digit,
    Operator,
    Function,
    Status,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub role: Role,
}

impl Span {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    /// Width in terminal cells. Everything rendered here is single width.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.lines.iter().flat_map(|line| line.spans.iter())
    }
}

/// Settings that affect rendering but not calculator state.
#[derive(Clone, Debug, Default)]
pub struct ViewOptions {
    pub theme: ThemePreference,
    pub group_digits: bool,
    /// One-off message shown under the card.
    pub status: Option<String>,
}

/// Inner width of the card for each page.
fn card_width(variant: Variant) -> usize {
    match variant {
        Variant::Basic => 30,
        Variant::Advanced => 40,
    }
}

/// Render the header, the page's card and the key hints.
pub fn render(session: &Session, options: &ViewOptions) -> Frame {
    let variant = session.variant();
    let inner = card_width(variant);

    let mut lines = vec![render_header(variant, options.theme), Line::default()];

    lines.push(top_border(variant.title(), inner));
    lines.extend(render_readout(session, options.group_digits, inner));
    lines.push(separator(inner));
    lines.extend(render_buttons(variant, inner));
    if variant == Variant::Advanced {
        lines.push(separator(inner));
        lines.extend(render_history(session.history(), inner));
    }
    lines.push(bottom_border(inner));

    lines.extend(render_hints(variant));
    if let Some(status) = &options.status {
        lines.push(indented(Span::new(status.clone(), Role::Status)));
    }

    Frame { lines }
}

fn render_header(active: Variant, theme: ThemePreference) -> Line {
    let mut spans = vec![Span::new("Calculator App", Role::Brand), Span::new("   ", Role::Text)];

    for variant in [Variant::Basic, Variant::Advanced] {
        if variant == active {
            spans.push(Span::new(format!("[{}]", variant.label()), Role::TabActive));
        } else {
            spans.push(Span::new(format!(" {} ", variant.label()), Role::Tab));
        }
        spans.push(Span::new(" ", Role::Text));
    }

    spans.push(Span::new("  ", Role::Text));
    spans.push(Span::new(theme.indicator(), Role::Muted));
    Line::new(spans)
}

fn render_hints(variant: Variant) -> Vec<Line> {
    let mut hints = vec![indented(Span::new(
        "Tab page · t theme · y copy · q quit",
        Role::Muted,
    ))];
    if variant == Variant::Advanced {
        hints.push(indented(Span::new(
            "r √ · % · n ± · i 1/x · F5-F8 memory",
            Role::Muted,
        )));
    }
    hints
}

fn indented(span: Span) -> Line {
    Line::new(vec![Span::new("  ", Role::Text), span])
}
