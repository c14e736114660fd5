//! Painting frames onto the terminal with crossterm.

use super::theme::Palette;
use super::view::{Frame, Role};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Offset of the frame from the top-left corner.
const MARGIN_X: u16 = 2;
const MARGIN_Y: u16 = 1;

pub fn paint(out: &mut impl Write, frame: &Frame, palette: &Palette) -> io::Result<()> {
    queue!(out, SetBackgroundColor(palette.background), Clear(ClearType::All))?;

    for (row, line) in frame.lines.iter().enumerate() {
        queue!(out, MoveTo(MARGIN_X, MARGIN_Y + row as u16))?;
        for span in &line.spans {
            let bold = matches!(
                span.role,
                Role::Brand | Role::TabActive | Role::Title | Role::Display | Role::Error
            );
            if bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, SetForegroundColor(palette.color(span.role)), Print(&span.text))?;
            if bold {
                queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            }
        }
    }

    queue!(out, ResetColor)?;
    out.flush()
}
