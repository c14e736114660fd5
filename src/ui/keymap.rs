//! Keyboard mapping from terminal key events to application input.

use crate::calculator::{CalcEvent, MemoryOp, Operator, UnaryFunction, Variant};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a key press can ask the application to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Feed the active calculator.
    Calc(CalcEvent),
    SwitchPage(Variant),
    NextPage,
    ToggleTheme,
    /// Copy the display value to the clipboard.
    Copy,
    Quit,
}

pub fn map_key(key: &KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Input::Quit),
            _ => None,
        };
    }

    let input = match key.code {
        KeyCode::Char(c) => return map_char(c),
        KeyCode::Enter => Input::Calc(CalcEvent::Equals),
        KeyCode::Esc => Input::Calc(CalcEvent::Clear),
        KeyCode::Backspace | KeyCode::Delete => Input::Calc(CalcEvent::Backspace),
        KeyCode::Tab | KeyCode::BackTab => Input::NextPage,
        KeyCode::F(1) => Input::SwitchPage(Variant::Basic),
        KeyCode::F(2) => Input::SwitchPage(Variant::Advanced),
        KeyCode::F(5) => Input::Calc(CalcEvent::Memory(MemoryOp::Clear)),
        KeyCode::F(6) => Input::Calc(CalcEvent::Memory(MemoryOp::Recall)),
        KeyCode::F(7) => Input::Calc(CalcEvent::Memory(MemoryOp::Add)),
        KeyCode::F(8) => Input::Calc(CalcEvent::Memory(MemoryOp::Subtract)),
        _ => return None,
    };
    Some(input)
}

fn map_char(c: char) -> Option<Input> {
    let event = match c {
        '0'..='9' | '.' => CalcEvent::Digit(c),
        // Decimal comma keypads
        ',' => CalcEvent::Digit('.'),
        '=' => CalcEvent::Equals,
        'c' | 'C' => CalcEvent::Clear,
        'r' => CalcEvent::Unary(UnaryFunction::Sqrt),
        '%' => CalcEvent::Unary(UnaryFunction::Percent),
        'n' => CalcEvent::Unary(UnaryFunction::Negate),
        'i' => CalcEvent::Unary(UnaryFunction::Inverse),
        't' => return Some(Input::ToggleTheme),
        'y' => return Some(Input::Copy),
        'q' => return Some(Input::Quit),
        _ => CalcEvent::Operator(Operator::from_char(c)?),
    };
    Some(Input::Calc(event))
}
