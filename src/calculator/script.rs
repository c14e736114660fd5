//! Key scripts: calculator input written as text.
//!
//! A script is a sequence of key tokens such as `"12+3="` or `"9 sqrt"`. It
//! drives a session without a terminal (the `--keys` flag) and handles text
//! pasted into the interactive view.

use super::engine::{Operator, UnaryFunction};
use super::session::{CalcEvent, MemoryOp};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches strings made only of characters that can appear in a script.
    static ref SCRIPT_SAFE_CHARS: Regex = Regex::new(
        r"^[\d\s\.\+\-\*/xX=<%a-zA-Z]+$"
    ).unwrap();

    /// Matches one token at the start of the remaining input.
    /// Longer words come first so "mc" is not read as "m" + "c".
    static ref TOKEN: Regex = Regex::new(
        r"(?i)^\s*(sqrt|pct|neg|inv|mc|mr|m\+|m-|ac|c|[0-9.]|[-+*/x=<%])"
    ).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("key script is empty")]
    Empty,
    #[error("unknown key `{token}` at offset {offset}")]
    UnknownToken { token: String, offset: usize },
}

/// Quick check whether text could be a key script.
///
/// Requires only script-safe characters and at least one digit. This is a
/// pre-check before [`parse_script`], which still validates every token.
pub fn looks_like_script(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty()
        && SCRIPT_SAFE_CHARS.is_match(trimmed)
        && trimmed.chars().any(|c| c.is_ascii_digit())
}

/// Parse a key script into input events.
pub fn parse_script(text: &str) -> Result<Vec<CalcEvent>, ScriptError> {
    if text.trim().is_empty() {
        return Err(ScriptError::Empty);
    }

    let mut events = Vec::new();
    let mut offset = 0;

    while !text[offset..].trim_start().is_empty() {
        let rest = &text[offset..];
        let Some(caps) = TOKEN.captures(rest) else {
            let start = offset + (rest.len() - rest.trim_start().len());
            let token: String = text[start..]
                .chars()
                .take_while(|c| !c.is_whitespace())
                .collect();
            return Err(ScriptError::UnknownToken {
                token,
                offset: start,
            });
        };

        let token = &caps[1];
        // The regex only yields tokens `token_event` knows about
        if let Some(event) = token_event(&token.to_ascii_lowercase()) {
            events.push(event);
        }
        offset += caps.get(0).map_or(rest.len(), |m| m.end());
    }

    Ok(events)
}

fn token_event(token: &str) -> Option<CalcEvent> {
    let event = match token {
        "=" => CalcEvent::Equals,
        "c" | "ac" => CalcEvent::Clear,
        "<" => CalcEvent::Backspace,
        "sqrt" => CalcEvent::Unary(UnaryFunction::Sqrt),
        "pct" | "%" => CalcEvent::Unary(UnaryFunction::Percent),
        "neg" => CalcEvent::Unary(UnaryFunction::Negate),
        "inv" => CalcEvent::Unary(UnaryFunction::Inverse),
        "mc" => CalcEvent::Memory(MemoryOp::Clear),
        "mr" => CalcEvent::Memory(MemoryOp::Recall),
        "m+" => CalcEvent::Memory(MemoryOp::Add),
        "m-" => CalcEvent::Memory(MemoryOp::Subtract),
        _ => {
            let c = token.chars().next()?;
            if c.is_ascii_digit() || c == '.' {
                CalcEvent::Digit(c)
            } else {
                CalcEvent::Operator(Operator::from_char(c)?)
            }
        }
    };
    Some(event)
}
