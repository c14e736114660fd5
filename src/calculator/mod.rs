//! Calculator engine and the pieces built around it.
//!
//! This module provides functionality to:
//! - Drive the calculator state machine with digits, operators and functions
//! - Format results for the display
//! - Group a page's state, history and memory into a session
//! - Parse key scripts into input events
//! - Copy the display to the clipboard

mod clipboard;
mod engine;
mod error;
mod format;
mod script;
mod session;

pub use clipboard::{ClipboardError, copy_display, copy_to_clipboard};
pub use engine::{
    CalculatorState, ERROR_DISPLAY, MAX_ENTRY_DIGITS, Operator, Pending, Phase, UnaryFunction,
};
pub use error::MathError;
pub use format::{SIGNIFICANT_DIGITS, format_number, group_thousands, parse};
pub use script::{ScriptError, looks_like_script, parse_script};
pub use session::{CalcEvent, MemoryOp, Session, Variant};
