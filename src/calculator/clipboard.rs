//! Clipboard functionality for copying the display value.

use super::engine::CalculatorState;
use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
    #[error("nothing to copy while the display shows an error")]
    NothingToCopy,
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;
    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Copy)
}

/// Copy the raw display value (no digit grouping). Returns the copied text.
pub fn copy_display(state: &CalculatorState) -> Result<String, ClipboardError> {
    if state.is_error() {
        return Err(ClipboardError::NothingToCopy);
    }
    let text = state.display().to_string();
    copy_to_clipboard(&text)?;
    Ok(text)
}
