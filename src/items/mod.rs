mod history;

pub use history::{History, HistoryEntry};
