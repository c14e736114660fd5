pub mod app;
pub mod items;
pub mod keymap;
pub mod paint;
pub mod raw_mode;
pub mod theme;
pub mod view;

pub use app::{App, Control};
pub use keymap::{Input, map_key};
pub use theme::{Palette, ThemePreference};
pub use view::{Frame, Line, Role, Span, ViewOptions, render};
