//! Interactive application: one session per page, the event loop, and the
//! app-level inputs (page switching, theme, clipboard).

use super::keymap::{Input, map_key};
use super::paint::paint;
use super::raw_mode::TerminalGuard;
use super::theme::{Palette, ThemePreference};
use super::view::{Frame, ViewOptions, render};
use crate::calculator::{Session, Variant, copy_display, looks_like_script, parse_script};
use crate::config::Config;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Whether the event loop keeps running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    basic: Session,
    advanced: Session,
    active: Variant,
    config: Config,
    /// Where a toggled theme is saved. `None` disables saving.
    config_path: Option<PathBuf>,
    status: Option<String>,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            basic: Session::new(Variant::Basic, config.history_limit),
            advanced: Session::new(Variant::Advanced, config.history_limit),
            active: config.start_page,
            config,
            config_path,
            status: None,
        }
    }

    pub fn active(&self) -> &Session {
        match self.active {
            Variant::Basic => &self.basic,
            Variant::Advanced => &self.advanced,
        }
    }

    fn active_mut(&mut self) -> &mut Session {
        match self.active {
            Variant::Basic => &mut self.basic,
            Variant::Advanced => &mut self.advanced,
        }
    }

    pub fn theme(&self) -> ThemePreference {
        self.config.theme
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Render the active page.
    pub fn frame(&self) -> Frame {
        render(
            self.active(),
            &ViewOptions {
                theme: self.config.theme,
                group_digits: self.config.group_digits,
                status: self.status.clone(),
            },
        )
    }

    /// Apply one input. The status message only lives until the next input.
    pub fn handle(&mut self, input: Input) -> Control {
        self.status = None;

        match input {
            Input::Calc(event) => {
                if !self.active_mut().dispatch(event) {
                    self.status = Some(format!("Not available on the {} page", self.active.label()));
                }
            }
            Input::SwitchPage(variant) => self.switch_to(variant),
            Input::NextPage => self.switch_to(self.active.next()),
            Input::ToggleTheme => self.toggle_theme(),
            Input::Copy => self.copy(),
            Input::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// Feed pasted text to the active page as a key script.
    pub fn paste(&mut self, text: &str) {
        self.status = None;
        if !looks_like_script(text) {
            debug!("ignoring paste that is not a key script");
            return;
        }

        match parse_script(text) {
            Ok(events) => {
                let rejected = events
                    .into_iter()
                    .filter(|&event| !self.active_mut().dispatch(event))
                    .count();
                match rejected {
                    0 => {}
                    1 => self.status = Some("1 key not available on this page".to_string()),
                    n => self.status = Some(format!("{} keys not available on this page", n)),
                }
            }
            Err(err) => {
                warn!(%err, "invalid pasted key script");
                self.status = Some(err.to_string());
            }
        }
    }

    fn switch_to(&mut self, variant: Variant) {
        if self.active != variant {
            debug!(from = ?self.active, to = ?variant, "switching page");
            self.active = variant;
        }
    }

    fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = ?self.config.theme, "theme toggled");

        if let Some(path) = &self.config_path
            && let Err(err) = Config::save_theme(path, self.config.theme)
        {
            warn!(%err, "failed to save theme preference");
            self.status = Some("Theme not saved".to_string());
        }
    }

    fn copy(&mut self) {
        match copy_display(self.active().state()) {
            Ok(text) => {
                info!(%text, "copied display");
                self.status = Some(format!("Copied {}", text));
            }
            Err(err) => {
                warn!(%err, "copy failed");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Run the interactive event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::enable()?;
        let mut stdout = io::stdout();
        info!(page = ?self.active, "calculator started");

        loop {
            let palette = Palette::for_preference(self.config.theme);
            paint(&mut stdout, &self.frame(), &palette)?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(input) = map_key(&key)
                        && self.handle(input) == Control::Quit
                    {
                        break;
                    }
                }
                Event::Paste(text) => self.paste(&text),
                _ => {}
            }
        }

        info!("calculator closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{CalcEvent, Operator, UnaryFunction};
    use tempfile::TempDir;

    fn app() -> App {
        App::new(Config::default(), None)
    }

    fn press(app: &mut App, events: &[CalcEvent]) {
        for &event in events {
            app.handle(Input::Calc(event));
        }
    }

    #[test]
    fn test_starts_on_configured_page() {
        let config = Config {
            start_page: Variant::Advanced,
            ..Config::default()
        };
        let app = App::new(config, None);
        assert_eq!(app.active().variant(), Variant::Advanced);
    }

    #[test]
    fn test_pages_keep_their_own_state() {
        let mut app = app();
        press(&mut app, &[CalcEvent::Digit('4'), CalcEvent::Digit('2')]);
        assert_eq!(app.handle(Input::NextPage), Control::Continue);
        assert_eq!(app.active().display(), "0");

        press(&mut app, &[CalcEvent::Digit('9')]);
        app.handle(Input::SwitchPage(Variant::Basic));
        assert_eq!(app.active().display(), "42");
        app.handle(Input::SwitchPage(Variant::Advanced));
        assert_eq!(app.active().display(), "9");
    }

    #[test]
    fn test_rejected_input_sets_status() {
        let mut app = app();
        app.handle(Input::Calc(CalcEvent::Unary(UnaryFunction::Sqrt)));
        assert_eq!(app.status(), Some("Not available on the Basic page"));

        app.handle(Input::Calc(CalcEvent::Digit('1')));
        assert_eq!(app.status(), None);
    }

    #[test]
    fn test_quit() {
        assert_eq!(app().handle(Input::Quit), Control::Quit);
    }

    #[test]
    fn test_toggle_theme_saves_preference() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = App::new(Config::default(), Some(path.clone()));

        app.handle(Input::ToggleTheme);
        assert_eq!(app.theme(), ThemePreference::Light);
        assert_eq!(Config::load(&path).unwrap().theme, ThemePreference::Light);
        assert!(app.frame().text().contains("☀ light"));
    }

    #[test]
    fn test_toggle_theme_keeps_command_line_overrides_out_of_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = \"dark\"\n").unwrap();

        // Effective config as main.rs builds it for `--page advanced`
        let mut config = Config::load(&path).unwrap();
        config.start_page = Variant::Advanced;
        config.group_digits = false;
        let mut app = App::new(config, Some(path.clone()));

        app.handle(Input::ToggleTheme);
        assert_eq!(app.active().variant(), Variant::Advanced);

        let stored = Config::load(&path).unwrap();
        assert_eq!(stored.theme, ThemePreference::Light);
        assert_eq!(stored.start_page, Variant::Basic);
        assert!(stored.group_digits);
    }

    #[test]
    fn test_paste_runs_key_script() {
        let mut app = app();
        app.paste("12 * 3 =");
        assert_eq!(app.active().display(), "36");

        app.paste("hello");
        assert_eq!(app.active().display(), "36");
    }

    #[test]
    fn test_paste_reports_rejected_keys() {
        let mut app = app();
        app.paste("9 sqrt");
        assert_eq!(app.active().display(), "9");
        assert_eq!(app.status(), Some("1 key not available on this page"));

        app.paste("4 sqrt neg");
        assert_eq!(app.status(), Some("2 keys not available on this page"));
    }

    #[test]
    fn test_frame_follows_active_page() {
        let mut app = app();
        press(
            &mut app,
            &[
                CalcEvent::Digit('7'),
                CalcEvent::Operator(Operator::Add),
                CalcEvent::Digit('1'),
                CalcEvent::Equals,
            ],
        );
        assert!(app.frame().text().contains("Basic Calculator"));
        app.handle(Input::NextPage);
        assert!(app.frame().text().contains("Advanced Calculator"));
    }
}
