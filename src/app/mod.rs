//! Application state types and entry glue.
//!
//! Defines the TUI state (input mode, search input, theme) around the
//! request [`Store`], plus helpers to construct defaults and to run the
//! application loop (re-exported as `run`).

pub mod update;

use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::debounce::Debouncer;
use crate::store::Store;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Persisted theme preference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Load the preference from a simple `key = value` file. If the file is
    /// missing, write one with the default and return it; unknown values
    /// fall back to dark.
    pub fn load_or_init(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            return Self::from_file(path).unwrap_or(Self::Dark);
        }
        let mode = Self::Dark;
        let _ = mode.write_file(path);
        mode
    }

    fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(|s| s.trim()).unwrap_or("");
            let val = parts.next().map(|s| s.trim()).unwrap_or("");
            if key == "theme" {
                return Self::parse(val);
            }
        }
        None
    }

    /// Persist the preference in `key = value` format.
    pub fn write_file(self, path: &str) -> std::io::Result<()> {
        let buf = format!(
            "# ghuser-search theme configuration\n# theme: dark or light\n\ntheme = {}\n",
            self.as_str()
        );
        std::fs::write(path, buf)
    }
}

/// Color palette for the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub mode: ThemeMode,
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub error_fg: Color,
}

impl Theme {
    /// Catppuccin Mocha palette.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            muted: Color::Rgb(0x58, 0x5b, 0x70),
            title: Color::Rgb(0xcb, 0xa6, 0xf7),
            border: Color::Rgb(0x58, 0x5b, 0x70),
            header_bg: Color::Rgb(0x31, 0x32, 0x44),
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf),
            error_fg: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }

    /// Catppuccin Latte palette.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            text: Color::Rgb(0x4c, 0x4f, 0x69),
            muted: Color::Rgb(0xac, 0xb0, 0xbe),
            title: Color::Rgb(0x88, 0x39, 0xef),
            border: Color::Rgb(0xac, 0xb0, 0xbe),
            header_bg: Color::Rgb(0xe6, 0xe9, 0xef),
            header_fg: Color::Rgb(0x72, 0x87, 0xfd),
            status_bg: Color::Rgb(0xcc, 0xd0, 0xda),
            status_fg: Color::Rgb(0x4c, 0x4f, 0x69),
            highlight_fg: Color::Rgb(0xdf, 0x8e, 0x1d),
            error_fg: Color::Rgb(0xd2, 0x0f, 0x39),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

/// Startup knobs carried from the CLI into the loop.
#[derive(Clone, Debug)]
pub struct AppOptions {
    pub debounce: Duration,
    pub theme_file: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self { debounce: Duration::from_millis(300), theme_file: "theme.conf".to_string() }
    }
}

pub struct AppState {
    pub started_at: Instant,
    /// Live text in the search prompt.
    pub input: String,
    /// Last committed (debounced) term; drives requests and not-found text.
    pub query: String,
    pub debouncer: Debouncer<String>,
    pub store: Store,
    pub input_mode: InputMode,
    pub selected_index: usize,
    pub cards_per_page: usize,
    pub theme: Theme,
    pub theme_file: String,
}

impl AppState {
    pub fn new(options: &AppOptions) -> Self {
        Self {
            started_at: Instant::now(),
            input: String::new(),
            query: String::new(),
            debouncer: Debouncer::new(options.debounce),
            store: Store::new(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            cards_per_page: 9,
            theme: Theme::from_mode(ThemeMode::load_or_init(&options.theme_file)),
            theme_file: options.theme_file.clone(),
        }
    }

    /// Flip the theme and persist the new preference.
    pub fn toggle_theme(&mut self) {
        let mode = self.theme.mode.toggled();
        self.theme = Theme::from_mode(mode);
        let _ = mode.write_file(&self.theme_file);
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_parses_known_values_only() {
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse(" Light "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("solarized"), None);
    }

    #[test]
    fn theme_mode_round_trips_through_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.conf");
        let path = path.to_str().unwrap();

        ThemeMode::Light.write_file(path).unwrap();
        assert_eq!(ThemeMode::load_or_init(path), ThemeMode::Light);
    }

    #[test]
    fn missing_config_file_is_created_with_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.conf");
        let path = path.to_str().unwrap();

        assert_eq!(ThemeMode::load_or_init(path), ThemeMode::Dark);
        assert!(std::path::Path::new(path).exists());
    }

    #[test]
    fn toggling_the_theme_persists_the_preference() {
        let dir = tempfile::tempdir().unwrap();
        let options = AppOptions {
            theme_file: dir.path().join("theme.conf").to_str().unwrap().to_string(),
            ..AppOptions::default()
        };
        let mut app = AppState::new(&options);
        assert_eq!(app.theme.mode, ThemeMode::Dark);

        app.toggle_theme();
        assert_eq!(app.theme.mode, ThemeMode::Light);
        assert_eq!(ThemeMode::load_or_init(&options.theme_file), ThemeMode::Light);
    }
}
