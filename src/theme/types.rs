use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use crate::logic::DEFAULT_LANGUAGE;
use crate::sources::DEFAULT_BASE_URL;
use crate::state::{DEFAULT_PAGE_SIZE, DEFAULT_SPRITE_BASE_URL};

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade for highlighted text backgrounds.
    pub crust: Color,
    /// Subtle surface color for unfocused borders.
    pub surface1: Color,
    /// Subtle surface color for card borders.
    pub surface2: Color,
    /// Muted color for titles and hints.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for interactive highlights.
    pub sapphire: Color,
    /// Accent for focused borders and headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent for the selected card.
    pub lavender: Color,
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    /// Return a short display label such as "Ctrl+C", "F1", "→".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }

    /// Whether a key event matches this chord.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        let mods = if matches!(code, KeyCode::Char(_)) {
            mods - KeyModifiers::SHIFT
        } else {
            mods
        };
        self.code == code && self.mods == mods
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug)]
pub struct KeyMap {
    /// Load the next page.
    pub next_page: Vec<KeyChord>,
    /// Load the previous page.
    pub prev_page: Vec<KeyChord>,
    /// Move the card highlight up one row.
    pub move_up: Vec<KeyChord>,
    /// Move the card highlight down one row.
    pub move_down: Vec<KeyChord>,
    /// Move the card highlight left one card.
    pub move_left: Vec<KeyChord>,
    /// Move the card highlight right one card.
    pub move_right: Vec<KeyChord>,
    /// Open the detail view for the highlighted card.
    pub open_detail: Vec<KeyChord>,
    /// Focus the search input.
    pub focus_search: Vec<KeyChord>,
    /// Open the type filter picker.
    pub type_filter: Vec<KeyChord>,
    /// Open the artwork URL in a browser (detail view).
    pub open_artwork: Vec<KeyChord>,
    /// Show the key binding overview.
    pub help: Vec<KeyChord>,
    /// Quit.
    pub exit: Vec<KeyChord>,
}

impl KeyMap {
    /// Labels of a chord list joined with `/` (`"→/n"`).
    #[must_use]
    pub fn labels(list: &[KeyChord]) -> String {
        list.iter()
            .map(KeyChord::label)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{Char, Down, Enter, Left, Right, Up};
        let p = KeyChord::plain;
        Self {
            next_page: vec![p(Right), p(Char('n'))],
            prev_page: vec![p(Left), p(Char('p'))],
            move_up: vec![p(Up), p(Char('k'))],
            move_down: vec![p(Down), p(Char('j'))],
            move_left: vec![p(Char('h'))],
            move_right: vec![p(Char('l'))],
            open_detail: vec![p(Enter)],
            focus_search: vec![p(Char('/'))],
            type_filter: vec![p(Char('t'))],
            open_artwork: vec![p(Char('o'))],
            help: vec![p(Char('?'))],
            exit: vec![
                p(Char('q')),
                KeyChord {
                    code: Char('c'),
                    mods: KeyModifiers::CONTROL,
                },
            ],
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Provider base address.
    pub api_base_url: String,
    /// Artwork directory; `{id}.png` is appended.
    pub sprite_base_url: String,
    /// Cards per page (at least 1).
    pub page_size: u32,
    /// Flavour-text language code.
    pub description_language: String,
    /// Whole-request timeout in seconds; 0 disables it.
    pub http_timeout_secs: u64,
    /// Key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            sprite_base_url: DEFAULT_SPRITE_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            description_language: DEFAULT_LANGUAGE.to_string(),
            http_timeout_secs: 0,
            keymap: KeyMap::default(),
        }
    }
}

impl Settings {
    /// Request timeout, if one is configured.
    #[must_use]
    pub const fn http_timeout(&self) -> Option<std::time::Duration> {
        if self.http_timeout_secs == 0 {
            None
        } else {
            Some(std::time::Duration::from_secs(self.http_timeout_secs))
        }
    }

    /// Controller parameters derived from these settings.
    #[must_use]
    pub fn controller_config(&self) -> crate::logic::ControllerConfig {
        crate::logic::ControllerConfig {
            page_size: self.page_size,
            language: self.description_language.clone(),
            sprite_base_url: self.sprite_base_url.clone(),
        }
    }
}
