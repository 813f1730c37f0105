use crossterm::event::{KeyCode, KeyModifiers};

use super::types::KeyChord;

/// What: Parse a single key identifier (e.g., "F5", "Esc", "?", "n") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the input token is unsupported.
///
/// Details:
/// - Supports function keys, navigation keys, and single printable characters.
/// - Normalizes character keys to lowercase for consistent matching.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" | "PGUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" | "PGDN" => Some(KeyCode::PageDown),
        "UP" | "ARROWUP" => Some(KeyCode::Up),
        "DOWN" | "ARROWDOWN" => Some(KeyCode::Down),
        "LEFT" | "ARROWLEFT" => Some(KeyCode::Left),
        "RIGHT" | "ARROWRIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// What: Parse a full key chord such as "Ctrl+C" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `spec`: String combining optional modifiers with a key token.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` on an unknown key token.
///
/// Details:
/// - Recognizes Ctrl/Alt/Shift/Super modifiers in any case.
/// - Normalizes `Shift+Tab` to the dedicated `BackTab` key code and clears modifiers.
pub(crate) fn parse_key_chord(spec: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<String> = None;
    for part in spec.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            "SUPER" | "META" | "WIN" => mods |= KeyModifiers::SUPER,
            _ => key_part = Some(p.to_string()),
        }
    }
    if key_part
        .as_deref()
        .is_some_and(|k| k.eq_ignore_ascii_case("TAB"))
        && mods.contains(KeyModifiers::SHIFT)
    {
        return Some(KeyChord {
            code: KeyCode::BackTab,
            mods: KeyModifiers::empty(),
        });
    }
    let code = parse_key_identifier(key_part.as_deref().unwrap_or(""))?;
    Some(KeyChord { code, mods })
}

/// What: Parse a comma-separated list of chords (`"Right, n"`).
///
/// Output:
/// - Every chord that parsed; `None` if none did (caller keeps its default).
pub(crate) fn parse_key_chord_list(spec: &str) -> Option<Vec<KeyChord>> {
    let chords: Vec<KeyChord> = spec.split(',').filter_map(parse_key_chord).collect();
    if chords.is_empty() { None } else { Some(chords) }
}

/// What: Remove inline comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw value that may include inline comments.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Strips trailing `//` sections and ` #` sections; URLs keep their `//` after a scheme.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    let mut search_from = 0;
    while let Some(rel) = s[search_from..].find("//") {
        let i = search_from + rel;
        if i > 0 && s[..i].ends_with(':') {
            search_from = i + 2;
            continue;
        }
        end = i;
        break;
    }
    let mut t = &s[..end];
    if let Some(i) = t.find(" #") {
        t = &t[..i];
    } else if t.trim_start().starts_with('#') {
        t = "";
    }
    t.trim()
}
