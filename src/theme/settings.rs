use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::parsing::{parse_key_chord_list, strip_inline_comment};
use super::paths::resolve_settings_config_path;
use super::types::{KeyChord, Settings};
use crate::error::PokedexError;

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when the file is missing.
///
/// Details:
/// - Invalid values are logged and leave the default in place.
#[must_use]
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let Some(path) = resolve_settings_config_path() else {
        debug!("[Config] no settings.conf found, using defaults");
        return out;
    };
    load_settings_from(&path, &mut out);
    out
}

/// What: Read one settings file into `settings`.
///
/// Inputs:
/// - `path`: File to read
/// - `settings`: Values to overwrite
///
/// Details:
/// - An unreadable file is logged and skipped.
pub fn load_settings_from(path: &Path, settings: &mut Settings) {
    match fs::read_to_string(path) {
        Ok(content) => {
            let rejected = parse_settings(&content, settings);
            info!(path = %path.display(), rejected = rejected.len(), "[Config] loaded settings");
        }
        Err(e) => warn!(path = %path.display(), error = %e, "[Config] failed to read settings"),
    }
}

/// What: Parse `key = value` lines of settings.conf content.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Mutable reference to `Settings` to populate
///
/// Output:
/// - One `PokedexError::Config` per rejected value; `settings` is modified in place.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - `keybind_*` keys replace the whole chord list of one action.
/// - A rejected value is logged and leaves the previous value in place.
/// - Unknown keys are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) -> Vec<PokedexError> {
    let mut rejected = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        let outcome = if let Some(action) = key.strip_prefix("keybind_") {
            apply_keybind(action, val, settings)
        } else {
            apply_value(&key, val, settings)
        };
        if let Err(e) = outcome {
            warn!(error = %e, "[Config] keeping previous value");
            rejected.push(e);
        }
    }
    rejected
}

/// Build the error for a rejected `key = value` line.
fn invalid(key: &str, val: &str, expected: &str) -> PokedexError {
    PokedexError::Config(format!("{key} = '{val}': {expected}"))
}

/// Apply one plain setting.
fn apply_value(key: &str, val: &str, settings: &mut Settings) -> Result<(), PokedexError> {
    match key {
        "api_base_url" | "base_url" => {
            if !(val.starts_with("http://") || val.starts_with("https://")) {
                return Err(invalid(key, val, "expected an http(s) URL"));
            }
            settings.api_base_url = val.trim_end_matches('/').to_string();
        }
        "sprite_base_url" => {
            if val.is_empty() {
                return Err(invalid(key, val, "expected a URL"));
            }
            settings.sprite_base_url = val.trim_end_matches('/').to_string();
        }
        "page_size" | "limit" => match val.parse::<u32>() {
            Ok(v) if v > 0 => settings.page_size = v,
            _ => return Err(invalid(key, val, "expected a positive integer")),
        },
        "description_language" | "language" => {
            if val.is_empty() {
                return Err(invalid(key, val, "expected a language code"));
            }
            settings.description_language = val.to_ascii_lowercase();
        }
        "http_timeout_secs" | "timeout" => match val.parse::<u64>() {
            Ok(v) => settings.http_timeout_secs = v,
            Err(_) => return Err(invalid(key, val, "expected whole seconds")),
        },
        _ => {}
    }
    Ok(())
}

/// Replace the chords of one action; an unparsable list keeps the defaults.
fn apply_keybind(action: &str, val: &str, settings: &mut Settings) -> Result<(), PokedexError> {
    let km = &mut settings.keymap;
    let slot: &mut Vec<KeyChord> = match action {
        "next_page" => &mut km.next_page,
        "prev_page" | "previous_page" => &mut km.prev_page,
        "move_up" | "up" => &mut km.move_up,
        "move_down" | "down" => &mut km.move_down,
        "move_left" | "left" => &mut km.move_left,
        "move_right" | "right" => &mut km.move_right,
        "open_detail" | "details" => &mut km.open_detail,
        "focus_search" | "search" => &mut km.focus_search,
        "type_filter" => &mut km.type_filter,
        "open_artwork" => &mut km.open_artwork,
        "help" => &mut km.help,
        "exit" | "quit" => &mut km.exit,
        other => {
            return Err(invalid(&format!("keybind_{other}"), val, "unknown action"));
        }
    };
    let chords = parse_key_chord_list(val)
        .ok_or_else(|| invalid(&format!("keybind_{action}"), val, "no valid key chord"))?;
    *slot = chords;
    Ok(())
}
