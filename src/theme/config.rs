use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::paths::{default_settings_path, resolve_settings_config_path};

/// Skeleton `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Pokedex settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# ---------- Data source ----------\n\
api_base_url = https://pokeapi.co/api/v2\n\
sprite_base_url = https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork\n\
# Whole-request timeout in seconds (0 = none)\n\
http_timeout_secs = 0\n\
#\n\
# ---------- Listing ----------\n\
page_size = 20\n\
# Language code of the detail description (es, en, fr, ...)\n\
description_language = es\n\
#\n\
# ---------- Key bindings ----------\n\
# Comma-separated chords, e.g. Ctrl+N, Right, F5\n\
keybind_next_page = Right, n\n\
keybind_prev_page = Left, p\n\
keybind_move_up = Up, k\n\
keybind_move_down = Down, j\n\
keybind_move_left = h\n\
keybind_move_right = l\n\
keybind_open_detail = Enter\n\
keybind_focus_search = /\n\
keybind_type_filter = t\n\
keybind_open_artwork = o\n\
keybind_help = ?\n\
keybind_exit = q, Ctrl+C\n";

/// What: Make sure a `settings.conf` exists, writing the skeleton when it is missing or empty.
///
/// Output:
/// - Path of the settings file in use.
///
/// Details:
/// - An existing non-empty file is never touched.
#[must_use]
pub fn ensure_settings_file() -> PathBuf {
    let path = resolve_settings_config_path().unwrap_or_else(default_settings_path);
    let written = write_skeleton_if_empty(&path);
    debug!(path = %path.display(), written, "[Config] settings file ready");
    path
}

/// Write [`SETTINGS_SKELETON_CONTENT`] to `path` unless it already has content.
#[must_use]
pub fn write_skeleton_if_empty(path: &Path) -> bool {
    let empty = !fs::metadata(path).is_ok_and(|m| m.len() > 0);
    if !empty {
        return false;
    }
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match fs::write(path, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => {
            info!(path = %path.display(), "[Config] wrote default settings skeleton");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "[Config] could not write settings skeleton");
            false
        }
    }
}
