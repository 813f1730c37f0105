//! Small helpers shared by the provider, renderers and runtime.

use std::fmt::Write;

/// What: Percent-encode a string for use in a URL path segment (RFC 3986).
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Encoded string; unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are kept.
///
/// Details:
/// - Space becomes `%20`; every other byte becomes `%XX` in uppercase hex.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Collapse all whitespace runs (including newlines and form feeds) into single spaces.
///
/// Inputs:
/// - `text`: Raw text such as a `PokeAPI` flavour text entry.
///
/// Output:
/// - Trimmed single-line string.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// What: Title-case an ASCII creature or type name for display (`"mr-mime"` → `"Mr-Mime"`).
#[must_use]
pub fn display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for ch in name.chars() {
        if upper_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = ch == '-' || ch == ' ';
    }
    out
}

/// What: Current local time formatted for log lines (`YYYY-MM-DD-T HH:MM:SS`).
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}

/// What: Open a URL in the default browser without blocking the UI.
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Details:
/// - Windows uses `cmd /c start`; other systems try `xdg-open`, then `open`.
/// - Spawns on a background thread and ignores errors.
/// - No-op during tests.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            {
                let _ = std::process::Command::new("cmd")
                    .args(["/c", "start", "", &url])
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn();
            }
            #[cfg(not(target_os = "windows"))]
            {
                let _ = std::process::Command::new("xdg-open")
                    .arg(&url)
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("open")
                            .arg(&url)
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
            }
        });
    }
}
