//! Plain-text renderer used by the one-shot command-line mode.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use super::{DetailView, ListView, Renderer};
use crate::state::TypeOption;
use crate::util::display_name;

/// Renders fragments as aligned text lines on any writer (stdout in practice).
pub struct TextRenderer<W: Write + Send> {
    /// Destination.
    out: W,
}

impl<W: Write + Send> TextRenderer<W> {
    /// Wrap a writer.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer (tests read the buffer).
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one line, logging instead of failing if the writer is closed.
    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "failed to write output line");
        }
    }
}

/// What: Pad `s` with spaces to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

impl<W: Write + Send> Renderer for TextRenderer<W> {
    fn render_list(&mut self, view: &ListView) {
        match view {
            ListView::Loading => self.line("Loading..."),
            ListView::Notice(n) => self.line(&n.text),
            ListView::Cards(cards) => {
                let name_w = cards
                    .iter()
                    .map(|c| UnicodeWidthStr::width(c.name.as_str()))
                    .max()
                    .unwrap_or(0);
                let id_w = cards
                    .iter()
                    .map(|c| c.id.to_string().len() + 1)
                    .max()
                    .unwrap_or(0);
                for c in cards {
                    let row = format!(
                        "{}  {}  {}",
                        pad(&format!("#{}", c.id), id_w),
                        pad(&c.name, name_w),
                        c.sprite_url
                    );
                    self.line(&row);
                }
            }
        }
    }

    fn render_detail(&mut self, view: &DetailView) {
        match view {
            DetailView::Failed { notice, .. } => self.line(&notice.text),
            DetailView::Ready(d) => {
                self.line(&format!("{} (#{})", display_name(&d.name), d.id));
                self.line(&format!("Types: {}", d.types_label()));
                self.line(&format!("Description: {}", d.description));
                self.line(&format!("Artwork: {}", d.sprite_url));
            }
        }
    }

    fn render_type_options(&mut self, options: &[TypeOption]) {
        for o in options {
            self.line(&o.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Padding counts terminal columns, not bytes.
    fn pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("é", 2), "é ");
        assert_eq!(pad("long", 2), "long");
    }
}
