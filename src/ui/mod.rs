//! Rendering of the pokedex TUI: search bar, card grid, footer hints and dialogs.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::{KeyMap, theme};

mod modals;
mod results;
mod search;

pub use modals::render_modal;
pub use results::render_results;
pub use search::render_search;

/// What: Draw one full frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable state (the grid records its column count)
///
/// Details:
/// - Layout top to bottom: search bar (3 rows), card grid, one-line key hints.
/// - An open dialog is drawn last, over everything else.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_search(f, app, chunks[0]);
    render_results(f, app, chunks[1]);

    let km = &app.keymap;
    let hint = |keys: &[crate::theme::KeyChord], what: &str| {
        vec![
            Span::styled(KeyMap::labels(keys), Style::default().fg(th.sapphire)),
            Span::styled(format!(" {what}  "), Style::default().fg(th.overlay1)),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(hint(&km.prev_page, "prev"));
    spans.extend(hint(&km.next_page, "next"));
    spans.extend(hint(&km.focus_search, "search"));
    spans.extend(hint(&km.type_filter, "type"));
    spans.extend(hint(&km.open_detail, "details"));
    spans.extend(hint(&km.help, "help"));
    spans.extend(hint(&km.exit, "quit"));
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);

    render_modal(f, app, area);
}
