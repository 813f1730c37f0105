use ratatui::{
    Frame,
    layout::Rect,
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::display_name;

/// What: Title spans for the search bar: page position, type filter and a busy marker.
///
/// Details:
/// - Pages are shown 1-based; `offset / page_size + 1`.
/// - The type label is dimmed once paging or a search has replaced the filtered list.
fn status_spans(app: &AppState) -> Vec<Span<'static>> {
    let th = theme();
    let st = &app.status;
    let page = st.offset / st.page_size.max(1) + 1;
    let mut spans = vec![Span::styled(
        format!(" Page {page} "),
        Style::default().fg(th.overlay1),
    )];
    if let Some(t) = &st.type_filter {
        let style = if st.filter_shown {
            Style::default().fg(th.yellow)
        } else {
            Style::default().fg(th.overlay1).add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(format!(" Type: {} ", display_name(t)), style));
    }
    if st.busy {
        spans.push(Span::styled(
            " Loading... ",
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ));
    }
    spans
}

/// What: Render the search input with its status title and place the cursor when focused.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (input text, focus, controller status)
/// - `area`: Target rectangle
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let input_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let mut title = vec![Span::styled(
        if focused { "Search (focused)" } else { "Search" },
        Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
    )];
    title.extend(status_spans(app));
    let input = Paragraph::new(input_line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Line::from(title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
        );
    f.render_widget(input, area);

    if focused {
        let right = area.x + area.width.saturating_sub(2);
        let typed = u16::try_from(UnicodeWidthStr::width(app.input.as_str())).unwrap_or(u16::MAX);
        let x = (area.x + 3).saturating_add(typed).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
