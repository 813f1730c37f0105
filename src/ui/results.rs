use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::error::NoticeKind;
use crate::render::ListView;
use crate::state::AppState;
use crate::theme::theme;
use crate::util::display_name;

/// Card width in cells, borders included.
const CARD_W: u16 = 22;
/// Card height in cells, borders included.
const CARD_H: u16 = 4;

/// What: Number of card columns that fit in `width`.
pub(crate) fn grid_columns_for(width: u16) -> usize {
    usize::from((width / CARD_W).max(1))
}

/// What: First grid row to draw so the highlighted card stays visible.
const fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected_row;
    }
    selected_row.saturating_sub(visible_rows - 1)
}

/// What: Render the card grid, a loading line, or a notice.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable state; `grid_columns` is updated for Up/Down navigation
/// - `area`: Target rectangle
///
/// Details:
/// - Cards are laid out left to right, top to bottom, in controller order.
/// - Rows scroll so the highlighted card is always on screen.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let title = match &app.list {
        ListView::Cards(c) => format!("Pokémon ({})", c.len()),
        ListView::Loading | ListView::Notice(_) => "Pokémon".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cards = match &app.list {
        ListView::Loading => {
            let p = Paragraph::new(Span::styled("Loading...", Style::default().fg(th.subtext0)))
                .alignment(Alignment::Center);
            f.render_widget(p, inner);
            return;
        }
        ListView::Notice(n) => {
            let color = match n.kind {
                NoticeKind::NotFound => th.yellow,
                NoticeKind::Network | NoticeKind::MissingLocalizedText => th.red,
            };
            let p = Paragraph::new(Span::styled(
                n.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            f.render_widget(p, inner);
            return;
        }
        ListView::Cards(cards) => cards,
    };

    let columns = grid_columns_for(inner.width);
    app.grid_columns = columns;
    let visible_rows = usize::from(inner.height / CARD_H);
    let first_row = first_visible_row(app.selected / columns, visible_rows);

    for (i, card) in cards.iter().enumerate().skip(first_row * columns) {
        let row = i / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = i % columns;
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            break;
        };
        let rect = Rect {
            x: inner.x + col * CARD_W,
            y: inner.y + row * CARD_H,
            width: CARD_W.min(inner.width),
            height: CARD_H,
        };
        let highlighted = i == app.selected;
        let border = if highlighted { th.lavender } else { th.surface1 };
        let name_style = if highlighted {
            Style::default().fg(th.crust).bg(th.lavender).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text).add_modifier(Modifier::BOLD)
        };
        let body = Paragraph::new(vec![
            Line::from(Span::styled(display_name(&card.name), name_style)),
            Line::from(Span::styled(
                format!("#{:03}", card.id),
                Style::default().fg(th.subtext0),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(body, rect);
    }
}
