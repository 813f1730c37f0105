use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::render::DetailView;
use crate::state::{AppState, Modal};
use crate::theme::{KeyMap, Theme, theme};
use crate::util::display_name;

/// What: Rectangle of at most `w` x `h` centered in `area`.
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Rounded dialog frame with a mauve title.
fn dialog_block(title: &str, th: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.base))
}

/// What: Draw whichever dialog `app.modal` names over `area`.
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Help => render_help(f, &app.keymap, area),
        Modal::TypePicker { selected } => render_type_picker(f, app, *selected, area),
        Modal::Detail { id, view } => render_detail(f, &app.keymap, *id, view.as_ref(), area),
    }
}

/// What: Key binding overview built from the active keymap.
pub(crate) fn help_lines(km: &KeyMap) -> Vec<(String, &'static str)> {
    vec![
        (KeyMap::labels(&km.next_page), "Next page"),
        (KeyMap::labels(&km.prev_page), "Previous page"),
        (
            format!(
                "{} {} {} {}",
                KeyMap::labels(&km.move_up),
                KeyMap::labels(&km.move_down),
                KeyMap::labels(&km.move_left),
                KeyMap::labels(&km.move_right)
            ),
            "Move selection",
        ),
        (KeyMap::labels(&km.open_detail), "Open details"),
        (KeyMap::labels(&km.focus_search), "Search by name or number"),
        (KeyMap::labels(&km.type_filter), "Filter by type"),
        (KeyMap::labels(&km.open_artwork), "Open artwork (in details)"),
        (KeyMap::labels(&km.help), "This help"),
        (KeyMap::labels(&km.exit), "Quit / close dialog"),
    ]
}

fn render_help(f: &mut Frame, km: &KeyMap, area: Rect) {
    let th = theme();
    let entries = help_lines(km);
    let key_w = entries.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let lines: Vec<Line> = entries
        .into_iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:<key_w$}  "),
                    Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                ),
                Span::styled(what, Style::default().fg(th.text)),
            ])
        })
        .collect();
    let rect = centered(area, 60, u16::try_from(lines.len() + 2).unwrap_or(u16::MAX));
    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(lines).block(dialog_block("Help", &th)), rect);
}

fn render_type_picker(f: &mut Frame, app: &AppState, selected: usize, area: Rect) {
    let th = theme();
    let current = app.status.type_filter.as_deref();
    let mut items = vec![ListItem::new(Span::styled(
        "All types",
        Style::default().fg(if current.is_none() { th.green } else { th.text }),
    ))];
    items.extend(app.type_options.iter().map(|t| {
        let active = current == Some(t.name.as_str());
        ListItem::new(Span::styled(
            display_name(&t.name),
            Style::default().fg(if active { th.green } else { th.text }),
        ))
    }));
    let h = u16::try_from(items.len() + 2).unwrap_or(u16::MAX);
    let rect = centered(area, 30, h.min(area.height.saturating_sub(2)));
    let list = List::new(items)
        .block(dialog_block("Type", &th))
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_widget(Clear, rect);
    f.render_stateful_widget(list, rect, &mut state);
}

fn render_detail(f: &mut Frame, km: &KeyMap, id: u32, view: Option<&DetailView>, area: Rect) {
    let th = theme();
    let label = |s: &'static str| Span::styled(s, Style::default().fg(th.overlay1));
    let (title, lines) = match view {
        None => (
            format!("#{id:03}"),
            vec![Line::from(Span::styled(
                "Loading...",
                Style::default().fg(th.subtext0),
            ))],
        ),
        Some(DetailView::Failed { notice, .. }) => (
            format!("#{id:03}"),
            vec![Line::from(Span::styled(
                notice.text.clone(),
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            ))],
        ),
        Some(DetailView::Ready(d)) => (
            format!("{} #{:03}", display_name(&d.name), d.id),
            vec![
                Line::from(vec![
                    label("Types: "),
                    Span::styled(d.types_label(), Style::default().fg(th.yellow)),
                ]),
                Line::from(""),
                Line::from(Span::styled(d.description.clone(), Style::default().fg(th.text))),
                Line::from(""),
                Line::from(vec![
                    label("Artwork: "),
                    Span::styled(d.sprite_url.clone(), Style::default().fg(th.sapphire)),
                ]),
                Line::from(vec![
                    label("Open artwork: "),
                    Span::styled(KeyMap::labels(&km.open_artwork), Style::default().fg(th.green)),
                ]),
            ],
        ),
    };
    let rect = centered(area, 70, 14);
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(dialog_block(&title, &th)),
        rect,
    );
}
