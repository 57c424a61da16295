//! Color card grid - one card per palette entry

use crate::app::state::{AppState, Focus};
use crate::clipboard::{COPIED_LABEL, COPY_LABEL};
use crate::contrast::{foreground_for, swatch_color};
use crate::palette::ColorEntry;
use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

const CARD_MIN_WIDTH: u16 = 22;
const CARD_HEIGHT: u16 = 10;
const MAX_COLUMNS: usize = 6;
const SWATCH_HEIGHT: u16 = 3;

/// Label on a card's copy action.
pub fn copy_label(state: &AppState, index: usize) -> &'static str {
    if state.is_copied(index) { COPIED_LABEL } else { COPY_LABEL }
}

/// Cards per row for a grid `width` cells wide.
pub fn columns_for(width: u16, count: usize) -> usize {
    let fit = usize::from((width / CARD_MIN_WIDTH).max(1));
    fit.min(MAX_COLUMNS).min(count.max(1))
}

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let count = state.palette.as_ref().map_or(0, Vec::len);
    if count == 0 {
        return;
    }
    let columns = columns_for(area.width, count);
    state.card_columns = columns;

    let state = &*state;
    let Some(palette) = state.palette.as_deref() else {
        return;
    };
    let theme = get_theme();

    // Keep the selected row on screen when the grid is taller than the area.
    let rows = count.div_ceil(columns);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = state.card_selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    for (offset, row) in (first_row..rows.min(first_row + visible_rows)).enumerate() {
        let y = area.y + offset as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect { x: area.x, y, width: area.width, height };

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (col, cell) in cells.iter().enumerate() {
            let idx = row * columns + col;
            if let Some(color) = palette.get(idx) {
                render_card(frame, state, &theme, idx, color, *cell);
            }
        }
    }
}

fn render_card(frame: &mut Frame, state: &AppState, theme: &Theme, idx: usize, color: &ColorEntry, area: Rect) {
    let icons = &theme.icons;
    let selected = state.focus == Focus::Cards && state.card_selected == idx;

    let block = theme.block(String::new(), selected);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SWATCH_HEIGHT), // Swatch with hex
            Constraint::Length(1),             // Name
            Constraint::Min(1),                // Description
            Constraint::Length(1),             // Copy action
        ])
        .split(inner);

    let swatch_style = match swatch_color(&color.hex) {
        Some(bg) => Style::default()
            .bg(bg)
            .fg(foreground_for(&color.hex).color())
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(theme.palette.fg_secondary),
    };
    let swatch = Paragraph::new(vec![Line::default(), Line::from(color.hex.clone()), Line::default()])
        .style(swatch_style)
        .alignment(Alignment::Center);
    frame.render_widget(swatch, rows[0]);

    let name = Paragraph::new(Line::from(Span::styled(
        color.name.clone(),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(name, rows[1]);

    let description = Paragraph::new(color.description.clone())
        .style(Style::default().fg(theme.palette.fg_secondary))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, rows[2]);

    let copied = state.is_copied(idx);
    let (icon, label_style) = if copied {
        (icons.success, Style::default().fg(theme.palette.accent).add_modifier(Modifier::BOLD))
    } else if selected {
        (icons.copy, Style::default().fg(theme.palette.accent))
    } else {
        (icons.copy, Style::default().fg(theme.palette.fg_secondary))
    };
    let label = Paragraph::new(Line::from(Span::styled(
        format!("{} {}", icon, copy_label(state, idx)),
        label_style,
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(theme.palette.bg_secondary));
    frame.render_widget(label, rows[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn entry(hex: &str, name: &str) -> ColorEntry {
        ColorEntry {
            hex: hex.to_string(),
            name: name.to_string(),
            description: "Used in tests".to_string(),
        }
    }

    #[test]
    fn test_columns_for() {
        assert_eq!(columns_for(200, 6), 6);
        assert_eq!(columns_for(200, 5), 5);
        assert_eq!(columns_for(66, 6), 3);
        assert_eq!(columns_for(10, 6), 1);
    }

    #[test]
    fn test_render_sets_columns_and_shows_cards() {
        let mut state = AppState::new();
        let req = state.begin_request("x").unwrap();
        state.settle_request(
            req.id,
            Ok(vec![entry("#1A2B3C", "Ink"), entry("#FFFFFF", "Snow"), entry("#808080", "Ash")]),
        );
        state.mark_copied(1);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, &mut state, area);
            })
            .unwrap();

        assert_eq!(state.card_columns, 3);
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("#1A2B3C"));
        assert!(text.contains("Snow"));
        assert!(text.contains(COPIED_LABEL));
        assert!(text.contains(COPY_LABEL));
    }
}
