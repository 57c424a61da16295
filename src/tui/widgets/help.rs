//! Help overlay showing keybindings

use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

/// Render the help overlay centered over `area`
pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let popup = centered(area, 64, 20);
    frame.render_widget(Clear, popup);

    let block = theme.block(format!(" {} Keybinds ", icons.help), true);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Theme", &theme),
        keybind("Enter", "Generate palette", &theme),
        keybind("Backspace", "Delete character", &theme),
        keybind("Ctrl+u", "Clear input", &theme),
        keybind("Down", "Focus examples/cards", &theme),
        Line::default(),
        section_header("Examples", &theme),
        keybind("h / l", "Previous / next", &theme),
        keybind("1-6", "Generate example", &theme),
        keybind("Enter", "Generate selected", &theme),
        keybind("? / q", "Help / quit", &theme),
    ];

    let right_content = vec![
        section_header("Cards", &theme),
        keybind("h j k l", "Move selection", &theme),
        keybind("Enter / y", "Copy hex code", &theme),
        keybind("i / /", "Back to input", &theme),
        keybind("? / q", "Help / quit", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("Tab", "Next area", &theme),
        keybind("Shift+Tab", "Previous area", &theme),
        keybind("F1", "Toggle help", &theme),
        keybind("Esc", "Quit", &theme),
        keybind("Ctrl+c", "Quit", &theme),
    ];

    frame.render_widget(Paragraph::new(left_content).wrap(Wrap { trim: false }), cols[0]);
    frame.render_widget(Paragraph::new(right_content).wrap(Wrap { trim: false }), cols[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:11}", key),
            Style::default()
                .fg(theme.palette.fg_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
