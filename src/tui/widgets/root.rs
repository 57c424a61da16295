//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, EXAMPLE_THEMES, Focus, Phase};
use crate::tui::theme::{LoadingSpinner, Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{cards, help};

/// Rows taken by the error banner, including the gap above it.
const ERROR_BANNER_HEIGHT: u16 = 5;

/// Main layout structure:
/// ┌───────────────────────────────────────────────┐
/// │  Tint - palette generator          (tagline)  │
/// │ ╭ Theme ─────────────────────────────────────╮ │
/// │ │ e.g., 'Vibrant Autumn Forest'               │ │
/// │ ╰─────────────────────────────────────────────╯ │
/// │   examples | spinner | error banner | cards    │
/// │ key hints                                      │
/// └───────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let root = frame.area();
    let theme = get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Theme input
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Key hints
        ])
        .split(root);

    render_header(frame, &theme, rows[0]);
    render_input(frame, state, &theme, rows[1]);
    render_body(frame, state, &theme, rows[2]);
    render_hints(frame, state, &theme, rows[3]);

    if state.show_help {
        help::render(frame, root);
    }
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} Tint", theme.icons.palette),
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter a theme, mood, or idea to generate a unique color palette for your next project.",
            Style::default().fg(theme.palette.fg_secondary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let focused = state.focus == Focus::Input && !state.loading;
    let hint = if state.loading { "Generating..." } else { "Enter: Generate" };
    let block = theme
        .block(format!(" {} Theme ", theme.icons.search), focused)
        .title_bottom(Line::from(format!(" {hint} ")).right_aligned());

    let line = if state.theme.is_empty() && !state.loading {
        Line::from(Span::styled(
            "e.g., 'Vibrant Autumn Forest'",
            Style::default().fg(theme.palette.fg_secondary),
        ))
    } else if state.loading {
        Line::from(Span::styled(
            state.theme.clone(),
            Style::default().fg(theme.palette.fg_secondary),
        ))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::from(Span::styled(
            format!("{}{}", state.theme, cursor),
            Style::default().fg(theme.palette.fg_primary),
        ))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_body(frame: &mut Frame, state: &mut AppState, theme: &Theme, area: Rect) {
    match state.phase() {
        Phase::Idle => render_examples(frame, state, theme, area),
        Phase::Loading => render_loading(frame, state, theme, area),
        Phase::Failure if state.palette.as_ref().is_some_and(|p| !p.is_empty()) => {
            // A rejected blank submit keeps the last palette under the banner.
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(ERROR_BANNER_HEIGHT), Constraint::Min(0)])
                .split(area);
            render_error(frame, state, theme, parts[0]);
            cards::render(frame, state, parts[1]);
        }
        Phase::Failure => render_error(frame, state, theme, area),
        Phase::Success => {
            if state.palette.as_ref().is_some_and(Vec::is_empty) {
                let empty = Paragraph::new("The model returned no colors. Try another theme.")
                    .style(Style::default().fg(theme.palette.fg_secondary))
                    .alignment(Alignment::Center);
                frame.render_widget(empty, area);
            } else {
                cards::render(frame, state, area);
            }
        }
    }
}

fn render_examples(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;
    let focused = state.focus == Focus::Examples;

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{} Or try an example:", icons.example),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (i, example) in EXAMPLE_THEMES.iter().enumerate() {
        let is_selected = focused && state.example_selected == i;
        let marker = if is_selected { icons.selected } else { " " };
        let style = if is_selected {
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.palette.fg_secondary)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} {}. ", i + 1), style),
            Span::styled(*example, style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_loading(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let spinner = LoadingSpinner::frame(state.tick);
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{spinner} Generating..."),
            Style::default().fg(theme.palette.accent),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_error(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let Some(error) = state.error.as_deref() else {
        return;
    };

    let banner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(ERROR_BANNER_HEIGHT - 1),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let block = theme
        .block(String::new(), false)
        .border_style(Style::default().fg(theme.palette.error));
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} Error: ", theme.icons.error),
            Style::default()
                .fg(theme.palette.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(error.to_string(), Style::default().fg(theme.palette.error)),
    ]))
    .style(Style::default().bg(theme.palette.error_bg))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(banner, banner_area);
}

fn render_hints(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let hints = match state.focus {
        Focus::Input => "Enter generate · Tab next · Ctrl+u clear · F1 help · Esc quit",
        Focus::Examples => "←/→ choose · Enter generate · 1-6 quick pick · i input · ? help · q quit",
        Focus::Cards => "←↑↓→ move · Enter/y copy hex · i input · ? help · q quit",
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(theme.palette.fg_secondary)));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::EMPTY_THEME_MESSAGE;
    use crate::palette::ColorEntry;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_idle_shows_examples() {
        let mut state = AppState::new();
        let text = screen_text(&mut state);
        for example in EXAMPLE_THEMES {
            assert!(text.contains(example), "missing {example}");
        }
    }

    #[test]
    fn test_loading_hides_examples() {
        let mut state = AppState::new();
        state.begin_request("Retro Arcade").unwrap();
        let text = screen_text(&mut state);
        assert!(text.contains("Generating..."));
        assert!(!text.contains("Minimalist Zen"));
    }

    #[test]
    fn test_error_banner() {
        let mut state = AppState::new();
        assert!(state.begin_request("").is_none());
        let text = screen_text(&mut state);
        assert!(text.contains("Error:"));
        assert!(text.contains(EMPTY_THEME_MESSAGE));
        assert!(!text.contains("Or try an example"));
    }

    #[test]
    fn test_blank_submit_keeps_cards_under_banner() {
        let mut state = AppState::new();
        let req = state.begin_request("Calm Beach Sunset").unwrap();
        let palette = ["#1A2B3C", "#F4E1C1", "#2E86AB"]
            .iter()
            .map(|hex| ColorEntry {
                hex: hex.to_string(),
                name: "Shore".to_string(),
                description: "Used in tests".to_string(),
            })
            .collect();
        state.settle_request(req.id, Ok(palette));
        assert!(state.begin_request("").is_none());

        let text = screen_text(&mut state);
        assert_eq!(state.phase(), Phase::Failure);
        assert!(text.contains(EMPTY_THEME_MESSAGE));
        assert!(text.contains("#1A2B3C"));
        assert!(text.contains("#2E86AB"));
    }
}
