use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, EXAMPLE_THEMES, Focus};
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err()
                        {
                            break;
                        }
                    }
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => {
                        if tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err() {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Resize)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::SelectUp),
            MouseEventKind::ScrollDown => Some(Action::SelectDown),
            _ => None,
        },
        InputEvent::Key(k) => handle_key(state, k),
    }
}

fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    // Global bindings
    match k.code {
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => return Some(Action::Quit),
        KeyCode::F(1) => return Some(Action::ToggleHelp),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    if state.show_help {
        return match k.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    match state.focus {
        Focus::Input => handle_input_focus(state, k),
        Focus::Examples => handle_examples_focus(k),
        Focus::Cards => handle_cards_focus(k),
    }
}

fn handle_input_focus(state: &AppState, k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Down if state.examples_visible() => Some(Action::SetFocus(Focus::Examples)),
        KeyCode::Down => Some(Action::SetFocus(Focus::Cards)),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::ClearInput),
        KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_examples_focus(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Up => Some(Action::SetFocus(Focus::Input)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SelectLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SelectRight),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c.to_digit(10)? as usize - 1;
            (idx < EXAMPLE_THEMES.len()).then_some(Action::SelectExample(idx))
        }
        _ => None,
    }
}

fn handle_cards_focus(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::SetFocus(Focus::Input)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SelectLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SelectRight),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectDown),
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::CopySelected),
        _ => None,
    }
}
