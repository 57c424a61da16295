use crate::palette::ColorEntry;
use std::collections::HashMap;

pub const EXAMPLE_THEMES: [&str; 6] = [
    "Modern Office",
    "Calm Beach Sunset",
    "Retro Arcade",
    "Enchanted Forest",
    "Cyberpunk City",
    "Minimalist Zen",
];

pub const EMPTY_THEME_MESSAGE: &str = "Please enter a theme or mood.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Where the request state currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Examples,
    Cards,
}

/// A generation request that has been issued and not yet settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: u64,
    pub theme: String,
}

/// Result of a generation request as the controller sees it: a palette or a message.
pub type Outcome = Result<Vec<ColorEntry>, String>;

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub focus: Focus,
    pub show_help: bool,

    // Request state
    pub theme: String,
    pub loading: bool,
    pub error: Option<String>,
    pub palette: Option<Vec<ColorEntry>>,
    latest_request: u64,

    // Selection
    pub example_selected: usize,
    pub card_selected: usize,
    /// Cards per row in the last rendered grid (drives up/down movement).
    pub card_columns: usize,

    // Copy acknowledgments: card index -> token of the copy that set it
    copied: HashMap<usize, u64>,
    next_copy_token: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            tick: 0,
            focus: Focus::Input,
            show_help: false,
            theme: String::new(),
            loading: false,
            error: None,
            palette: None,
            latest_request: 0,
            example_selected: 0,
            card_selected: 0,
            card_columns: 1,
            copied: HashMap::new(),
            next_copy_token: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failure
        } else if self.palette.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// Start a request for `theme`.
    ///
    /// A blank theme leaves everything as it was apart from the error
    /// message, and no request is issued.
    pub fn begin_request(&mut self, theme: &str) -> Option<Request> {
        let theme = theme.trim();
        if theme.is_empty() {
            self.error = Some(EMPTY_THEME_MESSAGE.to_string());
            return None;
        }

        self.palette = None;
        self.error = None;
        self.copied.clear();
        self.card_selected = 0;
        self.loading = true;
        self.latest_request += 1;
        self.fix_focus();

        Some(Request {
            id: self.latest_request,
            theme: theme.to_string(),
        })
    }

    /// Apply the outcome of request `id`. Returns false if a newer request
    /// has been issued since, in which case nothing changes.
    pub fn settle_request(&mut self, id: u64, outcome: Outcome) -> bool {
        if id != self.latest_request {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(palette) => {
                self.error = None;
                if !palette.is_empty() {
                    self.focus = Focus::Cards;
                }
                self.palette = Some(palette);
            }
            Err(message) => {
                self.palette = None;
                self.error = Some(if message.trim().is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_string()
                } else {
                    message
                });
            }
        }
        self.card_selected = 0;
        self.fix_focus();
        true
    }

    /// Number of the most recently issued request.
    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn selected_color(&self) -> Option<&ColorEntry> {
        self.palette.as_ref()?.get(self.card_selected)
    }

    fn card_count(&self) -> usize {
        self.palette.as_ref().map_or(0, Vec::len)
    }

    pub fn examples_visible(&self) -> bool {
        self.phase() == Phase::Idle
    }

    /// Move focus off areas that are no longer on screen.
    pub fn fix_focus(&mut self) {
        match self.focus {
            Focus::Examples if !self.examples_visible() => self.focus = Focus::Input,
            Focus::Cards if self.card_count() == 0 => self.focus = Focus::Input,
            _ => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Input if self.examples_visible() => Focus::Examples,
            Focus::Input if self.card_count() > 0 => Focus::Cards,
            Focus::Examples if self.card_count() > 0 => Focus::Cards,
            _ => Focus::Input,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Input if self.card_count() > 0 => Focus::Cards,
            Focus::Input if self.examples_visible() => Focus::Examples,
            Focus::Cards if self.examples_visible() => Focus::Examples,
            _ => Focus::Input,
        };
    }

    // Theme input editing

    pub fn input_char(&mut self, c: char) {
        self.theme.push(c);
    }

    pub fn backspace(&mut self) {
        self.theme.pop();
    }

    pub fn clear_input(&mut self) {
        self.theme.clear();
    }

    // Grid and example navigation

    pub fn select_left(&mut self) {
        match self.focus {
            Focus::Examples => self.example_selected = self.example_selected.saturating_sub(1),
            Focus::Cards => self.card_selected = self.card_selected.saturating_sub(1),
            Focus::Input => {}
        }
    }

    pub fn select_right(&mut self) {
        match self.focus {
            Focus::Examples => {
                self.example_selected = (self.example_selected + 1).min(EXAMPLE_THEMES.len() - 1);
            }
            Focus::Cards => {
                self.card_selected = (self.card_selected + 1).min(self.card_count().saturating_sub(1));
            }
            Focus::Input => {}
        }
    }

    pub fn select_up(&mut self) {
        if self.focus == Focus::Cards {
            self.card_selected = self.card_selected.saturating_sub(self.card_columns.max(1));
        }
    }

    pub fn select_down(&mut self) {
        if self.focus == Focus::Cards {
            let next = self.card_selected + self.card_columns.max(1);
            if next < self.card_count() {
                self.card_selected = next;
            }
        }
    }

    // Copy acknowledgments

    /// Flag card `index` as just copied; the returned token identifies this copy.
    pub fn mark_copied(&mut self, index: usize) -> u64 {
        self.next_copy_token += 1;
        self.copied.insert(index, self.next_copy_token);
        self.next_copy_token
    }

    /// Drop the flag on `index` unless a later copy replaced it.
    pub fn expire_copied(&mut self, index: usize, token: u64) {
        if self.copied.get(&index) == Some(&token) {
            self.copied.remove(&index);
        }
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copied.contains_key(&index)
    }
}
