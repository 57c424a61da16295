pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard::{COPY_FEEDBACK, Clipboard};
use crate::config::Config;
use crate::input;
use crate::palette::PaletteGenerator;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetworkEvent, TimerEvent};
use state::{AppState, EXAMPLE_THEMES, Focus, Request};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner frame rate; only redraws while a request is in flight.
const TICK_RATE: Duration = Duration::from_millis(80);

pub struct App {
    cfg: Config,
    state: AppState,
    generator: Arc<dyn PaletteGenerator>,
    clipboard: Arc<dyn Clipboard>,
}

impl App {
    pub fn new(cfg: Config, generator: Arc<dyn PaletteGenerator>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            cfg,
            state: AppState::new(),
            generator,
            clipboard,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        spawn_tick_task(tx.clone());

        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            let redraw = self.handle_event(ev, &tx);

            if self.state.should_quit {
                break;
            }

            if redraw {
                tui::draw(terminal, &mut self.state)?;
            }
        }

        Ok(())
    }

    /// Apply one event; returns whether the screen needs redrawing.
    fn handle_event(&mut self, ev: Event, tx: &mpsc::Sender<Event>) -> bool {
        match ev {
            Event::Input(input_ev) => {
                if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                    self.handle_action(action, tx);
                }
                true
            }
            Event::Tick => {
                if !self.state.loading {
                    return false;
                }
                self.state.tick = self.state.tick.wrapping_add(1);
                true
            }
            Event::Network(ne) => {
                self.handle_network(ne);
                true
            }
            Event::Timer(te) => {
                self.handle_timer(te);
                true
            }
        }
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Resize => {}
            Action::FocusNext => self.state.focus_next(),
            Action::FocusPrev => self.state.focus_prev(),
            Action::SetFocus(focus) => {
                self.state.focus = focus;
                self.state.fix_focus();
            }
            // The input box is read-only while a palette is generating.
            Action::InputChar(_) | Action::Backspace | Action::ClearInput | Action::Submit
                if self.state.loading => {}
            Action::InputChar(c) => self.state.input_char(c),
            Action::Backspace => self.state.backspace(),
            Action::ClearInput => self.state.clear_input(),
            Action::Submit => {
                let theme = self.state.theme.clone();
                self.submit_theme(&theme, tx);
            }
            Action::SelectLeft => self.state.select_left(),
            Action::SelectRight => self.state.select_right(),
            Action::SelectUp => self.state.select_up(),
            Action::SelectDown => self.state.select_down(),
            Action::Activate => match self.state.focus {
                Focus::Input => self.handle_action(Action::Submit, tx),
                Focus::Examples => self.handle_action(Action::SelectExample(self.state.example_selected), tx),
                Focus::Cards => self.copy_selected(tx),
            },
            Action::SelectExample(idx) => {
                if !self.state.examples_visible() {
                    return;
                }
                if let Some(example) = EXAMPLE_THEMES.get(idx) {
                    self.state.example_selected = idx;
                    self.select_example(example, tx);
                }
            }
            Action::CopySelected => self.copy_selected(tx),
        }
    }

    /// Validate `text` and, if it isn't blank, start generating a palette for it.
    fn submit_theme(&mut self, text: &str, tx: &mpsc::Sender<Event>) {
        match self.state.begin_request(text) {
            Some(request) => self.spawn_generate(request, tx),
            None => tracing::debug!("empty theme rejected"),
        }
    }

    /// Fill the input with a preset theme and submit it.
    fn select_example(&mut self, name: &str, tx: &mpsc::Sender<Event>) {
        self.state.theme = name.to_string();
        self.submit_theme(name, tx);
    }

    fn spawn_generate(&self, request: Request, tx: &mpsc::Sender<Event>) {
        tracing::info!(request = request.id, theme = %request.theme, "generating palette");

        let generator = Arc::clone(&self.generator);
        let tx = tx.clone();
        tokio::spawn(async move {
            let Request { id, theme } = request;
            let task = tokio::spawn(async move { generator.generate(&theme).await });

            let outcome = match task.await {
                Ok(Ok(palette)) => Ok(palette),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => {
                    tracing::error!(error = %e, "palette task failed");
                    Err(String::new())
                }
            };

            let _ = tx
                .send(Event::Network(NetworkEvent::PaletteGenerated { request: id, outcome }))
                .await;
        });
    }

    fn handle_network(&mut self, ne: NetworkEvent) {
        match ne {
            NetworkEvent::PaletteGenerated { request, outcome } => {
                if !self.state.settle_request(request, outcome) {
                    tracing::debug!(
                        request,
                        latest = self.state.latest_request(),
                        "discarding stale palette result"
                    );
                }
            }
        }
    }

    fn copy_selected(&mut self, tx: &mpsc::Sender<Event>) {
        let card = self.state.card_selected;
        let Some(hex) = self.state.selected_color().map(|c| c.hex.clone()) else {
            return;
        };

        if let Err(e) = self.clipboard.set_text(&hex) {
            tracing::debug!(error = %e, %hex, "clipboard write failed");
            return;
        }

        let token = self.state.mark_copied(card);
        let deadline = tokio::time::Instant::now() + COPY_FEEDBACK;
        let tx = tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(Event::Timer(TimerEvent::CopyExpired { card, token })).await;
        });
    }

    fn handle_timer(&mut self, te: TimerEvent) {
        match te {
            TimerEvent::CopyExpired { card, token } => self.state.expire_copied(card, token),
        }
    }
}

fn spawn_tick_task(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_RATE);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{COPIED_LABEL, COPY_LABEL};
    use crate::palette::{ColorEntry, GENERATION_FAILED_MESSAGE, GenerationError, ResponseError};
    use crate::tui::widgets::cards::copy_label;
    use ratatui::{Terminal, backend::TestBackend};
    use state::{EMPTY_THEME_MESSAGE, Phase};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeGenerator {
        replies: Mutex<VecDeque<Result<Vec<ColorEntry>, GenerationError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        fn replying(replies: Vec<Result<Vec<ColorEntry>, GenerationError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl PaletteGenerator for FakeGenerator {
        async fn generate(&self, theme: &str) -> Result<Vec<ColorEntry>, GenerationError> {
            self.calls.lock().unwrap().push(theme.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GenerationError::Failed(ResponseError::EmptyResponse)))
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        writes: Mutex<Vec<String>>,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("no clipboard");
            }
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn color(hex: &str, name: &str) -> ColorEntry {
        ColorEntry {
            hex: hex.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
        }
    }

    fn sample_palette() -> Vec<ColorEntry> {
        vec![
            color("#1A2B3C", "Ink"),
            color("#F4E1C1", "Sand"),
            color("#FF6F61", "Coral"),
            color("#2E8B57", "Sea Green"),
            color("#FFD166", "Sun"),
        ]
    }

    fn app_with(generator: Arc<FakeGenerator>, clipboard: Arc<FakeClipboard>) -> App {
        App::new(Config::default(), generator, clipboard)
    }

    fn type_theme(app: &mut App, tx: &mpsc::Sender<Event>, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::InputChar(c), tx);
        }
    }

    #[tokio::test]
    async fn test_blank_submit_issues_no_request() {
        let generator = FakeGenerator::replying(vec![]);
        let mut app = app_with(generator.clone(), Arc::default());
        let (tx, mut rx) = mpsc::channel(8);

        type_theme(&mut app, &tx, "   ");
        app.handle_action(Action::Submit, &tx);

        assert_eq!(app.state.error.as_deref(), Some(EMPTY_THEME_MESSAGE));
        assert!(app.state.palette.is_none());
        assert!(!app.state.loading);
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_submit_success() {
        let generator = FakeGenerator::replying(vec![Ok(sample_palette())]);
        let mut app = app_with(generator.clone(), Arc::default());
        let (tx, mut rx) = mpsc::channel(8);

        type_theme(&mut app, &tx, "Calm Beach Sunset");
        app.handle_action(Action::Submit, &tx);
        assert_eq!(app.state.phase(), Phase::Loading);

        let ev = rx.recv().await.unwrap();
        app.handle_event(ev, &tx);

        assert_eq!(app.state.phase(), Phase::Success);
        assert_eq!(app.state.palette.as_deref(), Some(sample_palette().as_slice()));
        assert!(app.state.error.is_none());
        assert_eq!(generator.calls(), ["Calm Beach Sunset"]);
    }

    #[tokio::test]
    async fn test_failure_shows_normalized_message() {
        let generator =
            FakeGenerator::replying(vec![Err(GenerationError::Failed(ResponseError::MalformedResponse))]);
        let mut app = app_with(generator, Arc::default());
        let (tx, mut rx) = mpsc::channel(8);

        type_theme(&mut app, &tx, "Cyberpunk City");
        app.handle_action(Action::Activate, &tx);
        let ev = rx.recv().await.unwrap();
        app.handle_event(ev, &tx);

        assert_eq!(app.state.phase(), Phase::Failure);
        assert_eq!(app.state.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert!(app.state.palette.is_none());
    }

    #[tokio::test]
    async fn test_select_example_fills_input_and_submits() {
        let generator = FakeGenerator::replying(vec![Ok(sample_palette())]);
        let mut app = app_with(generator.clone(), Arc::default());
        let (tx, mut rx) = mpsc::channel(8);

        app.handle_action(Action::SelectExample(2), &tx);
        assert_eq!(app.state.theme, "Retro Arcade");
        assert!(app.state.loading);

        let ev = rx.recv().await.unwrap();
        app.handle_event(ev, &tx);
        assert_eq!(generator.calls(), ["Retro Arcade"]);
        assert_eq!(app.state.phase(), Phase::Success);
    }

    #[tokio::test]
    async fn test_examples_ignored_once_not_idle() {
        let generator = FakeGenerator::replying(vec![Ok(sample_palette())]);
        let mut app = app_with(generator.clone(), Arc::default());
        let (tx, mut rx) = mpsc::channel(8);

        app.handle_action(Action::SelectExample(0), &tx);
        let ev = rx.recv().await.unwrap();
        app.handle_event(ev, &tx);

        app.handle_action(Action::SelectExample(1), &tx);
        assert_eq!(app.state.theme, "Modern Office");
        assert_eq!(generator.calls(), ["Modern Office"]);
    }

    #[tokio::test]
    async fn test_input_locked_while_loading() {
        let generator = FakeGenerator::replying(vec![Ok(sample_palette())]);
        let mut app = app_with(generator.clone(), Arc::default());
        let (tx, mut rx) = mpsc::channel(8);

        type_theme(&mut app, &tx, "Zen");
        app.handle_action(Action::Submit, &tx);
        type_theme(&mut app, &tx, "!!");
        app.handle_action(Action::Submit, &tx);
        assert_eq!(app.state.theme, "Zen");

        let ev = rx.recv().await.unwrap();
        app.handle_event(ev, &tx);
        assert_eq!(generator.calls(), ["Zen"]);
    }

    #[tokio::test]
    async fn test_latest_request_wins() {
        let generator = FakeGenerator::replying(vec![]);
        let mut app = app_with(generator, Arc::default());
        let (tx, _rx) = mpsc::channel(8);

        let first = app.state.begin_request("first").unwrap();
        let second = app.state.begin_request("second").unwrap();

        app.handle_event(
            Event::Network(NetworkEvent::PaletteGenerated {
                request: second.id,
                outcome: Ok(sample_palette()),
            }),
            &tx,
        );
        app.handle_event(
            Event::Network(NetworkEvent::PaletteGenerated {
                request: first.id,
                outcome: Err("late failure".into()),
            }),
            &tx,
        );

        assert_eq!(app.state.phase(), Phase::Success);
        assert!(app.state.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_label_lasts_two_seconds() {
        let generator = FakeGenerator::replying(vec![]);
        let clipboard = Arc::new(FakeClipboard::default());
        let mut app = app_with(generator, clipboard.clone());
        let (tx, mut rx) = mpsc::channel(8);

        let req = app.state.begin_request("x").unwrap();
        app.state.settle_request(req.id, Ok(sample_palette()));

        app.handle_action(Action::CopySelected, &tx);
        assert_eq!(*clipboard.writes.lock().unwrap(), ["#1A2B3C"]);
        assert_eq!(copy_label(&app.state, 0), COPIED_LABEL);
        assert_eq!(copy_label(&app.state, 1), COPY_LABEL);

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(copy_label(&app.state, 0), COPIED_LABEL);

        tokio::time::advance(Duration::from_millis(1)).await;
        let ev = rx.recv().await.unwrap();
        app.handle_event(ev, &tx);
        assert_eq!(copy_label(&app.state, 0), COPY_LABEL);
    }

    #[tokio::test]
    async fn test_blank_submit_after_success_keeps_cards_usable() {
        let generator = FakeGenerator::replying(vec![Ok(sample_palette())]);
        let clipboard = Arc::new(FakeClipboard::default());
        let mut app = app_with(generator.clone(), clipboard.clone());
        let (tx, mut rx) = mpsc::channel(8);

        type_theme(&mut app, &tx, "Calm Beach Sunset");
        app.handle_action(Action::Submit, &tx);
        let ev = rx.recv().await.unwrap();
        app.handle_event(ev, &tx);

        app.handle_action(Action::SetFocus(Focus::Input), &tx);
        app.handle_action(Action::ClearInput, &tx);
        app.handle_action(Action::Submit, &tx);
        assert_eq!(app.state.error.as_deref(), Some(EMPTY_THEME_MESSAGE));
        assert_eq!(generator.calls().len(), 1);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| crate::tui::widgets::root::render(f, &mut app.state)).unwrap();
        let screen: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("#1A2B3C"));

        app.handle_action(Action::FocusNext, &tx);
        assert_eq!(app.state.focus, Focus::Cards);
        app.handle_action(Action::CopySelected, &tx);
        assert_eq!(*clipboard.writes.lock().unwrap(), ["#1A2B3C"]);
    }

    #[tokio::test]
    async fn test_copy_failure_is_silent() {
        let generator = FakeGenerator::replying(vec![]);
        let clipboard = Arc::new(FakeClipboard {
            fail: true,
            ..FakeClipboard::default()
        });
        let mut app = app_with(generator, clipboard);
        let (tx, _rx) = mpsc::channel(8);

        let req = app.state.begin_request("x").unwrap();
        app.state.settle_request(req.id, Ok(sample_palette()));
        app.handle_action(Action::Activate, &tx);

        assert!(!app.state.is_copied(0));
        assert!(app.state.error.is_none());
    }

    #[tokio::test]
    async fn test_tick_only_redraws_while_loading() {
        let generator = FakeGenerator::replying(vec![]);
        let mut app = app_with(generator, Arc::default());
        let (tx, _rx) = mpsc::channel(8);

        assert!(!app.handle_event(Event::Tick, &tx));
        app.state.begin_request("x").unwrap();
        assert!(app.handle_event(Event::Tick, &tx));
        assert_eq!(app.state.tick, 1);
    }
}
