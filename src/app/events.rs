use super::state::Outcome;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Tick,
    Network(NetworkEvent),
    Timer(TimerEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum NetworkEvent {
    PaletteGenerated { request: u64, outcome: Outcome },
}

#[derive(Debug, Clone)]
pub enum TimerEvent {
    CopyExpired { card: usize, token: u64 },
}
