//! System clipboard access for the "Copy Hex" action.

use std::time::Duration;

/// How long a card shows "Copied!" after a successful copy.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

pub const COPY_LABEL: &str = "Copy Hex";
pub const COPIED_LABEL: &str = "Copied!";

pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> anyhow::Result<()>;
}

/// Clipboard backed by the OS (X11/Wayland, macOS, Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> anyhow::Result<()> {
        cli_clipboard::set_contents(text.to_owned())
            .map_err(|e| anyhow::anyhow!("write clipboard: {e}"))
    }
}
