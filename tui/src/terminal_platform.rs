//! [`Platform`] backed by the running terminal.

use async_trait::async_trait;
use base64::Engine as _;
use std::io::Write;
use text2slide_core::{Platform, Result, SlideError};

/// OSC 52 sequence asking the terminal to put `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x07")
}

/// Holds the current location and talks to the system clipboard.
///
/// The clipboard handle is kept alive after a write; on X11 the contents
/// vanish once the owning handle is dropped.
pub struct TerminalPlatform {
    url: String,
    clipboard: Option<arboard::Clipboard>,
}

impl TerminalPlatform {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            clipboard: None,
        }
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| SlideError::clipboard(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| SlideError::clipboard("clipboard unavailable"))
    }
}

#[async_trait(?Send)]
impl Platform for TerminalPlatform {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn replace_url(&mut self, url: String) {
        tracing::debug!("Location changed to {url}");
        self.url = url;
    }

    async fn write_clipboard(&mut self, text: &str) -> Result<()> {
        let clipboard = self.clipboard()?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| SlideError::clipboard(e.to_string()))
    }

    async fn fallback_copy(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| SlideError::clipboard(format!("terminal copy failed: {e}")))
    }
}
