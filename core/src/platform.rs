//! Capabilities the session controller needs from its host.

use crate::error::Result;
use async_trait::async_trait;

/// Location and clipboard access.
///
/// The location plays the role of the page URL: it is read at startup for a
/// shared deck, rewritten without reloading when the presentation is reset,
/// and used as the base of share links.
#[async_trait(?Send)]
pub trait Platform {
    fn current_url(&self) -> String;

    /// Replace the current location without reloading anything.
    fn replace_url(&mut self, url: String);

    /// Primary clipboard write.
    async fn write_clipboard(&mut self, text: &str) -> Result<()>;

    /// Secondary copy path, tried when [`Platform::write_clipboard`] fails.
    async fn fallback_copy(&mut self, text: &str) -> Result<()>;
}
