//! Test doubles for [`Platform`](crate::platform::Platform).

use crate::error::{Result, SlideError};
use crate::platform::Platform;
use async_trait::async_trait;

/// In-memory platform that records clipboard writes.
#[derive(Debug, Clone, Default)]
pub struct MockPlatform {
    pub url: String,
    /// Every URL passed to `replace_url`, oldest first.
    pub url_history: Vec<String>,
    pub clipboard: Option<String>,
    pub fallback_clipboard: Option<String>,
    pub fail_clipboard: bool,
    pub fail_fallback: bool,
}

impl MockPlatform {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn failing_clipboard(mut self) -> Self {
        self.fail_clipboard = true;
        self
    }

    pub fn failing_fallback(mut self) -> Self {
        self.fail_fallback = true;
        self
    }
}

#[async_trait(?Send)]
impl Platform for MockPlatform {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn replace_url(&mut self, url: String) {
        self.url_history.push(url.clone());
        self.url = url;
    }

    async fn write_clipboard(&mut self, text: &str) -> Result<()> {
        if self.fail_clipboard {
            return Err(SlideError::clipboard("clipboard unavailable"));
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    async fn fallback_copy(&mut self, text: &str) -> Result<()> {
        if self.fail_fallback {
            return Err(SlideError::clipboard("fallback copy rejected"));
        }
        self.fallback_clipboard = Some(text.to_string());
        Ok(())
    }
}
