//! The slide session controller: the one stateful object behind the UI.

use crate::error::{Result, SlideError};
use crate::notification::UserNotification;
use crate::platform::Platform;
use crate::session::Session;
use crate::share::{build_share_link, strip_slides_param};
use crate::splitter::SplitOptions;
use crate::startup::{resolve_startup, StartupSource};
use text2slide_common::{SettingsStore, Theme};

/// Result of a share action. The link is always available for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied { link: String },
    CopiedWithFallback { link: String },
    /// Neither copy path worked; the user has to copy the link by hand.
    ManualCopy { link: String, reason: String },
}

impl ShareOutcome {
    pub fn link(&self) -> &str {
        match self {
            ShareOutcome::Copied { link }
            | ShareOutcome::CopiedWithFallback { link }
            | ShareOutcome::ManualCopy { link, .. } => link,
        }
    }

    pub fn notification(&self) -> UserNotification {
        match self {
            ShareOutcome::Copied { .. } => {
                UserNotification::info("Copied the link to your clipboard!")
            }
            // Fallback delivery is unconfirmed.
            ShareOutcome::CopiedWithFallback { link } => {
                UserNotification::info("Copied the link to your clipboard!")
                    .with_detail(link.clone())
            }
            ShareOutcome::ManualCopy { link, reason } => UserNotification::warning(format!(
                "Could not copy the link ({reason}). Copy it manually:"
            ))
            .with_detail(link.clone()),
        }
    }
}

pub struct SlideSessionController<S, P> {
    session: Session,
    store: S,
    platform: P,
    options: SplitOptions,
    source: StartupSource,
}

impl<S, P> SlideSessionController<S, P>
where
    S: SettingsStore,
    P: Platform,
{
    /// Build the controller from the platform location and stored settings.
    pub fn start(store: S, platform: P, options: SplitOptions) -> Self {
        let startup = resolve_startup(&platform.current_url(), &store.load(), options);
        tracing::info!(
            "Session started from {:?} ({} slides, {} theme)",
            startup.source,
            startup.session.slides().len(),
            startup.session.theme()
        );
        Self {
            session: startup.session,
            store,
            platform,
            options,
            source: startup.source,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn startup_source(&self) -> StartupSource {
        self.source
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn current_url(&self) -> String {
        self.platform.current_url()
    }

    /// Replace the raw text and persist it.
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.session.set_raw_text(text);
        if let Err(e) = self.store.save_text(self.session.raw_text()) {
            tracing::warn!("Failed to persist text: {e}");
        }
    }

    /// Flip the theme and persist the new preference.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.session.theme().toggled();
        self.session.set_theme(theme);
        if let Err(e) = self.store.save_theme(theme) {
            tracing::warn!("Failed to persist theme: {e}");
        }
        theme
    }

    /// Split the current text into slides and start presenting.
    pub fn submit(&mut self) -> Result<usize> {
        let count = self.session.submit(self.options)?;
        tracing::debug!("Submitted {count} slides");
        Ok(count)
    }

    pub fn next(&mut self) {
        self.session.next();
    }

    pub fn previous(&mut self) {
        self.session.previous();
    }

    pub fn first(&mut self) {
        self.session.first();
    }

    pub fn last(&mut self) {
        self.session.last();
    }

    /// Leave the presenter and drop the `slides` parameter from the location.
    pub fn reset(&mut self) {
        self.session.clear_slides();
        let current = self.platform.current_url();
        let stripped = strip_slides_param(&current);
        if stripped != current {
            self.platform.replace_url(stripped);
        }
    }

    /// Build a share link for the current deck and copy it.
    pub async fn share(&mut self) -> Result<ShareOutcome> {
        if self.session.slides().is_empty() {
            return Err(SlideError::EmptyInput);
        }
        let link = build_share_link(&self.platform.current_url(), self.session.slides());

        let primary = match self.platform.write_clipboard(&link).await {
            Ok(()) => return Ok(ShareOutcome::Copied { link }),
            Err(e) => e,
        };
        tracing::warn!("Clipboard write failed, trying fallback: {primary}");

        match self.platform.fallback_copy(&link).await {
            Ok(()) => Ok(ShareOutcome::CopiedWithFallback { link }),
            Err(fallback) => {
                tracing::warn!("Fallback copy failed: {fallback}");
                let reason = match primary {
                    SlideError::ClipboardWrite { reason } => reason,
                    other => other.to_string(),
                };
                Ok(ShareOutcome::ManualCopy { link, reason })
            }
        }
    }
}
