//! Initial session state.

use crate::session::Session;
use crate::share::slides_param;
use crate::splitter::{split_slides, SplitOptions};
use text2slide_common::PersistedSettings;

/// Shown in the editor the first time the tool is opened.
pub const SAMPLE_TEXT: &str = "Hi, everyone! 👋

Paste your notes here

Leave an empty line
between slides

Press Ctrl+Enter to present

https://github.com";

/// Where the initial text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupSource {
    SharedLink,
    StoredText,
    Sample,
}

#[derive(Debug, Clone)]
pub struct Startup {
    pub session: Session,
    pub source: StartupSource,
}

/// Resolve the startup session.
///
/// A `slides` parameter in `location` wins and opens the deck straight in the
/// presenter. Otherwise the stored text, else [`SAMPLE_TEXT`], is loaded into
/// the editor. The theme always comes from the stored preference.
pub fn resolve_startup(
    location: &str,
    settings: &PersistedSettings,
    options: SplitOptions,
) -> Startup {
    let theme = settings.theme.unwrap_or_default();

    if let Some(shared) = slides_param(location) {
        match split_slides(&shared, options) {
            Ok(slides) => {
                tracing::info!("Loaded {} slides from shared link", slides.len());
                let mut session = Session::new(shared, theme);
                session.replace_slides(slides);
                return Startup {
                    session,
                    source: StartupSource::SharedLink,
                };
            }
            Err(e) => tracing::warn!("Ignoring shared link: {e}"),
        }
    }

    match &settings.text {
        Some(text) => Startup {
            session: Session::new(text.clone(), theme),
            source: StartupSource::StoredText,
        },
        None => Startup {
            session: Session::new(SAMPLE_TEXT, theme),
            source: StartupSource::Sample,
        },
    }
}
