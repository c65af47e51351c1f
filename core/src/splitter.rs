//! Text to slide conversion.

use crate::error::{Result, SlideError};
use crate::slide::{Slide, SlideLine};

/// Blank line between paragraphs; each paragraph becomes one slide.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Turn bare URLs into link fragments.
    pub linkify: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self { linkify: true }
    }
}

/// Split raw text into slides.
///
/// Paragraphs are separated by a blank line. Each paragraph is trimmed and its
/// single line breaks become soft breaks between [`SlideLine`]s. Paragraphs
/// that are empty after trimming are dropped. Blank input is rejected with
/// [`SlideError::EmptyInput`].
pub fn split_slides(raw: &str, options: SplitOptions) -> Result<Vec<Slide>> {
    if raw.trim().is_empty() {
        return Err(SlideError::EmptyInput);
    }

    let normalized = raw.replace("\r\n", "\n");
    let slides: Vec<Slide> = normalized
        .split(PARAGRAPH_SEPARATOR)
        .filter_map(|segment| build_slide(segment, options))
        .collect();

    tracing::debug!("Split {} bytes into {} slides", raw.len(), slides.len());
    Ok(slides)
}

fn build_slide(segment: &str, options: SplitOptions) -> Option<Slide> {
    let segment = segment.trim();
    if segment.is_empty() {
        return None;
    }

    // Whitespace-only lines are dropped so the source form never contains a
    // paragraph separator.
    let lines = segment
        .split('\n')
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if options.linkify {
                SlideLine::linkified(line)
            } else {
                SlideLine::plain(line)
            }
        })
        .collect();

    Some(Slide::new(lines))
}

/// Join slides back into editable text.
pub fn join_slides(slides: &[Slide]) -> String {
    slides
        .iter()
        .map(Slide::source)
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}
