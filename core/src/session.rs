//! In-memory session state and navigation.

use crate::error::Result;
use crate::slide::Slide;
use crate::splitter::{split_slides, SplitOptions};
use text2slide_common::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No slides; the text editor is shown.
    Editing,
    /// At least one slide; the presenter is shown.
    Presenting,
}

/// Raw text, the slides derived from it, the active slide and the theme.
///
/// `active_index` is always `< max(1, slides.len())`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    raw_text: String,
    slides: Vec<Slide>,
    active_index: usize,
    theme: Theme,
}

impl Session {
    pub fn new(raw_text: impl Into<String>, theme: Theme) -> Self {
        Self {
            raw_text: raw_text.into(),
            slides: Vec::new(),
            active_index: 0,
            theme,
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.get(self.active_index)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn mode(&self) -> Mode {
        if self.slides.is_empty() {
            Mode::Editing
        } else {
            Mode::Presenting
        }
    }

    pub fn is_presenting(&self) -> bool {
        self.mode() == Mode::Presenting
    }

    /// 1-based position and total, for the `n / total` counter.
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.slides.is_empty() {
            None
        } else {
            Some((self.active_index + 1, self.slides.len()))
        }
    }

    /// Split the raw text and replace the slides. On error nothing changes.
    pub fn submit(&mut self, options: SplitOptions) -> Result<usize> {
        let slides = split_slides(&self.raw_text, options)?;
        let count = slides.len();
        self.replace_slides(slides);
        Ok(count)
    }

    pub fn replace_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        self.active_index = 0;
    }

    pub fn next(&mut self) {
        if self.active_index + 1 < self.slides.len() {
            self.active_index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.active_index = self.active_index.saturating_sub(1);
    }

    pub fn first(&mut self) {
        self.active_index = 0;
    }

    pub fn last(&mut self) {
        self.active_index = self.slides.len().saturating_sub(1);
    }

    /// Drop the slides and go back to editing. The raw text is kept.
    pub fn clear_slides(&mut self) {
        self.slides.clear();
        self.active_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlideError;
    use proptest::prelude::*;

    fn presenting(raw: &str) -> Session {
        let mut session = Session::new(raw, Theme::Light);
        session.submit(SplitOptions::default()).unwrap();
        session
    }

    #[test]
    fn test_submit_hello_world() {
        let session = presenting("Hello\n\nWorld");
        assert_eq!(session.slides(), ["Hello", "World"]);
        assert_eq!(session.active_index(), 0);
        assert_eq!(session.mode(), Mode::Presenting);
        assert_eq!(session.position(), Some((1, 2)));
    }

    #[test]
    fn test_next_clamps_at_last() {
        let mut session = presenting("A\n\nB\n\nC");
        session.next();
        session.next();
        assert_eq!(session.active_index(), 2);
        session.next();
        assert_eq!(session.active_index(), 2);
        assert_eq!(session.active_slide().map(Slide::source).as_deref(), Some("C"));
    }

    #[test]
    fn test_previous_clamps_at_zero() {
        let mut session = presenting("A\n\nB");
        session.previous();
        assert_eq!(session.active_index(), 0);
    }

    #[test]
    fn test_first_and_last() {
        let mut session = presenting("A\n\nB\n\nC\n\nD");
        session.last();
        assert_eq!(session.active_index(), 3);
        session.first();
        assert_eq!(session.active_index(), 0);
    }

    #[test]
    fn test_navigation_without_slides_is_noop() {
        let mut session = Session::new("", Theme::Light);
        session.next();
        session.last();
        session.previous();
        assert_eq!(session.active_index(), 0);
        assert_eq!(session.position(), None);
    }

    #[test]
    fn test_blank_submit_keeps_state() {
        let mut session = presenting("A\n\nB");
        session.next();
        session.set_raw_text("   \n\n ");
        let before = session.slides().to_vec();

        let err = session.submit(SplitOptions::default()).unwrap_err();
        assert!(matches!(err, SlideError::EmptyInput));
        assert_eq!(session.slides(), before.as_slice());
        assert_eq!(session.active_index(), 1);
    }

    #[test]
    fn test_resubmit_resets_index() {
        let mut session = presenting("A\n\nB");
        session.next();
        session.set_raw_text("X\n\nY\n\nZ");
        session.submit(SplitOptions::default()).unwrap();
        assert_eq!(session.active_index(), 0);
        assert_eq!(session.slides().len(), 3);
    }

    #[test]
    fn test_clear_slides_returns_to_editing() {
        let mut session = presenting("A\n\nB");
        session.next();
        session.clear_slides();
        assert_eq!(session.mode(), Mode::Editing);
        assert_eq!(session.active_index(), 0);
        assert_eq!(session.raw_text(), "A\n\nB");
    }

    proptest! {
        #[test]
        fn prop_next_then_previous_is_identity(count in 3usize..12, steps in 1usize..10) {
            let raw = (0..count).map(|i| format!("slide {i}")).collect::<Vec<_>>().join("\n\n");
            let mut session = presenting(&raw);
            for _ in 0..steps.min(count - 2) {
                session.next();
            }
            let index = session.active_index();
            prop_assume!(index > 0 && index < count - 1);

            session.next();
            session.previous();
            prop_assert_eq!(session.active_index(), index);
        }

        #[test]
        fn prop_index_stays_in_bounds(moves in proptest::collection::vec(0u8..4, 0..40)) {
            let mut session = presenting("a\n\nb\n\nc\n\nd");
            for m in moves {
                match m {
                    0 => session.next(),
                    1 => session.previous(),
                    2 => session.first(),
                    _ => session.last(),
                }
                prop_assert!(session.active_index() < session.slides().len());
            }
        }

        #[test]
        fn prop_blank_submit_never_mutates(
            count in 1usize..8,
            steps in 0usize..8,
            blank in proptest::collection::vec(
                prop::sample::select(vec![' ', '\n', '\r', '\t', '\u{a0}', '\u{2028}', '\u{3000}']),
                0..24,
            ),
        ) {
            let raw = (0..count).map(|i| format!("slide {i}")).collect::<Vec<_>>().join("\n\n");
            let mut session = presenting(&raw);
            for _ in 0..steps {
                session.next();
            }
            let slides = session.slides().to_vec();
            let index = session.active_index();

            session.set_raw_text(blank.into_iter().collect::<String>());
            prop_assert!(matches!(
                session.submit(SplitOptions::default()),
                Err(SlideError::EmptyInput)
            ));
            prop_assert_eq!(session.slides(), slides.as_slice());
            prop_assert_eq!(session.active_index(), index);
        }
    }
}
