//! Key bindings for the editor and the presenter.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use text2slide_core::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Next,
    Previous,
    First,
    Last,
    Reset,
    Share,
    ToggleTheme,
    ToggleHelp,
    Dismiss,
    Quit,
    /// Forward the key to the text editor.
    Edit(KeyEvent),
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

/// Map a key press to an action. While an overlay is open every other key
/// only dismisses it.
pub fn map_key(mode: Mode, overlay_open: bool, key: KeyEvent) -> Option<Action> {
    if is_quit(&key) {
        return Some(Action::Quit);
    }
    if overlay_open {
        return Some(Action::Dismiss);
    }
    match mode {
        Mode::Editing => map_editing(key),
        Mode::Presenting => map_presenting(key),
    }
}

fn map_editing(key: KeyEvent) -> Option<Action> {
    let submit_modifiers = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER;
    match key.code {
        KeyCode::Enter if key.modifiers.intersects(submit_modifiers) => Some(Action::Submit),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Submit)
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ToggleTheme)
        }
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Reset),
        _ => Some(Action::Edit(key)),
    }
}

fn map_presenting(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Left | KeyCode::PageUp | KeyCode::Backspace | KeyCode::Char('h') => {
            Some(Action::Previous)
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char(' ') | KeyCode::Char('l') => {
            Some(Action::Next)
        }
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Last),
        KeyCode::Esc => Some(Action::Reset),
        KeyCode::Char('s') => Some(Action::Share),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

pub const EDITING_HINTS: &str = "Ctrl+Enter/Ctrl+S present | Ctrl+T theme | F1 help | Ctrl+Q quit";
pub const PRESENTING_HINTS: &str = "← → navigate | s share | t theme | ? help | Esc edit";

pub const HELP_TEXT: &str = "Use the left (←) and right (→) arrow keys to navigate through the slides.
Home and End jump to the first and last slide.
Press s to copy a share link, t to switch between light and dark.
Press the escape (Esc) key to exit the presentation.

While editing, separate slides with an empty line and press Ctrl+Enter (or Ctrl+S) to present.";

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_presenting_arrows() {
        let map = |code| map_key(Mode::Presenting, false, key(code, KeyModifiers::NONE));
        assert_eq!(map(KeyCode::Left), Some(Action::Previous));
        assert_eq!(map(KeyCode::Right), Some(Action::Next));
        assert_eq!(map(KeyCode::Esc), Some(Action::Reset));
        assert_eq!(map(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_editing_submit_needs_modifier() {
        assert_eq!(
            map_key(Mode::Editing, false, key(KeyCode::Enter, KeyModifiers::CONTROL)),
            Some(Action::Submit)
        );
        assert_eq!(
            map_key(Mode::Editing, false, key(KeyCode::Enter, KeyModifiers::SUPER)),
            Some(Action::Submit)
        );
        let plain = key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(Mode::Editing, false, plain), Some(Action::Edit(plain)));
    }

    #[test]
    fn test_editing_letters_are_text() {
        let s = key(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(map_key(Mode::Editing, false, s), Some(Action::Edit(s)));
    }

    #[test]
    fn test_editing_escape_resets() {
        assert_eq!(
            map_key(Mode::Editing, false, key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Reset)
        );
        assert_eq!(
            map_key(Mode::Editing, true, key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Dismiss)
        );
    }

    #[test]
    fn test_overlay_swallows_keys_but_not_quit() {
        assert_eq!(
            map_key(Mode::Presenting, true, key(KeyCode::Right, KeyModifiers::NONE)),
            Some(Action::Dismiss)
        );
        assert_eq!(
            map_key(Mode::Editing, true, key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }
}
