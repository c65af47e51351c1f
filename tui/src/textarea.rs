use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::StatefulWidgetRef,
};
use std::{cell::RefCell, ops::Range};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TextAreaState {
    pub scroll: u16,
}

/// Multi-line text editor. `cursor` is a byte offset on a char boundary.
#[derive(Debug)]
pub(crate) struct TextArea {
    text: String,
    cursor: usize,
    style: Style,
    wrap_cache: RefCell<Option<(u16, Vec<Range<usize>>)>>,
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            style: Style::default(),
            wrap_cache: RefCell::new(None),
        }
    }

    /// Replace the text and put the cursor at the end.
    pub fn set_text(&mut self, s: &str) {
        self.text = s.to_string();
        self.cursor = self.text.len();
        self.wrap_cache.replace(None);
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert at the cursor. Carriage returns from pasted text become `\n`.
    pub fn insert_str(&mut self, s: &str) {
        let s = s.replace("\r\n", "\n").replace('\r', "\n");
        self.text.insert_str(self.cursor, &s);
        self.cursor += s.len();
        self.wrap_cache.replace(None);
    }

    fn remove_range(&mut self, r: Range<usize>) {
        self.text.replace_range(r.clone(), "");
        self.cursor = r.start;
        self.wrap_cache.replace(None);
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.text.len())
    }

    fn line_start(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.text[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.text.len())
    }

    /// Byte offset of the `col`-th char of the line starting at `start`,
    /// clamped to the end of that line.
    fn offset_in_line(&self, start: usize, col: usize) -> usize {
        let end = self.line_end(start);
        self.text[start..end]
            .char_indices()
            .nth(col)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }

    fn move_vertical(&mut self, down: bool) {
        let start = self.line_start(self.cursor);
        let col = self.text[start..self.cursor].chars().count();
        if down {
            let end = self.line_end(self.cursor);
            if end < self.text.len() {
                self.cursor = self.offset_in_line(end + 1, col);
            }
        } else if start > 0 {
            let prev_start = self.line_start(start - 1);
            self.cursor = self.offset_in_line(prev_start, col);
        }
    }

    /// Apply an editing key. Returns true when the text changed.
    pub fn input(&mut self, ev: KeyEvent) -> bool {
        let ctrl = ev.modifiers.contains(KeyModifiers::CONTROL);
        match ev.code {
            KeyCode::Char(c)
                if !ev
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                true
            }
            KeyCode::Enter
                if !ev.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                self.insert_str("\n");
                true
            }
            KeyCode::Backspace if self.cursor > 0 => {
                let prev = self.prev_boundary();
                self.remove_range(prev..self.cursor);
                true
            }
            KeyCode::Delete if self.cursor < self.text.len() => {
                let next = self.next_boundary();
                self.remove_range(self.cursor..next);
                true
            }
            KeyCode::Left => {
                self.cursor = self.prev_boundary();
                false
            }
            KeyCode::Right => {
                self.cursor = self.next_boundary();
                false
            }
            KeyCode::Up => {
                self.move_vertical(false);
                false
            }
            KeyCode::Down => {
                self.move_vertical(true);
                false
            }
            KeyCode::Home if ctrl => {
                self.cursor = 0;
                false
            }
            KeyCode::End if ctrl => {
                self.cursor = self.text.len();
                false
            }
            KeyCode::Home => {
                self.cursor = self.line_start(self.cursor);
                false
            }
            KeyCode::End => {
                self.cursor = self.line_end(self.cursor);
                false
            }
            _ => false,
        }
    }

    /// Visual rows for `width`, as byte ranges without the trailing `\n`.
    fn wrapped_lines(&self, width: u16) -> Vec<Range<usize>> {
        if width == 0 {
            return vec![0..self.text.len()];
        }
        if let Some((w, lines)) = self.wrap_cache.borrow().as_ref() {
            if *w == width {
                return lines.clone();
            }
        }
        let mut lines = Vec::new();
        let mut start = 0usize;
        let mut row_width = 0usize;
        for (i, ch) in self.text.char_indices() {
            if ch == '\n' {
                lines.push(start..i);
                start = i + 1;
                row_width = 0;
                continue;
            }
            let w = ch.width().unwrap_or(0);
            if row_width + w > width as usize && i > start {
                lines.push(start..i);
                start = i;
                row_width = 0;
            }
            row_width += w;
        }
        lines.push(start..self.text.len());
        self.wrap_cache.replace(Some((width, lines.clone())));
        lines
    }

    fn cursor_row(&self, lines: &[Range<usize>]) -> usize {
        lines
            .iter()
            .rposition(|r| r.start <= self.cursor)
            .unwrap_or(0)
    }

    /// Keep the cursor row inside a viewport of `height` rows.
    pub fn scroll_to_cursor(&self, width: u16, height: u16, state: &mut TextAreaState) {
        let lines = self.wrapped_lines(width);
        let row = self.cursor_row(&lines) as u16;
        if row < state.scroll {
            state.scroll = row;
        } else if height > 0 && row >= state.scroll + height {
            state.scroll = row + 1 - height;
        }
    }

    pub fn cursor_pos_with_state(&self, area: Rect, state: &TextAreaState) -> Option<(u16, u16)> {
        let lines = self.wrapped_lines(area.width);
        let row = self.cursor_row(&lines);
        let start = lines.get(row).map(|r| r.start).unwrap_or(0);
        let col = self.text[start..self.cursor].width() as u16;
        let visible_row = (row as u16).checked_sub(state.scroll)?;
        if visible_row >= area.height {
            return None;
        }
        Some((area.x + col.min(area.width.saturating_sub(1)), area.y + visible_row))
    }
}

impl StatefulWidgetRef for &TextArea {
    type State = TextAreaState;

    fn render_ref(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let lines = self.wrapped_lines(area.width);
        let start = state.scroll as usize;
        let end = (start + area.height as usize).min(lines.len());
        for (row, r) in lines[start.min(end)..end].iter().enumerate() {
            buf.set_string(area.x, area.y + row as u16, &self.text[r.clone()], self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(s: &str) -> TextArea {
        let mut t = TextArea::new();
        for c in s.chars() {
            if c == '\n' {
                t.input(key(KeyCode::Enter));
            } else {
                t.input(key(KeyCode::Char(c)));
            }
        }
        t
    }

    #[test]
    fn test_typing_and_backspace_multibyte() {
        let mut t = typed("héllo 👋");
        assert_eq!(t.text(), "héllo 👋");
        assert!(t.input(key(KeyCode::Backspace)));
        assert_eq!(t.text(), "héllo ");
        t.input(key(KeyCode::Home));
        t.input(key(KeyCode::Right));
        t.input(key(KeyCode::Delete));
        assert_eq!(t.text(), "hllo ");
    }

    #[test]
    fn test_ctrl_chars_are_not_inserted() {
        let mut t = TextArea::new();
        assert!(!t.input(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(t.is_empty());
    }

    #[test]
    fn test_paste_normalizes_crlf() {
        let mut t = TextArea::new();
        t.insert_str("a\r\n\r\nb");
        assert_eq!(t.text(), "a\n\nb");
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut t = typed("abcd\nxy\nlong line");
        t.input(key(KeyCode::Up));
        assert_eq!(t.cursor(), 7);
        t.input(key(KeyCode::Up));
        assert_eq!(t.cursor(), 2);
        t.input(key(KeyCode::Down));
        assert_eq!(t.cursor(), 7);
    }

    #[test]
    fn test_wrap_and_cursor_position() {
        let t = typed("abcdef\ngh");
        let lines = t.wrapped_lines(4);
        assert_eq!(lines, vec![0..4, 4..6, 7..9]);
        let area = Rect::new(0, 0, 4, 10);
        assert_eq!(t.cursor_pos_with_state(area, &TextAreaState::default()), Some((2, 2)));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let t = typed("1\n2\n3\n4\n5");
        let mut state = TextAreaState::default();
        t.scroll_to_cursor(10, 2, &mut state);
        assert_eq!(state.scroll, 3);
    }
}
