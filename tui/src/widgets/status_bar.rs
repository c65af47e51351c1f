use crate::palette::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bottom bar: mode badge, current location and key hints.
pub struct StatusBar<'a> {
    mode: &'a str,
    location: &'a str,
    hints: &'a str,
    palette: Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: &'a str, location: &'a str, hints: &'a str, palette: Palette) -> Self {
        Self {
            mode,
            location,
            hints,
            palette,
        }
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.mode), self.palette.badge()),
            Span::styled("  ", self.palette.base()),
            Span::styled(self.location.to_string(), self.palette.base()),
            Span::styled("  |  ", self.palette.muted()),
            Span::styled(self.hints, self.palette.muted()),
        ]);
        Paragraph::new(line)
            .style(self.palette.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.palette.muted()),
            )
            .alignment(Alignment::Left)
            .render(area, buf);
    }
}
