use super::wrapped_rows;
use crate::palette::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Centered dialog. Any key closes it.
pub struct Modal<'a> {
    title: &'a str,
    body: &'a str,
    detail: Option<&'a str>,
    palette: Palette,
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str, body: &'a str, palette: Palette) -> Self {
        Self {
            title,
            body,
            detail: None,
            palette,
        }
    }

    /// Extra line rendered in the link style, e.g. a link to copy by hand.
    pub fn detail(mut self, detail: Option<&'a str>) -> Self {
        self.detail = detail;
        self
    }
}

/// Rect of `percent_x` width and `height` rows centered in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

impl<'a> Widget for Modal<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut text = Text::from(self.body.to_string());
        if let Some(detail) = self.detail {
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(detail.to_string(), self.palette.link())));
        }
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled("Press any key to close", self.palette.muted())));

        let width = area.width.saturating_mul(7) / 10;
        let height = wrapped_rows(&text, width.saturating_sub(2))
            .saturating_add(2)
            .min(area.height);

        let rect = centered_rect(70, height, area);
        Clear.render(rect, buf);
        Paragraph::new(text)
            .style(self.palette.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.palette.base().fg(self.palette.accent))
                    .title(self.title),
            )
            .wrap(Wrap { trim: false })
            .render(rect, buf);
    }
}
