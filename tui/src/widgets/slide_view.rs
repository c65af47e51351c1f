use super::wrapped_rows;
use crate::palette::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};
use text2slide_core::{Fragment, Slide};

/// The active slide, centered, with a `n / total` counter in the top right.
pub struct SlideView<'a> {
    slide: &'a Slide,
    position: (usize, usize),
    palette: Palette,
}

impl<'a> SlideView<'a> {
    pub fn new(slide: &'a Slide, position: (usize, usize), palette: Palette) -> Self {
        Self {
            slide,
            position,
            palette,
        }
    }

    fn text(&self) -> Text<'a> {
        let slide: &'a Slide = self.slide;
        let palette = self.palette;
        let lines: Vec<Line<'a>> = slide
            .lines()
            .iter()
            .map(|line| {
                let spans: Vec<Span<'a>> = line
                    .fragments()
                    .iter()
                    .map(|fragment| match fragment {
                        Fragment::Text(text) => Span::styled(text.as_str(), palette.title()),
                        Fragment::Link { text, .. } => {
                            Span::styled(text.as_str(), palette.link())
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        Text::from(lines)
    }
}

impl<'a> Widget for SlideView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.palette.base());

        let (current, total) = self.position;
        let counter = format!(" {current} / {total} ");
        let counter_width = u16::try_from(counter.len()).unwrap_or(u16::MAX);
        if area.width > counter_width.saturating_add(1) && area.height > 0 {
            buf.set_string(
                area.right() - counter_width - 1,
                area.y,
                &counter,
                self.palette.badge(),
            );
        }

        let width = area.width.saturating_mul(3) / 4;
        let text = self.text();
        let height = wrapped_rows(&text, width).min(area.height.saturating_sub(2));

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [body] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}
