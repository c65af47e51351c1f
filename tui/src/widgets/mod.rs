pub mod modal;
pub mod slide_view;
pub mod status_bar;

use ratatui::text::Text;

/// Rows `text` takes when wrapped at `width` columns, saturating at `u16::MAX`.
pub(crate) fn wrapped_rows(text: &Text<'_>, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .fold(0, usize::saturating_add);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use modal::Modal;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
    use text2slide_common::Theme;

    #[test]
    fn test_wrapped_rows() {
        let text = Text::from("abcdef\n\nxy");
        assert_eq!(wrapped_rows(&text, 4), 4);
        assert_eq!(wrapped_rows(&text, 0), 9);
    }

    #[test]
    fn test_wrapped_rows_saturates() {
        let text = Text::from("x".repeat(70_000));
        assert_eq!(wrapped_rows(&text, 1), u16::MAX);
    }

    #[test]
    fn test_modal_with_huge_detail_fills_area() {
        let link = format!("https://text2slide.app/?slides={}", "A".repeat(300_000));
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        Modal::new("Share", "Copy it manually:", Palette::for_theme(Theme::Light))
            .detail(Some(&link))
            .render(area, &mut buf);

        let top: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.contains("Share"), "{top:?}");
    }
}
