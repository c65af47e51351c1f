use crate::keymap::{map_key, Action, EDITING_HINTS, HELP_TEXT, PRESENTING_HINTS};
use crate::palette::Palette;
use crate::textarea::{TextArea, TextAreaState};
use crate::widgets::{modal::Modal, slide_view::SlideView, status_bar::StatusBar};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use text2slide_common::SettingsStore;
use text2slide_core::{
    Mode, NotificationKind, Platform, SlideSessionController, UserNotification,
};
use tokio::time::Duration;

/// Terminal front end over a [`SlideSessionController`].
pub struct App<S, P> {
    controller: SlideSessionController<S, P>,
    editor: TextArea,
    editor_state: TextAreaState,
    notification: Option<UserNotification>,
    show_help: bool,
    should_quit: bool,
}

impl<S, P> App<S, P>
where
    S: SettingsStore,
    P: Platform,
{
    pub fn new(controller: SlideSessionController<S, P>) -> Self {
        let mut editor = TextArea::new();
        editor.set_text(controller.session().raw_text());
        Self {
            controller,
            editor,
            editor_state: TextAreaState::default(),
            notification: None,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &SlideSessionController<S, P> {
        &self.controller
    }

    pub fn notification(&self) -> Option<&UserNotification> {
        self.notification.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn overlay_open(&self) -> bool {
        self.show_help || self.notification.is_some()
    }

    fn notify(&mut self, notification: UserNotification) {
        tracing::debug!("Notification: {}", notification.message);
        self.notification = Some(notification);
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let mode = self.controller.session().mode();
        let Some(action) = map_key(mode, self.overlay_open(), key) else {
            return;
        };

        match action {
            Action::Quit => self.should_quit = true,
            Action::Dismiss => {
                self.show_help = false;
                self.notification = None;
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Submit => {
                if let Err(e) = self.controller.submit() {
                    self.notify(UserNotification::warning(e.to_string()));
                }
            }
            Action::Next => self.controller.next(),
            Action::Previous => self.controller.previous(),
            Action::First => self.controller.first(),
            Action::Last => self.controller.last(),
            Action::Reset => self.controller.reset(),
            Action::ToggleTheme => {
                self.controller.toggle_theme();
            }
            Action::Share => match self.controller.share().await {
                Ok(outcome) => {
                    tracing::info!("Share link: {}", outcome.link());
                    self.notify(outcome.notification());
                }
                Err(e) => self.notify(UserNotification::error(e.to_string())),
            },
            Action::Edit(key) => {
                if self.editor.input(key) {
                    self.controller.edit_text(self.editor.text());
                }
            }
        }
    }

    /// Bracketed paste. Only the editor accepts text.
    pub fn handle_paste(&mut self, text: &str) {
        if self.controller.session().mode() != Mode::Editing || self.overlay_open() {
            return;
        }
        self.editor.insert_str(text);
        self.controller.edit_text(self.editor.text());
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let session = self.controller.session();
        let palette = Palette::for_theme(session.theme());
        let mode = session.mode();
        let area = f.area();

        f.render_widget(Block::default().style(palette.base()), area);
        let [main, status] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(area);

        match mode {
            Mode::Editing => self.draw_editor(f, main, palette),
            Mode::Presenting => self.draw_slide(f, main, palette),
        }

        let location = self.controller.current_url();
        let (label, hints) = match mode {
            Mode::Editing => ("EDIT", EDITING_HINTS),
            Mode::Presenting => ("PRESENT", PRESENTING_HINTS),
        };
        f.render_widget(StatusBar::new(label, &location, hints, palette), status);

        if self.show_help {
            f.render_widget(Modal::new("Help", HELP_TEXT, palette), area);
        } else if let Some(notification) = &self.notification {
            let title = match notification.kind {
                NotificationKind::Info => "Info",
                NotificationKind::Warning => "Warning",
                NotificationKind::Error => "Error",
            };
            f.render_widget(
                Modal::new(title, &notification.message, palette)
                    .detail(notification.detail.as_deref()),
                area,
            );
        }
    }

    fn draw_editor(&mut self, f: &mut Frame, area: Rect, palette: Palette) {
        let [header, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

        let intro = Paragraph::new(vec![
            Line::from(Span::styled("Text 2 Slide", palette.title())),
            Line::from(Span::styled(
                "Convert your text into slides. Separate your slides with an empty line.",
                palette.muted(),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(intro, header);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted())
            .title("Type your text...");
        let inner = block.inner(body);
        f.render_widget(block, body);

        self.editor.set_style(palette.base());
        self.editor
            .scroll_to_cursor(inner.width, inner.height, &mut self.editor_state);
        f.render_stateful_widget_ref(&self.editor, inner, &mut self.editor_state);
        if self.editor.is_empty() {
            f.render_widget(
                Paragraph::new(Span::styled("Paste or type your text here", palette.muted())),
                inner,
            );
        }

        if !self.overlay_open() {
            if let Some(pos) = self.editor.cursor_pos_with_state(inner, &self.editor_state) {
                f.set_cursor_position(pos);
            }
        }
    }

    fn draw_slide(&self, f: &mut Frame, area: Rect, palette: Palette) {
        let session = self.controller.session();
        if let (Some(slide), Some(position)) = (session.active_slide(), session.position()) {
            f.render_widget(SlideView::new(slide, position, palette), area);
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await,
                    Event::Paste(text) => self.handle_paste(&text),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
