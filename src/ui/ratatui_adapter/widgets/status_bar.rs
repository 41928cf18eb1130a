//! Status bar widget: share query, error banner and transient messages

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar showing the live share string on the right
pub struct StatusBar<'a> {
    messages: &'a [&'a StatusMessage],
    error: Option<&'a str>,
    share: &'a str,
    pending: bool,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], share: &'a str, theme: &'a Theme) -> Self {
        Self {
            messages,
            error: None,
            share,
            pending: false,
            theme,
        }
    }

    /// Persistent error banner, shown ahead of any message
    #[must_use]
    pub const fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Mark a debounced run as waiting
    #[must_use]
    pub const fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }

    fn left_line(&self) -> Line<'a> {
        if let Some(error) = self.error {
            return Line::from(vec![
                Span::styled(" ✗ ", self.theme.banner_style()),
                Span::styled(error, self.theme.error_style()),
            ]);
        }
        match self.messages.last() {
            Some(msg) => {
                let style = self.style_for_level(msg.level);
                Line::from(vec![
                    Span::styled(Self::prefix_for_level(msg.level), style),
                    Span::styled(msg.text.as_str(), style),
                ])
            }
            None => Line::default(),
        }
    }

    fn share_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        if self.pending {
            spans.push(Span::styled("… ", self.theme.warning_style()));
        }
        if self.share.is_empty() {
            spans.push(Span::styled("(no filters)", self.theme.dimmed_style()));
        } else {
            spans.push(Span::styled(self.share, self.theme.info_style()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        Paragraph::new(self.left_line()).render(chunks[0], buf);
        Paragraph::new(self.share_line())
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
