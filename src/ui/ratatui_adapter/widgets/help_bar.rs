//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::Focus;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::sync::ControlField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Tab", "ctrl+r")
    pub key: String,
    /// Action description (e.g., "next field")
    pub action: String,
}

impl KeyHint {
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the current focus (or the open modal)
#[must_use]
pub fn hints_for(focus: Focus, modal_open: bool) -> Vec<KeyHint> {
    if modal_open {
        return vec![KeyHint::new("o", "open image"), KeyHint::new("Esc", "close")];
    }

    let mut hints = vec![KeyHint::new("Tab", "next field")];
    match focus {
        Focus::Grid => {
            hints.push(KeyHint::new("←↑↓→", "move"));
            hints.push(KeyHint::new("Enter", "details"));
            hints.push(KeyHint::new("q", "quit"));
        }
        Focus::Control(ControlField::Categories) => {
            hints.push(KeyHint::new("↑/↓", "move"));
            hints.push(KeyHint::new("Space", "toggle"));
        }
        Focus::Control(ControlField::InStock) => hints.push(KeyHint::new("Space", "toggle")),
        Focus::Control(ControlField::Sort) => hints.push(KeyHint::new("←/→", "change")),
        Focus::Control(_) => hints.push(KeyHint::new("Enter", "apply now")),
    }
    hints.push(KeyHint::new("ctrl+r", "reset"));
    hints.push(KeyHint::new("ctrl+y", "copy link"));
    hints.push(KeyHint::new("ctrl+c", "quit"));
    hints
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.key_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
