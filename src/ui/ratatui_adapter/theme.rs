//! Color theme definitions for the ratatui TUI

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted card or option
    pub selection_bg: Color,
    /// Foreground color for the highlighted card or option
    pub selection_fg: Color,
    /// Border color of the focused control
    pub focus: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub border: Color,
    pub dimmed: Color,
    /// Color for prices
    pub price: Color,
    /// Color for category names and tags
    pub category: Color,
    /// Color for out-of-stock labels
    pub out_of_stock: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            focus: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            price: Color::Green,
            category: Color::Magenta,
            out_of_stock: Color::Red,
        }
    }

    /// Style for the currently selected card or option
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Border style for a control, highlighted when it has focus
    #[must_use]
    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            self.border_style()
        }
    }

    /// Style for key names in the help bar
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for the persistent error banner
    #[must_use]
    pub fn banner_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn price_style(&self) -> Style {
        Style::default().fg(self.price).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn category_style(&self) -> Style {
        Style::default().fg(self.category)
    }

    /// Style for the stock line of a card
    #[must_use]
    pub fn stock_style(&self, in_stock: bool) -> Style {
        if in_stock {
            Style::default().fg(self.success)
        } else {
            Style::default().fg(self.out_of_stock)
        }
    }
}
