//! Filter panel: one bordered box per form control

use crate::sync::{ControlField, Controls, FormControls};
use crate::ui::ratatui_adapter::state::Focus;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Left-hand panel rendering the form controls
pub struct FilterPanel<'a> {
    controls: &'a FormControls,
    focus: Focus,
    category_cursor: usize,
    theme: &'a Theme,
}

impl<'a> FilterPanel<'a> {
    #[must_use]
    pub const fn new(
        controls: &'a FormControls,
        focus: Focus,
        category_cursor: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            controls,
            focus,
            category_cursor,
            theme,
        }
    }

    fn block(&self, field: ControlField) -> Block<'static> {
        let focused = self.focus == Focus::Control(field);
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_for(focused))
            .title(format!(" {} ", field.label()))
    }

    fn text_line(&self, field: ControlField) -> Line<'a> {
        let text = self.controls.text(field).unwrap_or_default();
        let mut spans = vec![Span::raw(text)];
        if self.focus == Focus::Control(field) {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        } else if text.is_empty() {
            spans.push(Span::styled("any", self.theme.dimmed_style()));
        }
        Line::from(spans)
    }

    fn category_lines(&self, height: usize) -> Vec<Line<'a>> {
        let entries = self.controls.category_entries();
        if entries.is_empty() {
            return vec![Line::styled("(none)", self.theme.dimmed_style())];
        }

        let focused = self.focus == Focus::Control(ControlField::Categories);
        let offset = self.category_cursor.saturating_sub(height.saturating_sub(1));

        entries
            .into_iter()
            .enumerate()
            .skip(offset)
            .take(height.max(1))
            .map(|(i, category)| {
                let mark = if self.controls.is_category_selected(category) {
                    "[x] "
                } else {
                    "[ ] "
                };
                let style = if focused && i == self.category_cursor {
                    self.theme.selected_style()
                } else {
                    self.theme.category_style()
                };
                Line::from(vec![Span::raw(mark), Span::styled(category, style)])
            })
            .collect()
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Query
                Constraint::Min(4),    // Categories
                Constraint::Length(3), // Price range
                Constraint::Length(3), // In stock
                Constraint::Length(3), // Sort
            ])
            .split(area);

        Paragraph::new(self.text_line(ControlField::Query))
            .block(self.block(ControlField::Query))
            .render(rows[0], buf);

        let height = usize::from(rows[1].height.saturating_sub(2));
        Paragraph::new(self.category_lines(height))
            .block(self.block(ControlField::Categories))
            .render(rows[1], buf);

        let prices = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        for (field, cell) in [ControlField::PriceMin, ControlField::PriceMax]
            .into_iter()
            .zip(prices.iter())
        {
            Paragraph::new(self.text_line(field))
                .block(self.block(field))
                .render(*cell, buf);
        }

        let checkbox = if self.controls.in_stock_only() {
            "[x] only in-stock items"
        } else {
            "[ ] only in-stock items"
        };
        Paragraph::new(checkbox)
            .block(self.block(ControlField::InStock))
            .render(rows[3], buf);

        let sort = Line::from(vec![
            Span::styled("◀ ", self.theme.dimmed_style()),
            Span::raw(self.controls.sort().label()),
            Span::styled(" ▶", self.theme.dimmed_style()),
        ]);
        Paragraph::new(sort)
            .block(self.block(ControlField::Sort))
            .render(rows[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(controls: &FormControls, focus: Focus) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 20);
        let mut buf = Buffer::empty(area);
        FilterPanel::new(controls, focus, 0, &theme).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_control_values() {
        let mut controls = FormControls::new(vec!["Lighting".into(), "Garden".into()]);
        controls.set_query("lamp");
        controls.toggle_category("Garden");
        controls.set_in_stock_only(true);

        let text = render(&controls, Focus::Grid);
        assert!(text.contains("lamp"));
        assert!(text.contains("[x] Garden"));
        assert!(text.contains("[ ] Lighting"));
        assert!(text.contains("[x] only in-stock"));
        assert!(text.contains("Newest"));
    }

    #[test]
    fn test_restored_selection_is_shown() {
        let mut controls = FormControls::new(vec!["Lighting".into(), "Garden".into()]);
        controls.set_categories(&["garden".to_string(), "Toys".to_string()]);

        let text = render(&controls, Focus::Grid);
        assert!(text.contains("[x] Garden"));
        assert!(text.contains("[x] Toys"));
        assert!(!text.contains("garden"));
    }

    #[test]
    fn test_empty_category_list() {
        let text = render(&FormControls::default(), Focus::Control(ControlField::Query));
        assert!(text.contains("(none)"));
    }
}
