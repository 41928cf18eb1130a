//! Details modal widget for one inventory item

use crate::inventory::InventoryItem;
use crate::ui::format::{created_label, format_price, has_image, image_label, stock_label};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Modal showing every field of an item
pub struct DetailsModal<'a> {
    item: &'a InventoryItem,
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    #[must_use]
    pub const fn new(item: &'a InventoryItem, theme: &'a Theme) -> Self {
        Self { item, theme }
    }

    /// Calculate centered area for the modal
    pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height.min(90)) / 2),
            Constraint::Percentage(height.min(90)),
            Constraint::Percentage((100 - height.min(90)) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width.min(90)) / 2),
            Constraint::Percentage(width.min(90)),
            Constraint::Percentage((100 - width.min(90)) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn field(&self, label: &'static str, value: Span<'a>) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), self.theme.dimmed_style()),
            value,
        ])
    }

    fn build_content(&self, rule_width: usize) -> Vec<Line<'a>> {
        let item = self.item;
        let mut lines = vec![
            Line::from(Span::styled(
                item.name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("─".repeat(rule_width)),
            Line::default(),
            self.field(
                "Price:",
                Span::styled(
                    format_price(item.price, &item.currency),
                    self.theme.price_style(),
                ),
            ),
            self.field(
                "Category:",
                Span::styled(item.category.as_str(), self.theme.category_style()),
            ),
            self.field(
                "Availability:",
                Span::styled(
                    stock_label(item.in_stock),
                    self.theme.stock_style(item.in_stock),
                ),
            ),
            self.field("Added:", Span::raw(created_label(item))),
            self.field("ID:", Span::raw(item.id.as_str())),
        ];

        let tags = if item.tags.is_empty() {
            Span::styled(
                "(none)",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(item.tags.join(", "), self.theme.category_style())
        };
        lines.push(self.field("Tags:", tags));

        let image = if has_image(item) {
            Span::styled(
                image_label(item),
                Style::default().add_modifier(Modifier::UNDERLINED),
            )
        } else {
            Span::styled(image_label(item), self.theme.dimmed_style())
        };
        lines.push(self.field("Image:", image));

        if !item.description.trim().is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(item.description.trim()));
        }

        lines.push(Line::default());
        lines.push(Line::from("─".repeat(rule_width)));
        let hint = if has_image(item) {
            "o: open image  Esc: close"
        } else {
            "Esc: close"
        };
        lines.push(Line::from(Span::styled(
            hint,
            self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
        )));

        lines
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(70, 70, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_for(true))
            .title(" Item Details ")
            .title_alignment(Alignment::Center);

        let rule_width = usize::from(popup_area.width.saturating_sub(2));
        Paragraph::new(self.build_content(rule_width))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    fn render(item: &InventoryItem) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        DetailsModal::new(item, &theme).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_shows_item_fields() {
        let mut it = item("p1", "Desk Lamp", 24.0);
        it.tags = vec!["lighting".into()];
        it.image = "https://img.example.com/p1.jpg".into();
        let text = render(&it);
        assert!(text.contains("Item Details"));
        assert!(text.contains("Desk Lamp"));
        assert!(text.contains("$24.00"));
        assert!(text.contains("lighting"));
        assert!(text.contains("https://img.example.com/p1.jpg"));
        assert!(text.contains("o: open image"));
    }

    #[test]
    fn test_missing_image_fallback() {
        let it = item("p1", "Desk Lamp", 24.0);
        let text = render(&it);
        assert!(text.contains("(no image)"));
        assert!(!text.contains("o: open image"));
    }

    #[test]
    fn test_centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = DetailsModal::centered_rect(70, 70, area);
        assert!(popup.width <= 71 && popup.height <= 36);
        assert!(popup.x >= 14 && popup.y >= 7);
    }
}
