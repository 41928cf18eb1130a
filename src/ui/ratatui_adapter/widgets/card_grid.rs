//! Card grid widget for the filtered result set

use crate::inventory::InventoryItem;
use crate::ui::format::{count_label, format_price, stock_label, truncate};
use crate::ui::grid::EMPTY_STATE;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Grid of item cards with a highlighted cursor card
pub struct CardGrid<'a> {
    cards: &'a [InventoryItem],
    total: usize,
    cursor: usize,
    columns: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    #[must_use]
    pub fn new(cards: &'a [InventoryItem], total: usize, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            cards,
            total,
            cursor,
            columns: 3,
            focused: false,
            theme,
        }
    }

    #[must_use]
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_card(&self, item: &InventoryItem, selected: bool, area: Rect, buf: &mut Buffer) {
        let border = if selected {
            self.theme.border_for(true)
        } else {
            self.theme.border_style()
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let width = usize::from(area.width.saturating_sub(2));

        let name_style = if selected {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };
        let lines = vec![
            Line::styled(truncate(&item.name, width), name_style),
            Line::styled(
                format_price(item.price, &item.currency),
                self.theme.price_style(),
            ),
            Line::styled(truncate(&item.category, width), self.theme.category_style()),
            Line::styled(stock_label(item.in_stock), self.theme.stock_style(item.in_stock)),
        ];
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_for(self.focused))
            .title(format!(" {} ", count_label(self.cards.len(), self.total)));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.cards.is_empty() {
            Paragraph::new(Line::styled(EMPTY_STATE, self.theme.warning_style()))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
        let cursor_row = self.cursor / self.columns;
        let first_row = cursor_row.saturating_sub(visible_rows - 1);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(inner);
        let ratio = u32::try_from(self.columns).unwrap_or(1);

        for (row_idx, row_area) in row_areas.iter().enumerate() {
            let start = (first_row + row_idx) * self.columns;
            if start >= self.cards.len() {
                break;
            }
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, ratio); self.columns])
                .split(*row_area);

            for (offset, cell) in cells.iter().enumerate() {
                let idx = start + offset;
                let Some(item) = self.cards.get(idx) else {
                    break;
                };
                self.render_card(item, idx == self.cursor, *cell, buf);
            }
        }
    }
}
