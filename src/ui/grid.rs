//! Plain-terminal card grid
//!
//! [`GridPresenter`] prints each run as rows of fixed-width cards. It backs
//! the `search` and `show` commands; the interactive browser uses the
//! ratatui adapter instead.

use super::format::{count_label, created_label, format_price, image_label, stock_label, truncate};
use super::traits::Presenter;
use crate::inventory::{ErrorSink, InventoryItem};
use colored::Colorize;
use std::io::{self, Stderr, Stdout, Write};

/// Width of one card, gutter excluded
pub const CARD_WIDTH: usize = 24;

const GUTTER: &str = "  ";

/// Message shown when a run matches nothing
pub const EMPTY_STATE: &str = "No items match the current filters.";

/// Presenter printing cards to a writer and errors to another
pub struct GridPresenter<W: Write, E: Write> {
    out: W,
    err: E,
    columns: usize,
    total: Option<usize>,
    io_error: Option<io::Error>,
}

impl GridPresenter<Stdout, Stderr> {
    /// Grid on the process stdout, errors on stderr
    #[must_use]
    pub fn stdout(columns: u16) -> Self {
        Self::new(io::stdout(), io::stderr(), columns)
    }
}

impl<W: Write, E: Write> GridPresenter<W, E> {
    #[must_use]
    pub fn new(out: W, err: E, columns: u16) -> Self {
        Self {
            out,
            err,
            columns: usize::from(columns.max(1)),
            total: None,
            io_error: None,
        }
    }

    /// Inventory size, used for the "n of m items" header
    #[must_use]
    pub const fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = Some(total);
    }

    /// First write failure since the last call, if any
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write output");
            self.io_error.get_or_insert(e);
        }
    }

    fn write_grid(&mut self, items: &[&InventoryItem]) -> io::Result<()> {
        let total = self.total.unwrap_or(items.len());
        writeln!(self.out, "{}", count_label(items.len(), total).dimmed())?;

        if items.is_empty() {
            writeln!(self.out, "{}", EMPTY_STATE.yellow())?;
            return Ok(());
        }

        for row in items.chunks(self.columns) {
            writeln!(self.out)?;
            let cards: Vec<[String; 4]> = row.iter().map(|item| card_lines(item)).collect();
            for line in 0..4 {
                let mut text = String::new();
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        text.push_str(GUTTER);
                    }
                    text.push_str(&style_line(line, &card[line], row[i]));
                }
                writeln!(self.out, "{}", text.trim_end())?;
            }
        }
        Ok(())
    }

    fn write_details(&mut self, item: &InventoryItem) -> io::Result<()> {
        writeln!(self.out, "{}", item.name.bold())?;
        writeln!(self.out, "  {:<13}{}", "ID:", item.id)?;
        writeln!(self.out, "  {:<13}{}", "Category:", item.category)?;
        writeln!(
            self.out,
            "  {:<13}{}",
            "Price:",
            format_price(item.price, &item.currency).green()
        )?;
        let stock = stock_label(item.in_stock);
        let stock = if item.in_stock { stock.green() } else { stock.red() };
        writeln!(self.out, "  {:<13}{stock}", "Availability:")?;
        if !item.tags.is_empty() {
            writeln!(self.out, "  {:<13}{}", "Tags:", item.tags.join(", "))?;
        }
        writeln!(self.out, "  {:<13}{}", "Added:", created_label(item))?;
        writeln!(self.out, "  {:<13}{}", "Image:", image_label(item))?;
        if !item.description.trim().is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "  {}", item.description.trim())?;
        }
        Ok(())
    }
}

/// Plain text of a card, each line padded to [`CARD_WIDTH`]
fn card_lines(item: &InventoryItem) -> [String; 4] {
    [
        item.name.as_str(),
        &format_price(item.price, &item.currency),
        item.category.as_str(),
        stock_label(item.in_stock),
    ]
    .map(|text| format!("{:<CARD_WIDTH$}", truncate(text, CARD_WIDTH)))
}

fn style_line(line: usize, text: &str, item: &InventoryItem) -> String {
    match line {
        0 => text.bold().to_string(),
        1 => text.green().to_string(),
        2 => text.dimmed().to_string(),
        _ if item.in_stock => text.to_string(),
        _ => text.red().to_string(),
    }
}

impl<W: Write, E: Write> ErrorSink for GridPresenter<W, E> {
    fn show_error(&mut self, message: &str) {
        let result = writeln!(self.err, "{} {}", "❌".red(), message.red().bold());
        self.record(result);
    }
}

impl<W: Write, E: Write> Presenter for GridPresenter<W, E> {
    fn render(&mut self, items: &[&InventoryItem]) {
        let result = self.write_grid(items);
        self.record(result);
    }

    fn show_details(&mut self, item: &InventoryItem) {
        let result = self.write_details(item);
        self.record(result);
    }
}
