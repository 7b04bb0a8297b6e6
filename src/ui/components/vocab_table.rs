use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Row, Table, Widget};
use rust_i18n::t;

use crate::ui::layout::LayoutTier;
use crate::ui::theme::Theme;
use crate::vocab::controller::{TableRow, TableView};
use crate::vocab::{Column, VocabularyItem};

const MASK: char = '•';

/// The word table for the current page.
pub struct VocabTable<'a> {
    view: &'a TableView<'a>,
    selected: Option<usize>,
    tier: LayoutTier,
    theme: &'a Theme,
    locale: &'a str,
}

impl<'a> VocabTable<'a> {
    pub fn new(view: &'a TableView<'a>, theme: &'a Theme, locale: &'a str) -> Self {
        Self {
            view,
            selected: None,
            tier: LayoutTier::Wide,
            theme,
            locale,
        }
    }

    /// Highlight a row by its position on the current page.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn tier(mut self, tier: LayoutTier) -> Self {
        self.tier = tier;
        self
    }

    fn header(&self) -> Row<'static> {
        let colors = &self.theme.colors;
        let locale = self.locale;
        let mut cells = Vec::new();
        if self.tier.show_number() {
            cells.push(Cell::from(t!("column.number", locale = locale).into_owned()));
        }
        for column in Column::ALL {
            let label = column_label(column, locale);
            let hidden = self.view.is_column_hidden(column);
            let marker = if hidden { " ◌" } else { "" };
            let cell = Cell::from(format!("[{}] {label}{marker}", column.index() + 1));
            cells.push(if hidden {
                cell.style(Style::default().fg(colors.accent_dim()))
            } else {
                cell
            });
        }
        if self.tier.show_example_marker() {
            cells.push(Cell::from(t!("column.example", locale = locale).into_owned()));
        }
        Row::new(cells).style(
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        )
    }

    fn widths(&self) -> Vec<Constraint> {
        let mut widths = Vec::new();
        if self.tier.show_number() {
            widths.push(Constraint::Length(4));
        }
        widths.extend([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Fill(1),
        ]);
        if self.tier.show_example_marker() {
            widths.push(Constraint::Length(8));
        }
        widths
    }

    fn data_row(&self, pos: usize, row: &TableRow<'_>) -> Row<'static> {
        let colors = &self.theme.colors;
        let mut cells = Vec::new();
        if self.tier.show_number() {
            cells.push(Cell::from(row.number.to_string()).style(Style::default().fg(colors.text_dim())));
        }
        for column in Column::ALL {
            let text = VocabularyItem::display(row.item.field(column));
            let cell = if row.is_cell_hidden(column, self.view) {
                Cell::from(mask(text))
                    .style(Style::default().fg(colors.hidden_fg()).bg(colors.hidden_bg()))
            } else {
                Cell::from(text.to_string())
            };
            cells.push(cell);
        }
        if self.tier.show_example_marker() {
            let marker = if row.item.example.as_deref().is_some_and(|e| !e.is_empty()) {
                "ⓘ"
            } else {
                ""
            };
            cells.push(Cell::from(marker).style(Style::default().fg(colors.accent())));
        }

        let mut style = Style::default().fg(colors.fg());
        if self.selected == Some(pos) {
            style = style.bg(colors.row_selected_bg()).add_modifier(Modifier::BOLD);
        }
        Row::new(cells).style(style)
    }

    fn message_row(&self, text: String, style: Style) -> Row<'static> {
        let span = if self.tier.show_number() { 2 } else { 1 };
        let mut cells: Vec<Cell> = (0..span).map(|_| Cell::from("")).collect();
        cells[span - 1] = Cell::from(Line::from(text)).style(style);
        Row::new(cells)
    }
}

pub fn column_label(column: Column, locale: &str) -> String {
    match column {
        Column::Term => t!("column.term", locale = locale),
        Column::Reading => t!("column.reading", locale = locale),
        Column::Meaning => t!("column.meaning", locale = locale),
    }
    .into_owned()
}

/// Replace every character with the mask glyph, keeping a minimum width so
/// short answers are not guessable from the blank length alone.
pub fn mask(text: &str) -> String {
    let len = text.chars().count().max(3);
    std::iter::repeat_n(MASK, len).collect()
}

impl Widget for VocabTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let locale = self.locale;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let rows: Vec<Row> = if self.view.loading {
            vec![self.message_row(
                t!("table.loading", locale = locale).into_owned(),
                Style::default().fg(colors.warning()),
            )]
        } else if self.view.placeholder {
            vec![self.message_row(
                t!("table.no_data", locale = locale).into_owned(),
                Style::default().fg(colors.text_dim()).add_modifier(Modifier::ITALIC),
            )]
        } else {
            self.view
                .rows
                .iter()
                .enumerate()
                .map(|(pos, row)| self.data_row(pos, row))
                .collect()
        };

        let table = Table::new(rows, self.widths())
            .header(self.header())
            .block(block)
            .column_spacing(1);
        Widget::render(table, area, buf);
    }
}
