use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Search field. Shows a live cursor while editing, otherwise the active
/// keyword or a hint.
pub struct SearchBox<'a> {
    keyword: &'a str,
    editing: Option<&'a LineInput>,
    theme: &'a Theme,
    locale: &'a str,
}

impl<'a> SearchBox<'a> {
    pub fn new(keyword: &'a str, theme: &'a Theme, locale: &'a str) -> Self {
        Self {
            keyword,
            editing: None,
            theme,
            locale,
        }
    }

    pub fn editing(mut self, input: Option<&'a LineInput>) -> Self {
        self.editing = input;
        self
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let locale = self.locale;
        let focused = self.editing.is_some();

        let block = Block::bordered()
            .title(format!(" {} ", t!("search.label", locale = locale)))
            .border_style(Style::default().fg(if focused {
                colors.border_focused()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));

        let line = match self.editing {
            Some(input) => {
                let (before, cursor, after) = input.render_parts();
                let cursor_style = Style::default()
                    .fg(colors.bg())
                    .bg(colors.fg())
                    .add_modifier(Modifier::BOLD);
                Line::from(vec![
                    Span::styled(before.to_string(), Style::default().fg(colors.fg())),
                    Span::styled(cursor.map_or(" ".to_string(), |c| c.to_string()), cursor_style),
                    Span::styled(after.to_string(), Style::default().fg(colors.fg())),
                ])
            }
            None if self.keyword.is_empty() => Line::from(Span::styled(
                t!("search.hint", locale = locale).into_owned(),
                Style::default().fg(colors.text_dim()).add_modifier(Modifier::ITALIC),
            )),
            None => Line::from(Span::styled(
                self.keyword.to_string(),
                Style::default().fg(colors.fg()),
            )),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
