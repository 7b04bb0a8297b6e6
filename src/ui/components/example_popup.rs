use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::ui::theme::Theme;
use crate::vocab::example::format_example;

/// Modal showing the example sentence of one word.
pub struct ExamplePopup<'a> {
    term: &'a str,
    text: &'a str,
    theme: &'a Theme,
    locale: &'a str,
}

impl<'a> ExamplePopup<'a> {
    pub fn new(term: &'a str, text: &'a str, theme: &'a Theme, locale: &'a str) -> Self {
        Self {
            term,
            text,
            theme,
            locale,
        }
    }
}

pub fn example_lines(text: &str, base: Style) -> Vec<Line<'static>> {
    format_example(text)
        .into_iter()
        .map(|segments| {
            Line::from(
                segments
                    .into_iter()
                    .map(|seg| {
                        let style = if seg.bold {
                            base.add_modifier(Modifier::BOLD)
                        } else {
                            base
                        };
                        Span::styled(seg.text, style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

impl Widget for ExamplePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let locale = self.locale;

        Clear.render(area, buf);
        let title = if self.term.is_empty() {
            format!(" {} ", t!("example.title", locale = locale))
        } else {
            format!(" {} · {} ", t!("example.title", locale = locale), self.term)
        };
        let block = Block::bordered()
            .title(title)
            .title_bottom(Line::from(format!(" {} ", t!("example.close", locale = locale))))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));

        let lines = example_lines(self.text, Style::default().fg(colors.fg()));
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
