use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;
use crate::vocab::Coordinate;

/// Title plus the week, day and page-size selectors.
pub struct HeaderBar<'a> {
    coord: Coordinate,
    weeks: u32,
    days: u32,
    page_size: usize,
    loading: bool,
    source: &'a str,
    theme: &'a Theme,
    locale: &'a str,
}

impl<'a> HeaderBar<'a> {
    pub fn new(coord: Coordinate, page_size: usize, theme: &'a Theme, locale: &'a str) -> Self {
        Self {
            coord,
            weeks: coord.week,
            days: coord.day,
            page_size,
            loading: false,
            source: "",
            theme,
            locale,
        }
    }

    pub fn bounds(mut self, weeks: u32, days: u32) -> Self {
        self.weeks = weeks;
        self.days = days;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn source(mut self, source: &'a str) -> Self {
        self.source = source;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let locale = self.locale;
        let bar = Style::default().fg(colors.header_fg()).bg(colors.header_bg());
        let value = Style::default()
            .fg(colors.accent())
            .bg(colors.header_bg())
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(
                format!(" {} ", t!("app.title", locale = locale)),
                Style::default()
                    .fg(colors.bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}: ", t!("selector.week", locale = locale)), bar),
            Span::styled(format!("{}/{}", self.coord.week, self.weeks), value),
            Span::styled(format!("  {}: ", t!("selector.day", locale = locale)), bar),
            Span::styled(format!("{}/{}", self.coord.day, self.days), value),
            Span::styled(format!("  {}: ", t!("selector.page_size", locale = locale)), bar),
            Span::styled(self.page_size.to_string(), value),
        ];
        if area.width >= 100 {
            spans.insert(
                1,
                Span::styled(
                    format!(" {} ·", t!("app.subtitle", locale = locale)),
                    Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
                ),
            );
        }
        if self.loading {
            spans.push(Span::styled(
                format!("  {}", t!("table.loading", locale = locale)),
                Style::default().fg(colors.warning()).bg(colors.header_bg()),
            ));
        }
        if !self.source.is_empty() {
            spans.push(Span::styled(
                format!("  [{}]", self.source),
                Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(bar)
            .render(area, buf);
    }
}
