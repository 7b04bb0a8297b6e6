use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;
use crate::vocab::controller::TableView;

/// `‹ Sebelumnya  Halaman 2 dari 3  Berikutnya ›` with disabled ends dimmed.
pub struct PagerBar<'a> {
    view: &'a TableView<'a>,
    theme: &'a Theme,
    locale: &'a str,
}

impl<'a> PagerBar<'a> {
    pub fn new(view: &'a TableView<'a>, theme: &'a Theme, locale: &'a str) -> Self {
        Self { view, theme, locale }
    }
}

pub fn page_label(page: usize, total: usize, locale: &str) -> String {
    t!("pager.info", locale = locale, page = page, total = total).into_owned()
}

impl Widget for PagerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let locale = self.locale;
        let enabled = Style::default()
            .fg(colors.accent())
            .add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(colors.text_dim());

        let prev = format!("‹ {}", t!("pager.prev", locale = locale));
        let next = format!("{} ›", t!("pager.next", locale = locale));
        let info = page_label(self.view.info.page, self.view.info.total_pages, locale);
        let shown = self.view.filtered_count;
        let total = self.view.total_items;
        let count = t!("table.count", locale = locale, shown = shown, total = total);

        let line = Line::from(vec![
            Span::styled(prev, if self.view.has_prev { enabled } else { disabled }),
            Span::raw("   "),
            Span::styled(info, Style::default().fg(colors.fg())),
            Span::raw("   "),
            Span::styled(next, if self.view.has_next { enabled } else { disabled }),
            Span::styled(format!("   ({count})"), Style::default().fg(colors.text_dim())),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
