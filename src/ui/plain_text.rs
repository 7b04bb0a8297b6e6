use anyhow::{Result, bail};
use rust_i18n::t;

use crate::config::Config;
use crate::ui::components::pager_bar::page_label;
use crate::ui::components::vocab_table::{column_label, mask};
use crate::vocab::cache::DiskCache;
use crate::vocab::controller::TableView;
use crate::vocab::source::DataSource;
use crate::vocab::{Column, VocabController, VocabularyItem};

/// Tab-separated rendering of one page, for `--print`.
pub fn page_text(view: &TableView<'_>, locale: &str) -> String {
    let week = view.coord.week;
    let day = view.coord.day;
    let mut out = format!(
        "{} {week} · {} {day}\n",
        t!("selector.week", locale = locale),
        t!("selector.day", locale = locale)
    );
    if view.placeholder {
        out.push_str(&t!("table.no_data", locale = locale));
        out.push('\n');
        return out;
    }

    let header: Vec<String> = Column::ALL
        .iter()
        .map(|&column| column_label(column, locale))
        .collect();
    out.push_str(&format!(
        "{}\t{}\n",
        t!("column.number", locale = locale),
        header.join("\t")
    ));
    for row in &view.rows {
        let cells: Vec<String> = Column::ALL
            .iter()
            .map(|&column| {
                let text = VocabularyItem::display(row.item.field(column));
                if row.is_cell_hidden(column, view) {
                    mask(text)
                } else {
                    text.to_string()
                }
            })
            .collect();
        out.push_str(&format!("{}\t{}\n", row.number, cells.join("\t")));
    }
    out.push_str(&page_label(view.info.page, view.info.total_pages, locale));
    out.push('\n');
    out
}

/// Load the configured start coordinate and render its first page. An
/// unavailable list becomes an error carrying the localized message.
pub fn load_page_text(
    config: &Config,
    source: &dyn DataSource,
    cache: Option<&DiskCache>,
    hide: &[Column],
) -> Result<String> {
    let coord = config.start_coordinate();
    let mut controller = VocabController::new(coord, config.page_size, &config.locale);
    for column in hide {
        controller.toggle_column_visibility(*column);
    }
    controller.load_with(source, cache, config.cache_policy(), coord);

    let view = controller.render();
    if let Some(error) = view.error {
        bail!("{error}");
    }
    Ok(page_text(&view, &config.locale))
}
