use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::ui::line_input::{InputResult, LineInput};
use crate::ui::theme::Theme;
use crate::vocab::cache::DiskCache;
use crate::vocab::controller::{LoadRequest, RequestToken};
use crate::vocab::source::DataSource;
use crate::vocab::{Column, Command, Coordinate, DataUnavailable, Dataset, VocabController};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Table,
    Search,
    Example,
}

/// Example popup contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleView {
    pub term: String,
    pub text: String,
}

pub struct App {
    pub screen: AppScreen,
    pub controller: VocabController,
    pub config: Config,
    pub theme: &'static Theme,
    pub source: Arc<dyn DataSource>,
    pub cache: Option<Arc<DiskCache>>,
    pub search_input: Option<LineInput>,
    /// Highlighted row, as a position on the current page.
    pub selected: usize,
    pub example: Option<ExampleView>,
    pub should_quit: bool,
    pending: Option<LoadRequest>,
}

impl App {
    pub fn new(
        config: Config,
        theme: &'static Theme,
        source: Arc<dyn DataSource>,
        cache: Option<Arc<DiskCache>>,
    ) -> Self {
        let controller =
            VocabController::new(config.start_coordinate(), config.page_size, &config.locale);
        Self {
            screen: AppScreen::Table,
            controller,
            config,
            theme,
            source,
            cache,
            search_input: None,
            selected: 0,
            example: None,
            should_quit: false,
            pending: None,
        }
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    /// Issue the first load for the configured start coordinate.
    pub fn start(&mut self) {
        let coord = self.config.start_coordinate();
        let request = self.controller.begin_load(coord);
        self.pending = Some(request);
    }

    /// Load the main loop should hand to a worker, if any.
    pub fn take_pending_load(&mut self) -> Option<LoadRequest> {
        self.pending.take()
    }

    pub fn dispatch(&mut self, command: Command) {
        debug!(?command, "command");
        if let Some(request) = self.controller.apply(command) {
            self.pending = Some(request);
            self.example = None;
        }
        self.clamp_selection();
    }

    pub fn on_loaded(
        &mut self,
        token: RequestToken,
        coord: Coordinate,
        result: Result<Dataset, DataUnavailable>,
    ) {
        if self.controller.complete_load(token, result) {
            info!(%coord, "word list applied");
            self.selected = 0;
            if self.screen == AppScreen::Search {
                self.search_input = None;
                self.screen = AppScreen::Table;
            }
        }
    }

    pub fn next_week(&mut self) {
        let week = cycle(self.controller.state().coord.week, self.config.weeks, true);
        self.dispatch(Command::SelectWeek(week));
    }

    pub fn prev_week(&mut self) {
        let week = cycle(self.controller.state().coord.week, self.config.weeks, false);
        self.dispatch(Command::SelectWeek(week));
    }

    pub fn next_day(&mut self) {
        let day = cycle(self.controller.state().coord.day, self.config.days_per_week, true);
        self.dispatch(Command::SelectDay(day));
    }

    pub fn prev_day(&mut self) {
        let day = cycle(self.controller.state().coord.day, self.config.days_per_week, false);
        self.dispatch(Command::SelectDay(day));
    }

    pub fn cycle_page_size(&mut self) {
        let next = self.config.next_page_size(self.controller.state().page_size);
        self.dispatch(Command::PageSizeChanged(next));
        self.selected = 0;
    }

    pub fn next_page(&mut self) {
        let before = self.controller.state().page;
        self.dispatch(Command::NextPage);
        if self.controller.state().page != before {
            self.selected = 0;
        }
    }

    pub fn prev_page(&mut self) {
        let before = self.controller.state().page;
        self.dispatch(Command::PrevPage);
        if self.controller.state().page != before {
            self.selected = 0;
        }
    }

    pub fn toggle_column(&mut self, column: Column) {
        self.dispatch(Command::ToggleColumn(column));
    }

    pub fn toggle_selected_row(&mut self) {
        if let Some(index) = self.selected_index() {
            self.dispatch(Command::ToggleRow(index));
        }
    }

    pub fn select_next_row(&mut self) {
        let rows = self.visible_rows();
        if rows > 0 {
            self.selected = (self.selected + 1).min(rows - 1);
        }
    }

    pub fn select_prev_row(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Dataset index of the highlighted row.
    pub fn selected_index(&self) -> Option<usize> {
        self.controller
            .render()
            .rows
            .get(self.selected)
            .map(|row| row.index)
    }

    pub fn open_example(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        let term = self
            .controller
            .state()
            .dataset
            .get(index)
            .map(|item| item.term.clone())
            .unwrap_or_default();
        self.example = Some(ExampleView {
            term,
            text: self.controller.example_for(index),
        });
        self.screen = AppScreen::Example;
    }

    pub fn close_example(&mut self) {
        self.example = None;
        self.screen = AppScreen::Table;
    }

    pub fn begin_search(&mut self) {
        self.search_input = Some(LineInput::new(&self.controller.state().search));
        self.screen = AppScreen::Search;
    }

    /// Feed a key to the search box. Every edit refilters immediately;
    /// cancel restores the keyword that was active before editing.
    pub fn handle_search_key(&mut self, key: crossterm::event::KeyEvent) {
        let Some(input) = self.search_input.as_mut() else {
            self.screen = AppScreen::Table;
            return;
        };
        match input.handle(key) {
            InputResult::Continue => {}
            InputResult::Changed => {
                let term = input.value().to_string();
                self.dispatch(Command::SearchChanged(term));
                self.selected = 0;
            }
            InputResult::Submit => {
                self.search_input = None;
                self.screen = AppScreen::Table;
            }
            InputResult::Cancel => {
                let initial = input.initial().to_string();
                self.search_input = None;
                self.screen = AppScreen::Table;
                if initial != self.controller.state().search {
                    self.dispatch(Command::SearchChanged(initial));
                    self.selected = 0;
                }
            }
        }
    }

    pub fn reload(&mut self) {
        self.dispatch(Command::Reload);
    }

    fn visible_rows(&self) -> usize {
        self.controller.render().rows.len()
    }

    fn clamp_selection(&mut self) {
        let rows = self.visible_rows();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}

/// Step through `1..=max`, wrapping at both ends.
fn cycle(current: u32, max: u32, forward: bool) -> u32 {
    let max = max.max(1);
    if forward {
        if current >= max { 1 } else { current + 1 }
    } else if current <= 1 {
        max
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::vocab::VocabularyItem;
    use crate::vocab::source::BundledSource;

    fn test_app() -> App {
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        App::new(Config::default(), theme, Arc::new(BundledSource), None)
    }

    fn load(app: &mut App, items: Dataset) {
        let request = app.take_pending_load().expect("pending load");
        app.on_loaded(request.token, request.coord, Ok(items));
    }

    fn items(n: usize) -> Dataset {
        (1..=n)
            .map(|i| VocabularyItem::new(&format!("w{i}"), &format!("r{i}"), "m"))
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn start_issues_initial_load() {
        let mut app = test_app();
        app.start();
        let request = app.take_pending_load().unwrap();
        assert_eq!(request.coord, Coordinate::new(1, 1));
        assert!(app.take_pending_load().is_none());
    }

    #[test]
    fn week_navigation_wraps_and_resets_day() {
        let mut app = test_app();
        app.start();
        load(&mut app, items(3));

        app.next_day();
        load(&mut app, items(3));
        assert_eq!(app.controller.state().coord, Coordinate::new(1, 2));

        app.prev_week();
        let request = app.take_pending_load().unwrap();
        assert_eq!(request.coord, Coordinate::new(12, 1));
    }

    #[test]
    fn paging_resets_selection() {
        let mut app = test_app();
        app.start();
        load(&mut app, items(25));
        app.select_next_row();
        app.select_next_row();
        assert_eq!(app.selected, 2);
        app.next_page();
        assert_eq!(app.selected, 0);
        assert_eq!(app.controller.state().page, 2);
    }

    #[test]
    fn selection_is_clamped_to_visible_rows() {
        let mut app = test_app();
        app.start();
        load(&mut app, items(3));
        for _ in 0..10 {
            app.select_next_row();
        }
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn search_edits_filter_live_and_cancel_restores() {
        let mut app = test_app();
        app.start();
        load(&mut app, items(25));

        app.begin_search();
        app.handle_search_key(key(KeyCode::Char('w')));
        app.handle_search_key(key(KeyCode::Char('2')));
        assert_eq!(app.controller.state().filtered.len(), 7);

        app.handle_search_key(key(KeyCode::Esc));
        assert_eq!(app.screen, AppScreen::Table);
        assert_eq!(app.controller.state().search, "");
        assert_eq!(app.controller.state().filtered.len(), 25);
    }

    #[test]
    fn example_popup_uses_selected_row() {
        let mut app = test_app();
        app.start();
        load(
            &mut app,
            vec![
                VocabularyItem::new("kasa", "かさ", "payung").with_example("**傘**"),
                VocabularyItem::new("tori", "とり", "burung"),
            ],
        );
        app.select_next_row();
        app.open_example();
        assert_eq!(app.screen, AppScreen::Example);
        let example = app.example.clone().unwrap();
        assert_eq!(example.term, "tori");
        assert_eq!(example.text, "Belum ada contoh kalimat.");
        app.close_example();
        assert!(app.example.is_none());
    }

    #[test]
    fn toggle_selected_row_hides_it() {
        let mut app = test_app();
        app.start();
        load(&mut app, items(5));
        app.select_next_row();
        app.toggle_selected_row();
        assert!(app.controller.state().hidden_rows.contains(&1));
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(cycle(12, 12, true), 1);
        assert_eq!(cycle(1, 12, false), 12);
        assert_eq!(cycle(3, 5, true), 4);
        assert_eq!(cycle(1, 0, true), 1);
    }
}
