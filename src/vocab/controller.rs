use std::collections::HashSet;

use rust_i18n::t;
use tracing::debug;

use crate::vocab::cache::DiskCache;
use crate::vocab::error::DataUnavailable;
use crate::vocab::filter::SearchFilter;
use crate::vocab::item::{Column, Coordinate, Dataset, VocabularyItem};
use crate::vocab::loader::{self, CachePolicy};
use crate::vocab::pager::PageInfo;
use crate::vocab::source::DataSource;

/// Identifies one issued load. Only the most recent token may complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub token: RequestToken,
    pub coord: Coordinate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Interaction events sent by the render target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SearchChanged(String),
    PageSizeChanged(usize),
    PrevPage,
    NextPage,
    ToggleColumn(Column),
    ToggleRow(usize),
    SelectWeek(u32),
    SelectDay(u32),
    Reload,
}

/// All view state owned by the controller.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub coord: Coordinate,
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub dataset: Dataset,
    /// Dataset indices passing the current search, in order.
    pub filtered: Vec<usize>,
    pub hidden_columns: HashSet<Column>,
    /// Hidden rows keyed by dataset index.
    pub hidden_rows: HashSet<usize>,
    pub status: LoadStatus,
    pub error: Option<String>,
    latest: u64,
}

impl ViewState {
    fn new(coord: Coordinate, page_size: usize) -> Self {
        Self {
            coord,
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            dataset: Vec::new(),
            filtered: Vec::new(),
            hidden_columns: HashSet::new(),
            hidden_rows: HashSet::new(),
            status: LoadStatus::Idle,
            error: None,
            latest: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TableRow<'a> {
    /// 1-based position in the filtered list.
    pub number: usize,
    /// Position in the loaded dataset.
    pub index: usize,
    pub item: &'a VocabularyItem,
    pub hidden: bool,
}

impl TableRow<'_> {
    pub fn is_cell_hidden(&self, column: Column, view: &TableView<'_>) -> bool {
        self.hidden || view.is_column_hidden(column)
    }
}

/// Snapshot handed to the render target for one frame.
#[derive(Clone, Debug)]
pub struct TableView<'a> {
    pub rows: Vec<TableRow<'a>>,
    pub info: PageInfo,
    pub has_prev: bool,
    pub has_next: bool,
    /// True when the filtered list is empty and no error is shown.
    pub placeholder: bool,
    pub error: Option<&'a str>,
    pub loading: bool,
    pub coord: Coordinate,
    pub search: &'a str,
    pub total_items: usize,
    pub filtered_count: usize,
    hidden_columns: [bool; 3],
}

impl TableView<'_> {
    pub fn is_column_hidden(&self, column: Column) -> bool {
        self.hidden_columns[column.index()]
    }
}

pub struct VocabController {
    state: ViewState,
    locale: String,
}

impl VocabController {
    pub fn new(coord: Coordinate, page_size: usize, locale: &str) -> Self {
        Self {
            state: ViewState::new(coord, page_size),
            locale: locale.to_string(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.state.filtered.len(), self.state.page, self.state.page_size)
    }

    /// Route a render-target event. Returns a load request when the event
    /// needs a new word list.
    pub fn apply(&mut self, command: Command) -> Option<LoadRequest> {
        match command {
            Command::SearchChanged(term) => self.set_search(&term),
            Command::PageSizeChanged(n) => self.set_page_size(n),
            Command::PrevPage => {
                self.go_to_page(-1);
            }
            Command::NextPage => {
                self.go_to_page(1);
            }
            Command::ToggleColumn(column) => self.toggle_column_visibility(column),
            Command::ToggleRow(index) => self.toggle_row_visibility(index),
            Command::SelectWeek(week) => return Some(self.select_week(week)),
            Command::SelectDay(day) => return Some(self.select_day(day)),
            Command::Reload => return Some(self.begin_load(self.state.coord)),
        }
        None
    }

    pub fn select_week(&mut self, week: u32) -> LoadRequest {
        self.begin_load(Coordinate::new(week, 1))
    }

    pub fn select_day(&mut self, day: u32) -> LoadRequest {
        self.begin_load(Coordinate::new(self.state.coord.week, day))
    }

    /// First half of a load: record the coordinate and issue a fresh token.
    pub fn begin_load(&mut self, coord: Coordinate) -> LoadRequest {
        self.state.latest += 1;
        self.state.coord = coord;
        self.state.status = LoadStatus::Loading;
        self.state.error = None;
        // Rows of the previous list must not show under the new coordinate.
        self.state.dataset.clear();
        self.state.search.clear();
        self.state.hidden_rows.clear();
        self.refilter();
        let token = RequestToken(self.state.latest);
        debug!(%coord, token = token.0, "load issued");
        LoadRequest { token, coord }
    }

    /// Second half of a load. Completions for anything but the latest
    /// request are dropped and `false` is returned.
    pub fn complete_load(
        &mut self,
        token: RequestToken,
        result: Result<Dataset, DataUnavailable>,
    ) -> bool {
        if token.0 != self.state.latest {
            debug!(token = token.0, latest = self.state.latest, "discarding stale load");
            return false;
        }

        match result {
            Ok(items) => {
                self.state.dataset = items;
                self.state.status = LoadStatus::Loaded;
                self.state.error = None;
            }
            Err(err) => {
                self.state.dataset.clear();
                self.state.status = LoadStatus::Failed;
                self.state.error = Some(err.user_message(&self.locale));
            }
        }
        self.state.search.clear();
        self.state.hidden_rows.clear();
        self.refilter();
        true
    }

    /// Run a complete load on the current thread.
    pub fn load_with(
        &mut self,
        source: &dyn DataSource,
        cache: Option<&DiskCache>,
        policy: CachePolicy,
        coord: Coordinate,
    ) -> bool {
        let request = self.begin_load(coord);
        let result = loader::fetch_dataset(source, cache, policy, request.coord);
        self.complete_load(request.token, result)
    }

    pub fn set_search(&mut self, term: &str) {
        self.state.search = term.to_string();
        self.refilter();
    }

    pub fn set_page_size(&mut self, n: usize) {
        self.state.page_size = n.max(1);
        self.state.page = 1;
    }

    /// Move by `delta` pages. Returns false when already at the boundary.
    pub fn go_to_page(&mut self, delta: isize) -> bool {
        let target = self.page_info().step(delta);
        if target == self.state.page {
            return false;
        }
        self.state.page = target;
        true
    }

    pub fn toggle_column_visibility(&mut self, column: Column) {
        if !self.state.hidden_columns.remove(&column) {
            self.state.hidden_columns.insert(column);
        }
    }

    pub fn toggle_row_visibility(&mut self, index: usize) {
        if index >= self.state.dataset.len() {
            return;
        }
        if !self.state.hidden_rows.remove(&index) {
            self.state.hidden_rows.insert(index);
        }
    }

    /// Example sentence for a dataset row, or the localized fallback.
    pub fn example_for(&self, index: usize) -> String {
        let locale = self.locale.as_str();
        self.state
            .dataset
            .get(index)
            .and_then(|item| item.example.as_deref())
            .filter(|ex| !ex.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| t!("example.missing", locale = locale).into_owned())
    }

    pub fn render(&self) -> TableView<'_> {
        let state = &self.state;
        let info = self.page_info();
        let range = info.slice_range(state.filtered.len());

        let rows = state.filtered[range.clone()]
            .iter()
            .zip(range.start + 1..)
            .map(|(&index, number)| TableRow {
                number,
                index,
                item: &state.dataset[index],
                hidden: state.hidden_rows.contains(&index),
            })
            .collect();

        let mut hidden_columns = [false; 3];
        for column in &state.hidden_columns {
            hidden_columns[column.index()] = true;
        }

        TableView {
            rows,
            info,
            has_prev: info.has_prev(),
            has_next: info.has_next(),
            placeholder: state.filtered.is_empty()
                && state.error.is_none()
                && state.status != LoadStatus::Loading,
            error: state.error.as_deref(),
            loading: state.status == LoadStatus::Loading,
            coord: state.coord,
            search: &state.search,
            total_items: state.dataset.len(),
            filtered_count: state.filtered.len(),
            hidden_columns,
        }
    }

    fn refilter(&mut self) {
        self.state.filtered = SearchFilter::new(&self.state.search).apply(&self.state.dataset);
        self.state.page = 1;
    }
}
