use std::fs;
use std::path::Path;

use kotoba::vocab::cache::DiskCache;
use kotoba::vocab::controller::LoadStatus;
use kotoba::vocab::loader::CachePolicy;
use kotoba::vocab::source::{BundledSource, DataSource, DirSource};
use kotoba::vocab::{Column, Command, Coordinate, VocabController, VocabularyItem};

fn write_list(root: &Path, coord: Coordinate, items: &[VocabularyItem]) {
    let dir = root.join("data");
    fs::create_dir_all(&dir).unwrap();
    let json = serde_json::to_string(items).unwrap();
    fs::write(dir.join(coord.file_name()), json).unwrap();
}

fn numbered(n: usize) -> Vec<VocabularyItem> {
    (1..=n)
        .map(|i| VocabularyItem::new(&format!("kotoba{i}"), &format!("kana{i}"), &format!("arti{i}")))
        .collect()
}

#[test]
fn twenty_five_items_span_three_pages() {
    let tmp = tempfile::tempdir().unwrap();
    let coord = Coordinate::new(1, 1);
    write_list(tmp.path(), coord, &numbered(25));

    let source = DirSource::new(tmp.path());
    let mut controller = VocabController::new(coord, 10, "id");
    assert!(controller.load_with(&source, None, CachePolicy::default(), coord));

    controller.apply(Command::NextPage);
    controller.apply(Command::NextPage);
    let view = controller.render();
    assert_eq!(view.info.total_pages, 3);
    assert_eq!(view.info.page, 3);
    let numbers: Vec<usize> = view.rows.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![21, 22, 23, 24, 25]);
    assert!(view.has_prev);
    assert!(!view.has_next);
}

#[test]
fn empty_list_shows_placeholder_with_navigation_disabled() {
    let tmp = tempfile::tempdir().unwrap();
    let coord = Coordinate::new(1, 4);
    write_list(tmp.path(), coord, &[]);

    let source = DirSource::new(tmp.path());
    let mut controller = VocabController::new(coord, 10, "id");
    controller.load_with(&source, None, CachePolicy::default(), coord);

    let view = controller.render();
    assert!(view.placeholder);
    assert!(view.rows.is_empty());
    assert_eq!(view.info.total_pages, 1);
    assert!(!view.has_prev);
    assert!(!view.has_next);
    assert!(view.error.is_none());
}

#[test]
fn missing_file_reports_week_and_day() {
    let tmp = tempfile::tempdir().unwrap();
    let source = DirSource::new(tmp.path());
    let coord = Coordinate::new(2, 3);
    let mut controller = VocabController::new(coord, 10, "id");
    controller.load_with(&source, None, CachePolicy::default(), coord);

    assert_eq!(controller.state().status, LoadStatus::Failed);
    let view = controller.render();
    let error = view.error.unwrap();
    assert!(error.contains("Minggu 2"), "{error}");
    assert!(error.contains("Hari 3"), "{error}");
    assert!(view.rows.is_empty());
    assert!(!view.placeholder);
}

#[test]
fn malformed_file_is_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    let coord = Coordinate::new(3, 1);
    fs::create_dir_all(tmp.path().join("data")).unwrap();
    fs::write(tmp.path().join("data").join(coord.file_name()), "{not json").unwrap();

    let source = DirSource::new(tmp.path());
    let mut controller = VocabController::new(coord, 10, "en");
    controller.load_with(&source, None, CachePolicy::default(), coord);
    assert_eq!(controller.state().status, LoadStatus::Failed);
    assert!(controller.render().error.is_some());
}

#[test]
fn search_narrows_and_resets_page() {
    let tmp = tempfile::tempdir().unwrap();
    let coord = Coordinate::new(1, 1);
    let mut items = numbered(12);
    items.push(VocabularyItem::new("kasa", "かさ", "payung"));
    items.push(VocabularyItem::new("tori", "とり", "burung"));
    write_list(tmp.path(), coord, &items);

    let source = DirSource::new(tmp.path());
    let mut controller = VocabController::new(coord, 5, "id");
    controller.load_with(&source, None, CachePolicy::default(), coord);
    controller.apply(Command::NextPage);
    assert_eq!(controller.state().page, 2);

    controller.apply(Command::SearchChanged("kas".to_string()));
    let view = controller.render();
    assert_eq!(view.info.page, 1);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].item.term, "kasa");
}

#[test]
fn hidden_column_survives_week_change_but_rows_reset() {
    let tmp = tempfile::tempdir().unwrap();
    write_list(tmp.path(), Coordinate::new(1, 1), &numbered(3));
    write_list(tmp.path(), Coordinate::new(2, 1), &numbered(4));

    let source = DirSource::new(tmp.path());
    let policy = CachePolicy::default();
    let mut controller = VocabController::new(Coordinate::new(1, 1), 10, "id");
    controller.load_with(&source, None, policy, Coordinate::new(1, 1));
    controller.apply(Command::ToggleColumn(Column::Meaning));
    controller.apply(Command::ToggleRow(0));
    controller.apply(Command::SearchChanged("kotoba1".to_string()));

    let request = controller.apply(Command::SelectWeek(2)).unwrap();
    assert_eq!(request.coord, Coordinate::new(2, 1));
    controller.load_with(&source, None, policy, request.coord);

    let view = controller.render();
    assert!(view.is_column_hidden(Column::Meaning));
    assert!(view.rows.iter().all(|r| !r.hidden));
    assert_eq!(view.search, "");
    assert_eq!(view.rows.len(), 4);
}

#[test]
fn stale_completion_is_dropped() {
    let tmp = tempfile::tempdir().unwrap();
    write_list(tmp.path(), Coordinate::new(1, 1), &numbered(3));
    write_list(tmp.path(), Coordinate::new(1, 2), &numbered(7));
    let source = DirSource::new(tmp.path());

    let mut controller = VocabController::new(Coordinate::new(1, 1), 10, "id");
    let first = controller.begin_load(Coordinate::new(1, 1));
    let second = controller.apply(Command::SelectDay(2)).unwrap();

    let late = source.fetch(first.coord);
    let fresh = source.fetch(second.coord);
    assert!(controller.complete_load(second.token, fresh));
    assert!(!controller.complete_load(first.token, late));

    assert_eq!(controller.state().coord, Coordinate::new(1, 2));
    assert_eq!(controller.state().dataset.len(), 7);
}

#[test]
fn offline_fallback_serves_cached_list() {
    let data = tempfile::tempdir().unwrap();
    let cache_dir = tempfile::tempdir().unwrap();
    let coord = Coordinate::new(1, 1);
    write_list(data.path(), coord, &numbered(6));

    let cache = DiskCache::with_base_dir(cache_dir.path().to_path_buf()).unwrap();
    let policy = CachePolicy {
        write: true,
        offline_fallback: true,
    };
    let source = DirSource::new(data.path());
    let mut controller = VocabController::new(coord, 10, "id");
    controller.load_with(&source, Some(&cache), policy, coord);
    assert_eq!(cache.load_dataset(coord).map(|d| d.len()), Some(6));

    fs::remove_file(data.path().join("data").join(coord.file_name())).unwrap();
    controller.apply(Command::Reload);
    controller.load_with(&source, Some(&cache), policy, coord);
    assert_eq!(controller.state().status, LoadStatus::Loaded);
    assert_eq!(controller.state().dataset.len(), 6);

    let strict = CachePolicy {
        write: true,
        offline_fallback: false,
    };
    controller.load_with(&source, Some(&cache), strict, coord);
    assert_eq!(controller.state().status, LoadStatus::Failed);
}

#[test]
fn bundled_lists_load() {
    let available = BundledSource::available();
    assert!(available.contains(&Coordinate::new(1, 1)));

    let mut controller = VocabController::new(Coordinate::new(1, 1), 10, "id");
    controller.load_with(&BundledSource, None, CachePolicy::default(), Coordinate::new(1, 1));
    let view = controller.render();
    assert_eq!(view.total_items, 25);
    assert_eq!(view.info.total_pages, 3);
}
