use tracing::{debug, info, warn};

use crate::vocab::cache::DiskCache;
use crate::vocab::error::DataUnavailable;
use crate::vocab::item::{Coordinate, Dataset};
use crate::vocab::source::DataSource;

/// How a load interacts with the disk cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CachePolicy {
    pub write: bool,
    pub offline_fallback: bool,
}

/// Fetch one word list and write it through to the cache. Cache trouble
/// is logged and never turns a successful fetch into a failure.
pub fn fetch_dataset(
    source: &dyn DataSource,
    cache: Option<&DiskCache>,
    policy: CachePolicy,
    coord: Coordinate,
) -> Result<Dataset, DataUnavailable> {
    match source.fetch(coord) {
        Ok(items) => {
            info!(%coord, count = items.len(), source = %source.describe(), "loaded word list");
            if policy.write {
                if let Some(cache) = cache {
                    if let Err(e) = cache.store_dataset(coord, &items) {
                        warn!(%coord, error = %e, "failed to write word list cache");
                    }
                }
            }
            Ok(items)
        }
        Err(err) => {
            warn!(error = %err, "word list unavailable");
            if policy.offline_fallback {
                if let Some(items) = cache.and_then(|c| c.load_dataset(coord)) {
                    debug!(%coord, "serving word list from cache");
                    return Ok(items);
                }
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::item::VocabularyItem;

    struct Fixed(Option<Dataset>);

    impl DataSource for Fixed {
        fn fetch(&self, coord: Coordinate) -> Result<Dataset, DataUnavailable> {
            self.0
                .clone()
                .ok_or_else(|| DataUnavailable::not_found(coord))
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn sample() -> Dataset {
        vec![VocabularyItem::new("kasa", "かさ", "payung")]
    }

    #[test]
    fn success_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::with_base_dir(dir.path().to_path_buf()).unwrap();
        let policy = CachePolicy {
            write: true,
            offline_fallback: false,
        };
        let coord = Coordinate::new(1, 1);
        let items = fetch_dataset(&Fixed(Some(sample())), Some(&cache), policy, coord).unwrap();
        assert_eq!(items, sample());
        assert_eq!(cache.load_dataset(coord), Some(sample()));
    }

    #[test]
    fn cache_write_failure_does_not_fail_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::with_base_dir(dir.path().join("c")).unwrap();
        std::fs::remove_dir_all(dir.path().join("c")).unwrap();
        let policy = CachePolicy {
            write: true,
            offline_fallback: false,
        };
        let result = fetch_dataset(&Fixed(Some(sample())), Some(&cache), policy, Coordinate::new(1, 1));
        assert!(result.is_ok());
    }

    #[test]
    fn cache_is_not_read_without_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::with_base_dir(dir.path().to_path_buf()).unwrap();
        let coord = Coordinate::new(2, 3);
        cache.store_dataset(coord, &sample()).unwrap();

        let result = fetch_dataset(&Fixed(None), Some(&cache), CachePolicy::default(), coord);
        assert!(result.is_err());
    }

    #[test]
    fn offline_fallback_reads_cache_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::with_base_dir(dir.path().to_path_buf()).unwrap();
        let coord = Coordinate::new(2, 3);
        cache.store_dataset(coord, &sample()).unwrap();

        let policy = CachePolicy {
            write: true,
            offline_fallback: true,
        };
        let items = fetch_dataset(&Fixed(None), Some(&cache), policy, coord).unwrap();
        assert_eq!(items, sample());
    }
}
