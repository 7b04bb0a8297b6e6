use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use rust_embed::Embed;
use tracing::debug;

use crate::vocab::error::DataUnavailable;
use crate::vocab::item::{Coordinate, Dataset};

/// Where word lists come from. Implementations must be shareable with the
/// fetch worker thread.
pub trait DataSource: Send + Sync {
    fn fetch(&self, coord: Coordinate) -> Result<Dataset, DataUnavailable>;

    fn describe(&self) -> String;
}

pub fn parse_dataset(coord: Coordinate, content: &str) -> Result<Dataset, DataUnavailable> {
    serde_json::from_str(content).map_err(|e| DataUnavailable::malformed(coord, e))
}

/// Reads `<root>/data/kotoba-minggu{w}-halaman{d}.json` from disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, coord: Coordinate) -> PathBuf {
        self.root.join("data").join(coord.file_name())
    }
}

impl DataSource for DirSource {
    fn fetch(&self, coord: Coordinate) -> Result<Dataset, DataUnavailable> {
        let path = self.path_for(coord);
        debug!(path = %path.display(), "reading word list");
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataUnavailable::not_found(coord),
            _ => DataUnavailable::network(coord, e),
        })?;
        parse_dataset(coord, &content)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[derive(Embed)]
#[folder = "assets/data/"]
struct BundledData;

/// Sample word lists compiled into the binary.
#[derive(Default)]
pub struct BundledSource;

impl BundledSource {
    pub fn available() -> Vec<Coordinate> {
        let mut coords: Vec<Coordinate> = BundledData::iter()
            .filter_map(|name| parse_file_name(&name))
            .collect();
        coords.sort_by_key(|c| (c.week, c.day));
        coords
    }
}

impl DataSource for BundledSource {
    fn fetch(&self, coord: Coordinate) -> Result<Dataset, DataUnavailable> {
        let file = BundledData::get(&coord.file_name())
            .ok_or_else(|| DataUnavailable::not_found(coord))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| DataUnavailable::malformed(coord, e))?;
        parse_dataset(coord, content)
    }

    fn describe(&self) -> String {
        "bundled".to_string()
    }
}

/// Inverse of [`Coordinate::file_name`].
pub fn parse_file_name(name: &str) -> Option<Coordinate> {
    let rest = name.strip_prefix("kotoba-minggu")?.strip_suffix(".json")?;
    let (week, day) = rest.split_once("-halaman")?;
    Some(Coordinate::new(week.parse().ok()?, day.parse().ok()?))
}

/// Fetches `<base_url>/data/kotoba-minggu{w}-halaman{d}.json` over HTTP.
#[cfg(feature = "network")]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "network")]
impl HttpSource {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url_for(&self, coord: Coordinate) -> String {
        format!("{}/{}", self.base_url, coord.resource_path())
    }
}

#[cfg(feature = "network")]
impl DataSource for HttpSource {
    fn fetch(&self, coord: Coordinate) -> Result<Dataset, DataUnavailable> {
        let url = self.url_for(coord);
        debug!(%url, "fetching word list");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataUnavailable::network(coord, e))?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DataUnavailable::not_found(coord));
        }
        if !status.is_success() {
            return Err(DataUnavailable::network(coord, format!("HTTP {status}")));
        }
        let body = response
            .text()
            .map_err(|e| DataUnavailable::network(coord, e))?;
        parse_dataset(coord, &body)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
