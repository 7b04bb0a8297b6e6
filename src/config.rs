use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::vocab::Coordinate;
use crate::vocab::loader::CachePolicy;

pub const SUPPORTED_LOCALES: &[&str] = &["id", "en"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default = "default_weeks")]
    pub weeks: u32,
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,
    #[serde(default = "default_start_week")]
    pub start_week: u32,
    #[serde(default = "default_start_day")]
    pub start_day: u32,
    /// Directory containing a `data/` folder of word lists.
    #[serde(default)]
    pub data_dir: Option<String>,
    /// Base URL serving `data/kotoba-minggu{w}-halaman{d}.json`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,
    #[serde(default = "default_offline_fallback")]
    pub offline_fallback: bool,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_locale() -> String {
    "id".to_string()
}
fn default_page_size() -> usize {
    10
}
fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 20, 50]
}
fn default_weeks() -> u32 {
    12
}
fn default_days_per_week() -> u32 {
    5
}
fn default_start_week() -> u32 {
    1
}
fn default_start_day() -> u32 {
    1
}
fn default_cache_enabled() -> bool {
    true
}
fn default_offline_fallback() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            locale: default_locale(),
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            weeks: default_weeks(),
            days_per_week: default_days_per_week(),
            start_week: default_start_week(),
            start_day: default_start_day(),
            data_dir: None,
            base_url: None,
            cache_enabled: default_cache_enabled(),
            offline_fallback: default_offline_fallback(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kotoba")
            .join("config.toml")
    }

    /// Clamp values into usable ranges. Call after deserialization and
    /// after applying CLI overrides.
    pub fn validate(&mut self) {
        self.weeks = self.weeks.max(1);
        self.days_per_week = self.days_per_week.max(1);
        self.start_week = self.start_week.clamp(1, self.weeks);
        self.start_day = self.start_day.clamp(1, self.days_per_week);
        self.page_size = self.page_size.clamp(1, 500);

        self.page_size_options.retain(|&n| n > 0);
        if self.page_size_options.is_empty() {
            self.page_size_options = default_page_size_options();
        }
        if !self.page_size_options.contains(&self.page_size) {
            self.page_size_options.push(self.page_size);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();

        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            self.locale = default_locale();
        }
    }

    pub fn start_coordinate(&self) -> Coordinate {
        Coordinate::new(self.start_week, self.start_day)
    }

    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy {
            write: self.cache_enabled,
            offline_fallback: self.cache_enabled && self.offline_fallback,
        }
    }

    /// Next page size in the cycle after `current`.
    pub fn next_page_size(&self, current: usize) -> usize {
        self.page_size_options
            .iter()
            .copied()
            .find(|&n| n > current)
            .or_else(|| self.page_size_options.first().copied())
            .unwrap_or(current)
    }
}
