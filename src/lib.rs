// Library target shared by the binary, integration tests and criterion
// benchmarks.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod event;
pub mod logging;
pub mod ui;
pub mod vocab;
