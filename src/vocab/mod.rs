pub mod cache;
pub mod controller;
pub mod error;
pub mod example;
pub mod filter;
pub mod item;
pub mod loader;
pub mod pager;
pub mod source;

pub use controller::{Command, LoadRequest, TableView, VocabController};
pub use error::DataUnavailable;
pub use item::{Column, Coordinate, Dataset, VocabularyItem};
