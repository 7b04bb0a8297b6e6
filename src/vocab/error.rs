use rust_i18n::t;
use thiserror::Error;

use crate::vocab::item::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    NotFound,
    Network(String),
    Malformed(String),
}

/// The single failure the controller knows about: the word list for a
/// coordinate could not be obtained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("vocabulary for {coord} unavailable: {}", describe(.reason))]
pub struct DataUnavailable {
    pub coord: Coordinate,
    pub reason: Reason,
}

fn describe(reason: &Reason) -> String {
    match reason {
        Reason::NotFound => "not found".to_string(),
        Reason::Network(msg) => format!("network error: {msg}"),
        Reason::Malformed(msg) => format!("malformed data: {msg}"),
    }
}

impl DataUnavailable {
    pub fn not_found(coord: Coordinate) -> Self {
        Self {
            coord,
            reason: Reason::NotFound,
        }
    }

    pub fn network(coord: Coordinate, msg: impl ToString) -> Self {
        Self {
            coord,
            reason: Reason::Network(msg.to_string()),
        }
    }

    pub fn malformed(coord: Coordinate, msg: impl ToString) -> Self {
        Self {
            coord,
            reason: Reason::Malformed(msg.to_string()),
        }
    }

    /// Banner text naming the missing week and day.
    pub fn user_message(&self, locale: &str) -> String {
        let week = self.coord.week;
        let day = self.coord.day;
        t!("error.not_found", locale = locale, week = week, day = day).into_owned()
    }
}
