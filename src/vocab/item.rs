use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One row of a word list. Field names on the wire follow the published
/// data files (`kotoba`, `kana`, `arti`, `contoh`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    #[serde(rename = "kotoba", alias = "term", default, deserialize_with = "null_as_empty")]
    pub term: String,
    #[serde(rename = "kana", alias = "reading", default, deserialize_with = "null_as_empty")]
    pub reading: String,
    #[serde(rename = "arti", alias = "meaning", default, deserialize_with = "null_as_empty")]
    pub meaning: String,
    #[serde(
        rename = "contoh",
        alias = "example",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<String>,
}

/// Published lists sometimes carry `null` for a blank field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl VocabularyItem {
    pub fn new(term: &str, reading: &str, meaning: &str) -> Self {
        Self {
            term: term.to_string(),
            reading: reading.to_string(),
            meaning: meaning.to_string(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }

    /// Text shown in a table cell; blank fields render as `-`.
    pub fn display(field: &str) -> &str {
        if field.is_empty() { "-" } else { field }
    }

    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Term => &self.term,
            Column::Reading => &self.reading,
            Column::Meaning => &self.meaning,
        }
    }
}

pub type Dataset = Vec<VocabularyItem>;

/// Columns that can be hidden for self-testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Term,
    Reading,
    Meaning,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Term, Column::Reading, Column::Meaning];

    pub fn index(self) -> usize {
        match self {
            Column::Term => 0,
            Column::Reading => 1,
            Column::Meaning => 2,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "kotoba" | "term" => Some(Column::Term),
            "kana" | "reading" => Some(Column::Reading),
            "arti" | "meaning" => Some(Column::Meaning),
            _ => None,
        }
    }
}

/// Week/day pair selecting which word list to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub week: u32,
    pub day: u32,
}

impl Coordinate {
    pub fn new(week: u32, day: u32) -> Self {
        Self { week, day }
    }

    pub fn file_name(&self) -> String {
        format!("kotoba-minggu{}-halaman{}.json", self.week, self.day)
    }

    /// Path relative to a source root, e.g. `data/kotoba-minggu1-halaman2.json`.
    pub fn resource_path(&self) -> String {
        format!("data/{}", self.file_name())
    }

    pub fn cache_key(&self) -> String {
        format!("week{}day{}", self.week, self.day)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week {} day {}", self.week, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_published_field_names() {
        let json = r#"[{"kotoba":"傘","kana":"かさ","arti":"payung","contoh":"**傘**を持つ"}]"#;
        let items: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].term, "傘");
        assert_eq!(items[0].reading, "かさ");
        assert_eq!(items[0].meaning, "payung");
        assert_eq!(items[0].example.as_deref(), Some("**傘**を持つ"));
    }

    #[test]
    fn deserializes_english_aliases_and_missing_fields() {
        let json = r#"[{"term":"tori","reading":"とり"}]"#;
        let items: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].term, "tori");
        assert_eq!(items[0].meaning, "");
        assert!(items[0].example.is_none());
        assert_eq!(VocabularyItem::display(&items[0].meaning), "-");
    }

    #[test]
    fn null_fields_read_as_blank() {
        let json = r#"[{"kotoba":"鳥","kana":null,"arti":"burung","contoh":null},
                       {"kotoba":null,"kana":"かさ","arti":null}]"#;
        let items: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].term, "鳥");
        assert_eq!(items[0].reading, "");
        assert!(items[0].example.is_none());
        assert_eq!(VocabularyItem::display(items[0].field(Column::Reading)), "-");
        assert_eq!(items[1].term, "");
        assert_eq!(items[1].meaning, "");
        assert_eq!(VocabularyItem::display(items[1].field(Column::Term)), "-");
    }

    #[test]
    fn coordinate_naming() {
        let coord = Coordinate::new(2, 3);
        assert_eq!(coord.resource_path(), "data/kotoba-minggu2-halaman3.json");
        assert_eq!(coord.cache_key(), "week2day3");
    }

    #[test]
    fn column_keys() {
        assert_eq!(Column::from_key("kana"), Some(Column::Reading));
        assert_eq!(Column::from_key("contoh"), None);
        assert_eq!(Column::Meaning.index(), 2);
    }
}
