use crate::vocab::item::VocabularyItem;

/// Case-insensitive substring match over term and reading.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(keyword: &str) -> Self {
        Self {
            needle: keyword.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, item: &VocabularyItem) -> bool {
        if self.is_empty() {
            return true;
        }
        contains_folded(&item.term, &self.needle) || contains_folded(&item.reading, &self.needle)
    }

    /// Indices into `items` that pass the filter, in dataset order.
    pub fn apply(&self, items: &[VocabularyItem]) -> Vec<usize> {
        if self.is_empty() {
            return (0..items.len()).collect();
        }
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .map(|(idx, _)| idx)
            .collect()
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle)
}
