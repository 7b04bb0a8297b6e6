use std::ops::Range;

/// Page position for a filtered list. Pages are 1-based and there is
/// always at least one page, even for an empty list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

impl PageInfo {
    pub fn new(len: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(len, page_size);
        Self {
            page: page.clamp(1, total_pages),
            total_pages,
            page_size,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Range of positions in the filtered list covered by this page.
    pub fn slice_range(&self, len: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    /// Page after moving by `delta`, clamped to the valid range.
    pub fn step(&self, delta: isize) -> usize {
        let target = self.page as isize + delta;
        target.clamp(1, self.total_pages as isize) as usize
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_items_by_ten() {
        let info = PageInfo::new(25, 3, 10);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.slice_range(25), 20..25);
        assert!(info.has_prev());
        assert!(!info.has_next());
    }

    #[test]
    fn empty_list_has_one_page() {
        let info = PageInfo::new(0, 1, 10);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.slice_range(0), 0..0);
        assert!(!info.has_prev());
        assert!(!info.has_next());
    }

    #[test]
    fn pages_partition_the_list() {
        for len in [0usize, 1, 9, 10, 11, 25, 100, 101] {
            for size in [1usize, 3, 10, 50] {
                let pages = total_pages(len, size);
                assert_eq!(pages, len.div_ceil(size).max(1));
                let mut rebuilt = Vec::new();
                for page in 1..=pages {
                    let range = PageInfo::new(len, page, size).slice_range(len);
                    assert!(range.len() <= size);
                    rebuilt.extend(range);
                }
                assert_eq!(rebuilt, (0..len).collect::<Vec<_>>(), "len={len} size={size}");
            }
        }
    }

    #[test]
    fn step_clamps_at_both_ends() {
        let info = PageInfo::new(25, 1, 10);
        assert_eq!(info.step(-1), 1);
        assert_eq!(info.step(1), 2);
        let last = PageInfo::new(25, 3, 10);
        assert_eq!(last.step(1), 3);
        assert_eq!(last.step(-5), 1);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        assert_eq!(PageInfo::new(5, 9, 2).page, 3);
        assert_eq!(PageInfo::new(5, 0, 2).page, 1);
        assert_eq!(PageInfo::new(5, 1, 0).page_size, 1);
    }
}
