//! Zero-based page requests and pages.

use serde::{Deserialize, Serialize};

/// Largest page a caller may ask for.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Highest page index accepted. Keeps `page * size` within a SQL `OFFSET`.
pub const MAX_PAGE: u64 = u32::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 0, at most `MAX_PAGE`.
    pub page: u64,
    /// Items per page, within `1..=MAX_PAGE_SIZE`.
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: page.min(MAX_PAGE),
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the totals across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(request.size),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_size() {
        assert_eq!(PageRequest::new(0, 0).size, 1);
        assert_eq!(PageRequest::new(0, 500).size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::default().size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(2, 10).offset(), 20);
    }

    #[test]
    fn huge_page_index_is_capped() {
        let request = PageRequest::new(u64::MAX / 2, 20);
        assert_eq!(request.page, MAX_PAGE);
        assert_eq!(request.offset(), MAX_PAGE * 20);

        let request = PageRequest::new(u64::MAX, MAX_PAGE_SIZE);
        assert!(request.offset() <= i64::MAX as u64);
    }

    #[test]
    fn totals() {
        let page: Page<()> = Page::new(vec![], PageRequest::new(0, 10), 25);
        assert_eq!(page.total_pages, 3);

        let page: Page<()> = Page::new(vec![], PageRequest::new(0, 10), 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn map_keeps_totals() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 5).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
    }
}
