//! Page arithmetic shared by listing and search.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// A validated `(page, size)` pair. Page numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::ZeroPage(page));
        }
        if size == 0 {
            return Err(PageError::ZeroSize);
        }
        (page - 1)
            .checked_mul(size)
            .ok_or(PageError::Overflow { page, size })?;
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> u32 {
        // checked in `new`
        (self.page - 1) * self.size
    }

    /// Slice this page out of an already-materialized list.
    ///
    /// Pages past the end yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.offset() as usize).min(items.len());
        let end = start.saturating_add(self.size as usize).min(items.len());
        &items[start..end]
    }

    /// Pagination metadata for a collection of `total` items.
    pub fn info(&self, total: u64) -> PageInfo {
        PageInfo::new(self.page, total_pages(total, self.size))
    }
}

/// `ceil(total / size)`; zero when there are no items.
pub fn total_pages(total: u64, size: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Pagination metadata returned alongside a page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageInfo {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}

#[cfg(test)]
#[path = "tests/paging_tests.rs"]
mod tests;
