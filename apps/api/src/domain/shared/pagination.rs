use serde::{Deserialize, Serialize};

/// Number of books shown on one listing page.
pub const BOOKS_PER_PAGE: i64 = 5;

/// A 1-based page number paired with the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub number: i64,
    pub size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 1,
            size: BOOKS_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Builds a request for `number` with the catalog's fixed page size.
    ///
    /// Returns `None` for page numbers below 1. Numbers past the last page
    /// are accepted and simply select nothing.
    pub fn new(number: i64) -> Option<Self> {
        (number >= 1).then_some(Self {
            number,
            size: BOOKS_PER_PAGE,
        })
    }

    /// Parses the raw `:page` route segment.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().and_then(Self::new)
    }

    pub fn paginate(&self, total_count: i64) -> Page {
        paginate(total_count, self.number, self.size)
    }
}

/// Offset into the ordered result set plus the number of pages it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: i64,
    pub total_pages: i64,
}

/// Computes `offset = (page_number - 1) * page_size` and
/// `total_pages = ceil(total_count / page_size)`.
///
/// `page_number` is not checked against `total_pages`.
pub fn paginate(total_count: i64, page_number: i64, page_size: i64) -> Page {
    let total_pages = if total_count <= 0 {
        0
    } else {
        (total_count - 1) / page_size + 1
    };

    Page {
        offset: (page_number - 1).saturating_mul(page_size),
        total_pages,
    }
}
