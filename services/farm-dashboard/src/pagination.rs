//! Page/row state for the flags table
//!
//! Transitions are pure: they return the next state (or `None` when the
//! request is rejected) and leave it to the caller to store it and refresh.
//! Changing the page size keeps the current page.

use serde::{Deserialize, Serialize};

/// Smallest page size the table will request
pub const MIN_ROWS: u64 = 10;

/// Offset/limit window sent to /api/flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchWindow {
    pub start: u64,
    pub count: u64,
}

impl Default for FetchWindow {
    fn default() -> Self {
        Pagination::default().window()
    }
}

/// Zero-based page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page: u64,
    rows: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            rows: MIN_ROWS,
        }
    }
}

impl Pagination {
    pub fn new(page: u64, rows: u64) -> Self {
        Self {
            page,
            rows: clamp_rows(rows),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn window(&self) -> FetchWindow {
        FetchWindow {
            start: self.page.saturating_mul(self.rows),
            count: self.rows,
        }
    }

    /// Move by `delta` pages. Returns `None` when the result would be negative.
    pub fn change_page(&self, delta: i64) -> Option<Pagination> {
        let page = i128::from(self.page) + i128::from(delta);
        if page < 0 {
            return None;
        }
        Some(Pagination {
            page: u64::try_from(page).unwrap_or(u64::MAX),
            rows: self.rows,
        })
    }

    /// Apply an operator-requested page size.
    ///
    /// Values below [`MIN_ROWS`] are raised to it. A request that is not a
    /// number leaves the state unchanged and returns `None`.
    pub fn set_rows(&self, requested: f64) -> Option<Pagination> {
        if !requested.is_finite() {
            return None;
        }
        let rows = if requested < MIN_ROWS as f64 {
            MIN_ROWS
        } else {
            requested.trunc() as u64
        };
        Some(Pagination {
            page: self.page,
            rows,
        })
    }
}

fn clamp_rows(rows: u64) -> u64 {
    rows.max(MIN_ROWS)
}
