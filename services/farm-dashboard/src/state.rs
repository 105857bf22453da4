//! Shared dashboard state: pagination, rendered markup, selection and notices

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::checkers::CheckerList;
use crate::pagination::Pagination;

/// Operator-facing message recorded for display on the console page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub timestamp_epoch_ms: u64,
}

/// Everything the dashboard shows, rebuilt from server responses
#[derive(Debug)]
pub struct DashboardState {
    pub pagination: Pagination,
    /// Markup of the flags container; empty until the first successful fetch
    pub flags_markup: String,
    pub checkers: CheckerList,
    pub notices: VecDeque<Notice>,
    pub notices_max_size: usize,
}

impl DashboardState {
    pub fn new(pagination: Pagination, notices_max_size: usize) -> Self {
        Self {
            pagination,
            flags_markup: String::new(),
            checkers: CheckerList::default(),
            notices: VecDeque::with_capacity(notices_max_size),
            notices_max_size,
        }
    }

    /// Add a notice, dropping the oldest once the history is full
    pub fn add_notice(&mut self, notice: Notice) {
        if self.notices_max_size == 0 {
            return;
        }
        if self.notices.len() >= self.notices_max_size {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }
}

/// Thread-safe shared state handle
pub type StateHandle = Arc<RwLock<DashboardState>>;

pub fn new_state_handle(pagination: Pagination, notices_max_size: usize) -> StateHandle {
    Arc::new(RwLock::new(DashboardState::new(
        pagination,
        notices_max_size,
    )))
}

/// Monotonic request tickets for one resource.
///
/// A response may only be applied while its ticket is still the latest one
/// issued, so responses from superseded requests are dropped.
#[derive(Debug, Default)]
pub struct Sequencer {
    latest: AtomicU64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the ticket for a request about to be sent
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
