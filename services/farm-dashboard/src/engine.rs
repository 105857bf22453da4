//! Engine: keeps the dashboard state in sync with the farm server

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio_util::sync::CancellationToken;

use crate::api::{CheckerEntry, FarmApi};
use crate::checkers;
use crate::error::DashboardError;
use crate::sanitize::Sanitizer;
use crate::state::{Notice, Sequencer, StateHandle};
use crate::table;

/// What happened to the response of a refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response replaced the rendered content
    Applied,
    /// A newer request was issued meanwhile; the response was dropped
    Superseded,
    /// The request failed; the previous content is still shown
    Failed,
}

/// The engine polls the farm and applies responses to the shared state
pub struct Engine {
    api: FarmApi,
    sanitizer: Arc<dyn Sanitizer>,
    state: StateHandle,
    flags_seq: Sequencer,
    checkers_seq: Sequencer,
    cancel: CancellationToken,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("api", &self.api)
            .field("sanitizer", &self.sanitizer)
            .finish()
    }
}

impl Engine {
    pub fn new(
        api: FarmApi,
        sanitizer: Arc<dyn Sanitizer>,
        state: StateHandle,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            api,
            sanitizer,
            state,
            flags_seq: Sequencer::new(),
            checkers_seq: Sequencer::new(),
            cancel,
        }
    }

    pub fn state(&self) -> &StateHandle {
        &self.state
    }

    pub(crate) fn api(&self) -> &FarmApi {
        &self.api
    }

    /// Fetch the current page of flags and replace the table markup
    pub async fn refresh_flags(&self) -> RefreshOutcome {
        // the ticket must be issued under the same guard that read the window
        let (window, ticket) = {
            let state = self.state.read().await;
            (state.pagination.window(), self.flags_seq.issue())
        };

        let flags = match self.api.list_flags(window).await {
            Ok(flags) => flags,
            Err(e) => {
                log_failure("could not refresh flags table", &e);
                return RefreshOutcome::Failed;
            }
        };

        let markup = table::render(&flags, self.sanitizer.as_ref());
        let mut state = self.state.write().await;
        if !self.flags_seq.is_latest(ticket) {
            tracing::debug!("Dropping superseded flags response (ticket {})", ticket);
            return RefreshOutcome::Superseded;
        }
        state.flags_markup = markup;
        tracing::debug!(
            "Flags table refreshed: {} rows from offset {}",
            flags.len(),
            window.start
        );
        RefreshOutcome::Applied
    }

    /// Fetch the checker list and rebuild the selector
    pub async fn refresh_checkers(&self) -> RefreshOutcome {
        let ticket = self.checkers_seq.issue();
        match self.api.list_checkers().await {
            Ok(entries) => self.apply_checkers(ticket, &entries).await,
            Err(e) => {
                log_failure("could not refresh selector", &e);
                RefreshOutcome::Failed
            }
        }
    }

    /// Refresh flags, then checkers
    pub async fn refresh_all(&self) {
        self.refresh_flags().await;
        self.refresh_checkers().await;
    }

    /// Refresh immediately, then every `interval` until cancelled
    pub async fn run(&self, interval: Duration) {
        loop {
            self.refresh_all().await;

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Refresh loop cancelled");
                    break;
                }
            }
        }
    }

    pub(crate) fn issue_checkers_ticket(&self) -> u64 {
        self.checkers_seq.issue()
    }

    /// Rebuild the selector from `entries`, keeping the current selection by delta
    pub(crate) async fn apply_checkers(
        &self,
        ticket: u64,
        entries: &[CheckerEntry],
    ) -> RefreshOutcome {
        let mut state = self.state.write().await;
        if !self.checkers_seq.is_latest(ticket) {
            tracing::debug!("Dropping superseded checker response (ticket {})", ticket);
            return RefreshOutcome::Superseded;
        }
        let previous = state.checkers.selected_delta();
        state.checkers = checkers::rebuild(entries, previous, self.sanitizer.as_ref());
        tracing::debug!(
            "Checker list rebuilt: {} of {} entries shown",
            state.checkers.options().len(),
            entries.len()
        );
        RefreshOutcome::Applied
    }

    /// Show a message to the operator
    pub(crate) async fn alert(&self, message: String) {
        tracing::warn!("{}", message);
        self.state.write().await.add_notice(Notice {
            message,
            timestamp_epoch_ms: current_epoch_ms(),
        });
    }
}

fn log_failure(context: &str, error: &DashboardError) {
    tracing::warn!("{} ({}): {}", context, error.kind(), error);
}

fn current_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
