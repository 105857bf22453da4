//! Operator actions: paging, page size, checker selection and mutations

use crate::engine::{Engine, RefreshOutcome};
use crate::format::page_label;
use crate::validate::validate_new_checker;

impl Engine {
    /// Move `delta` pages and refresh the table.
    ///
    /// Returns `None` without touching the state or the network when the
    /// page would become negative.
    pub async fn change_page(&self, delta: i64) -> Option<RefreshOutcome> {
        {
            let mut state = self.state().write().await;
            let next = state.pagination.change_page(delta)?;
            state.pagination = next;
            tracing::debug!("{}", page_label(next.page()));
        }
        Some(self.refresh_flags().await)
    }

    /// Apply a requested page size (raised to at least 10) and refresh the
    /// current page. Returns `None` when the request is not a number.
    pub async fn set_rows(&self, requested: f64) -> Option<RefreshOutcome> {
        {
            let mut state = self.state().write().await;
            let next = state.pagination.set_rows(requested)?;
            state.pagination = next;
            tracing::debug!("Rows per page set to {}", next.rows());
        }
        Some(self.refresh_flags().await)
    }

    /// Record the operator's checker selection; false if no option has that delta
    pub async fn select_checker(&self, delta: i64) -> bool {
        self.state().write().await.checkers.select(delta)
    }

    /// Validate and add a checker, then rebuild the list from the server's reply
    pub async fn add_checker(&self, service: &str, port: f64, delta: f64) -> crate::Result<()> {
        let checker = match validate_new_checker(service, port, delta) {
            Ok(checker) => checker,
            Err(e) => {
                self.alert(e.to_string()).await;
                return Err(e.into());
            }
        };

        let ticket = self.issue_checkers_ticket();
        match self.api().add_checker(&checker).await {
            Ok(entries) => {
                tracing::info!(
                    "Added checker {} ({}) - {}",
                    checker.service,
                    checker.port,
                    checker.delta
                );
                self.apply_checkers(ticket, &entries).await;
                Ok(())
            }
            Err(e) => {
                self.alert(format!("could not add checker ({})", e.kind()))
                    .await;
                Err(e)
            }
        }
    }

    /// Remove the selected checker. Returns `Ok(false)` without sending
    /// anything while the placeholder is selected.
    pub async fn remove_checker(&self) -> crate::Result<bool> {
        let Some(delta) = self.state().read().await.checkers.selected_delta() else {
            return Ok(false);
        };

        let ticket = self.issue_checkers_ticket();
        match self.api().remove_checker(delta).await {
            Ok(entries) => {
                tracing::info!("Removed checker with delta {}", delta);
                self.apply_checkers(ticket, &entries).await;
                Ok(true)
            }
            Err(e) => {
                self.alert(format!("could not remove checker ({})", e.kind()))
                    .await;
                Err(e)
            }
        }
    }
}
